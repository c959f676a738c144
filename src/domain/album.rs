//! Album timeline entries.

use serde::Serialize;

use super::Dataset;
use crate::loader::{Record, Row, RowError};

/// One album on the timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlbumRecord {
    /// Release year; grouping key of the timeline. Never empty.
    pub year: String,
    /// Album title.
    pub title: String,
    /// Release type, e.g. `"Mini Album"` (CSV column `type`).
    #[serde(rename = "type")]
    pub album_type: String,
    /// Fan moments count as authored (CSV column `moments`, or the
    /// older `sales`).
    pub moments: String,
    /// Cover image URL.
    pub img: String,
    /// Description.
    pub desc: String,
    /// Share link; `None` renders the share affordance inert.
    pub link: Option<String>,
}

impl AlbumRecord {
    /// Share link if one was authored.
    #[must_use]
    pub fn share_link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    /// Moments count as a number, when the cell holds a plain integer.
    #[must_use]
    pub fn moments_count(&self) -> Option<u64> {
        self.moments.trim().parse().ok()
    }
}

impl Record for AlbumRecord {
    const DATASET: Dataset = Dataset::Albums;

    fn from_row(row: &Row) -> Result<Self, RowError> {
        let moments = row
            .text("moments")
            .or_else(|_| row.text("sales"))
            .map_err(|_| RowError::MissingColumn("moments".to_string()))?;
        Ok(Self {
            year: row.non_empty_text("year")?.trim().to_string(),
            title: row.text("title")?,
            album_type: row.text("type")?,
            moments,
            img: row.text("img")?,
            desc: row.text("desc")?,
            link: row.optional_text("link"),
        })
    }
}
