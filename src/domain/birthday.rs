//! Birthday member bar and event river.

use serde::Serialize;

use super::{Dataset, MemberId};
use crate::loader::{Record, Row, RowError};

/// One entry of the member filter bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BirthdayMember {
    /// Member id; `"all"` marks the "no filter" entry.
    pub id: MemberId,
    /// Display name.
    pub name: String,
    /// Avatar URL. Unused for the `"all"` entry.
    pub avatar: String,
}

impl BirthdayMember {
    /// Returns `true` for the reserved "no filter" entry.
    #[must_use]
    pub fn is_all(&self) -> bool {
        self.id.is_all_sentinel()
    }
}

impl Record for BirthdayMember {
    const DATASET: Dataset = Dataset::BirthdayMembers;

    fn from_row(row: &Row) -> Result<Self, RowError> {
        Ok(Self {
            id: MemberId::new(row.non_empty_text("id")?.trim()),
            name: row.text("name")?,
            avatar: row.text("avatar")?,
        })
    }
}

/// One birthday support project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BirthdayEvent {
    /// Event id, unique within the river.
    pub id: i64,
    /// Member the event celebrates.
    pub member: MemberId,
    /// Support type, e.g. `"Cafe"` (CSV column `type`).
    #[serde(rename = "type")]
    pub event_type: String,
    /// Title.
    pub title: String,
    /// Date as authored.
    pub date: String,
    /// Venue.
    pub location: String,
    /// Cover image URL.
    pub img: String,
    /// Video URL; `None` shows the image instead of a player.
    pub video: Option<String>,
    /// Description.
    pub desc: String,
}

impl BirthdayEvent {
    /// Returns `true` if a video was authored.
    #[must_use]
    pub const fn has_video(&self) -> bool {
        self.video.is_some()
    }
}

impl Record for BirthdayEvent {
    const DATASET: Dataset = Dataset::BirthdayEvents;

    fn from_row(row: &Row) -> Result<Self, RowError> {
        Ok(Self {
            id: row.integer("id")?,
            member: MemberId::new(row.text("member")?.trim()),
            event_type: row.text("type")?,
            title: row.text("title")?,
            date: row.text("date")?,
            location: row.text("location")?,
            img: row.text("img")?,
            video: row.optional_text("video"),
            desc: row.text("desc")?,
        })
    }

    fn unique_id(&self) -> Option<i64> {
        Some(self.id)
    }
}
