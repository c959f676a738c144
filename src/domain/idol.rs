//! Lightstick / idol profiles.

use serde::Serialize;

use super::Dataset;
use crate::loader::{Record, Row, RowError};

/// Fallback text of the wiki panel.
pub const NO_WIKI_CONTENT: &str = "No wiki content available.";

/// One idol in the profile carousel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdolProfile {
    /// Profile id.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Lightstick / portrait image URL.
    pub img: String,
    /// Short description, line breaks preserved.
    pub desc: String,
    /// Fan club link; `None` disables the button.
    pub fanclub_link: Option<String>,
    /// Moments link; `None` disables the button.
    pub moment_link: Option<String>,
    /// Long-form wiki text.
    pub wiki_content: Option<String>,
}

impl IdolProfile {
    /// Wiki panel text, falling back to [`NO_WIKI_CONTENT`].
    #[must_use]
    pub fn wiki_text(&self) -> &str {
        self.wiki_content.as_deref().unwrap_or(NO_WIKI_CONTENT)
    }
}

impl Record for IdolProfile {
    const DATASET: Dataset = Dataset::Lightsticks;

    fn from_row(row: &Row) -> Result<Self, RowError> {
        Ok(Self {
            id: row.integer("id")?,
            name: row.text("name")?,
            img: row.text("img")?,
            desc: row.text("desc")?,
            fanclub_link: row.optional_text("fanclub_link"),
            moment_link: row.optional_text("moment_link"),
            wiki_content: row.optional_text("wiki_content"),
        })
    }

    fn unique_id(&self) -> Option<i64> {
        Some(self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load;

    #[test]
    fn wiki_falls_back() {
        let loaded = load::<IdolProfile>(
            "id,name,img,desc,fanclub_link,moment_link,wiki_content\n1,Hana,/h.png,Leader,,,\n2,Yuri,/y.png,Vocal,https://fc,,Born in Busan\n",
        );
        let texts: Vec<_> = loaded.records.iter().map(IdolProfile::wiki_text).collect();
        assert_eq!(texts, vec![NO_WIKI_CONTENT, "Born in Busan"]);
    }

    #[test]
    fn missing_desc_column_drops_every_row() {
        let loaded = load::<IdolProfile>("id,name,img\n1,Hana,/h.png\n2,Yuri,/y.png\n");
        assert!(loaded.records.is_empty());
        assert_eq!(loaded.dropped(), 2);
    }
}
