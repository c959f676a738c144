//! Photocard gallery entries.

use serde::Serialize;

use super::Dataset;
use crate::loader::{Record, Row, RowError};

/// One photocard in the gallery.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhotocardRecord {
    /// Card id, unique within the gallery.
    pub id: i64,
    /// Member shown on the card. May be empty.
    pub member: String,
    /// Release version, e.g. `"Ver. A"`.
    pub version: String,
    /// Card image URL.
    pub img: String,
    /// Wishlist link; `None` disables the wishlist button.
    pub wishlist_link: Option<String>,
    /// Trade link; `None` disables the trade button.
    pub trade_link: Option<String>,
}

impl Record for PhotocardRecord {
    const DATASET: Dataset = Dataset::Photocards;

    fn from_row(row: &Row) -> Result<Self, RowError> {
        Ok(Self {
            id: row.integer("id")?,
            member: row.text("member")?,
            version: row.text("version")?,
            img: row.text("img")?,
            wishlist_link: row.optional_text("wishlist_link"),
            trade_link: row.optional_text("trade_link"),
        })
    }

    fn unique_id(&self) -> Option<i64> {
        Some(self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::{DiagnosticKind, load};

    const HEADER: &str = "id,member,version,img,wishlist_link,trade_link\n";

    #[test]
    fn duplicate_ids_keep_first() {
        let text = format!("{HEADER}1,Jisoo,A,/1.jpg,,\n1,Rose,B,/2.jpg,,\n2,Lisa,C,/3.jpg,,\n");
        let loaded = load::<PhotocardRecord>(&text);
        let members: Vec<_> = loaded.records.iter().map(|c| c.member.as_str()).collect();
        assert_eq!(members, vec!["Jisoo", "Lisa"]);
        assert_eq!(loaded.diagnostics.len(), 1);
    }

    #[test]
    fn numeric_looking_member_keeps_its_text() {
        let text = format!("{HEADER}3,0123,A,/1.jpg,,\n");
        let loaded = load::<PhotocardRecord>(&text);
        assert_eq!(
            loaded.records.first().map(|c| c.member.as_str()),
            Some("0123")
        );
    }

    #[test]
    fn non_numeric_id_drops_row() {
        let text = format!("{HEADER}abc,Jisoo,A,/1.jpg,,\n");
        let loaded = load::<PhotocardRecord>(&text);
        assert!(loaded.records.is_empty());
        assert!(matches!(
            loaded.diagnostics.first().map(|d| &d.kind),
            Some(DiagnosticKind::InvalidRecord { .. })
        ));
    }

    #[test]
    fn integral_float_id_is_kept() {
        let text = format!("{HEADER}4.0,Jisoo,A,/4.jpg,,\n4,Rose,B,/5.jpg,,\n");
        let loaded = load::<PhotocardRecord>(&text);
        let ids: Vec<i64> = loaded.records.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![4]);
        assert_eq!(loaded.dropped(), 1);
    }

    #[test]
    fn missing_optional_columns_are_none() {
        let loaded = load::<PhotocardRecord>("id,member,version,img\n5,Jennie,B,/5.jpg\n");
        let card = loaded.records.first();
        assert_eq!(card.and_then(|c| c.wishlist_link.clone()), None);
        assert_eq!(card.and_then(|c| c.trade_link.clone()), None);
        assert_eq!(card.map(|c| c.id), Some(5));
    }
}
