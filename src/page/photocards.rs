//! Photocard gallery page.

use serde::Serialize;

use crate::domain::PhotocardRecord;
use crate::view::Selection;

/// Serializable snapshot of the gallery.
#[derive(Debug, Clone, Serialize)]
pub struct PhotocardsView<'a> {
    /// `true` while no card is available.
    pub loading: bool,
    /// Cards in source order.
    pub cards: &'a [PhotocardRecord],
    /// Id of the card shown in the modal.
    pub selected: Option<i64>,
}

/// Controller of the photocard gallery.
#[derive(Debug, Clone, Default)]
pub struct PhotocardsPage {
    cards: Vec<PhotocardRecord>,
    selected: Selection<i64>,
}

impl PhotocardsPage {
    /// Creates the page over loaded cards with the modal closed.
    #[must_use]
    pub fn new(cards: Vec<PhotocardRecord>) -> Self {
        Self {
            cards,
            selected: Selection::new(),
        }
    }

    /// All cards in source order.
    #[must_use]
    pub fn cards(&self) -> &[PhotocardRecord] {
        &self.cards
    }

    /// Returns `true` while there is nothing to show.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.cards.is_empty()
    }

    /// Opens the modal for card `id`. Returns `false` and leaves the
    /// current selection untouched if no card has that id.
    pub fn open(&mut self, id: i64) -> bool {
        if self.cards.iter().any(|c| c.id == id) {
            self.selected.open(id);
            true
        } else {
            tracing::debug!(id, "photocard not found");
            false
        }
    }

    /// Closes the modal.
    pub fn close(&mut self) {
        self.selected.close();
    }

    /// Card shown in the modal.
    #[must_use]
    pub fn selected(&self) -> Option<&PhotocardRecord> {
        let id = self.selected.get()?;
        self.cards.iter().find(|c| c.id == id)
    }

    /// Snapshot for export.
    #[must_use]
    pub fn view(&self) -> PhotocardsView<'_> {
        PhotocardsView {
            loading: self.is_loading(),
            cards: &self.cards,
            selected: self.selected.get(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load;

    fn page() -> PhotocardsPage {
        let loaded = load::<PhotocardRecord>(
            "id,member,version,img,wishlist_link,trade_link\n1,Hana,A,/1.jpg,https://w/1,\n2,Yuri,B,/2.jpg,,https://t/2\n",
        );
        PhotocardsPage::new(loaded.records)
    }

    #[test]
    fn open_and_close_modal() {
        let mut page = page();
        assert!(page.selected().is_none());

        assert!(page.open(2));
        assert_eq!(page.selected().map(|c| c.member.as_str()), Some("Yuri"));

        page.close();
        assert!(page.selected().is_none());
    }

    #[test]
    fn unknown_card_keeps_selection() {
        let mut page = page();
        assert!(page.open(1));
        assert!(!page.open(42));
        assert_eq!(page.selected().map(|c| c.id), Some(1));
    }

    #[test]
    fn view_reports_selection() {
        let mut page = page();
        page.open(1);
        let view = page.view();
        assert_eq!(view.selected, Some(1));
        assert_eq!(view.cards.len(), 2);
        assert!(!view.loading);
    }
}
