//! Single optional selection backing a detail modal.

use serde::Serialize;

/// Either nothing or exactly one selected id.
///
/// Opening a card or event sets it; the close button and a backdrop
/// click both clear it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Selection<Id> {
    selected: Option<Id>,
}

impl<Id> Default for Selection<Id> {
    fn default() -> Self {
        Self { selected: None }
    }
}

impl<Id: Copy> Selection<Id> {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self { selected: None }
    }

    /// Selects `id`, replacing any previous selection.
    pub fn open(&mut self, id: Id) {
        self.selected = Some(id);
    }

    /// Clears the selection.
    pub fn close(&mut self) {
        self.selected = None;
    }

    /// Selected id, if any.
    #[must_use]
    pub const fn get(&self) -> Option<Id> {
        self.selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_replace_close() {
        let mut s = Selection::<i64>::new();
        assert_eq!(s.get(), None);

        s.open(3);
        assert_eq!(s.get(), Some(3));
        s.open(5);
        assert_eq!(s.get(), Some(5));

        s.close();
        assert_eq!(s.get(), None);
    }
}
