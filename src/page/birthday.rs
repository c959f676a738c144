//! Birthday event river page.

use serde::Serialize;

use crate::domain::{BirthdayEvent, BirthdayMember};
use crate::view::{MemberFilter, Selection, filter_by};

/// One member-bar entry in the exported view, with the ids of the events
/// it reveals.
#[derive(Debug, Clone, Serialize)]
pub struct MemberView<'a> {
    /// The member record.
    #[serde(flatten)]
    pub member: &'a BirthdayMember,
    /// `true` for the active filter entry.
    pub selected: bool,
    /// Event ids shown when this entry is selected, in river order.
    pub event_ids: Vec<i64>,
}

/// Serializable snapshot of the birthday page.
#[derive(Debug, Clone, Serialize)]
pub struct BirthdayView<'a> {
    /// `true` while no event is available.
    pub loading: bool,
    /// Active filter key.
    pub filter: &'a MemberFilter,
    /// Member bar.
    pub members: Vec<MemberView<'a>>,
    /// Events passing the active filter.
    pub events: Vec<&'a BirthdayEvent>,
    /// Id of the event shown in the modal.
    pub selected_event: Option<i64>,
}

/// Controller of the birthday page: member filter, event river and
/// event modal.
#[derive(Debug, Clone, Default)]
pub struct BirthdayPage {
    members: Vec<BirthdayMember>,
    events: Vec<BirthdayEvent>,
    filter: MemberFilter,
    selected: Selection<i64>,
}

impl BirthdayPage {
    /// Creates the page with the `all` filter and the modal closed.
    #[must_use]
    pub fn new(members: Vec<BirthdayMember>, events: Vec<BirthdayEvent>) -> Self {
        Self {
            members,
            events,
            filter: MemberFilter::All,
            selected: Selection::new(),
        }
    }

    /// Member bar entries in source order.
    #[must_use]
    pub fn members(&self) -> &[BirthdayMember] {
        &self.members
    }

    /// All events in source order.
    #[must_use]
    pub fn events(&self) -> &[BirthdayEvent] {
        &self.events
    }

    /// Returns `true` while there is no event to show.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.events.is_empty()
    }

    /// Active filter.
    #[must_use]
    pub const fn filter(&self) -> &MemberFilter {
        &self.filter
    }

    /// Replaces the active filter. `"all"` clears it.
    pub fn select_member(&mut self, id: &str) {
        self.filter = MemberFilter::parse(id);
        tracing::debug!(filter = %self.filter, "member filter changed");
    }

    /// Events passing the active filter, in source order.
    #[must_use]
    pub fn visible_events(&self) -> Vec<&BirthdayEvent> {
        filter_by(&self.events, &self.filter, |e| &e.member)
    }

    /// Opens the modal for event `id`. Returns `false` and leaves the
    /// current selection untouched if no event has that id.
    pub fn open_event(&mut self, id: i64) -> bool {
        if self.events.iter().any(|e| e.id == id) {
            self.selected.open(id);
            true
        } else {
            tracing::debug!(id, "birthday event not found");
            false
        }
    }

    /// Closes the modal.
    pub fn close_event(&mut self) {
        self.selected.close();
    }

    /// Event shown in the modal.
    #[must_use]
    pub fn selected_event(&self) -> Option<&BirthdayEvent> {
        let id = self.selected.get()?;
        self.events.iter().find(|e| e.id == id)
    }

    /// Snapshot for export.
    #[must_use]
    pub fn view(&self) -> BirthdayView<'_> {
        let members = self
            .members
            .iter()
            .map(|member| {
                let filter = MemberFilter::from(member.id.clone());
                MemberView {
                    member,
                    selected: self.filter.is_selected(&member.id),
                    event_ids: filter_by(&self.events, &filter, |e| &e.member)
                        .into_iter()
                        .map(|e| e.id)
                        .collect(),
                }
            })
            .collect();
        BirthdayView {
            loading: self.is_loading(),
            filter: &self.filter,
            members,
            events: self.visible_events(),
            selected_event: self.selected.get(),
        }
    }
}
