//! Member filter of the birthday event river.
//!
//! Selecting a filter replaces the previous one immediately; there is no
//! queueing and no partial application.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::domain::MemberId;

/// Active member filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MemberFilter {
    /// The `"all"` sentinel: no filter.
    #[default]
    All,
    /// Only items whose member equals this id.
    Member(MemberId),
}

impl MemberFilter {
    /// Builds a filter from a member-bar id. `"all"` is the sentinel.
    #[must_use]
    pub fn parse(id: &str) -> Self {
        if id == MemberId::ALL {
            Self::All
        } else {
            Self::Member(MemberId::from(id))
        }
    }

    /// Returns `true` if `member` passes the filter.
    #[must_use]
    pub fn matches(&self, member: &MemberId) -> bool {
        match self {
            Self::All => true,
            Self::Member(id) => id == member,
        }
    }

    /// Returns `true` if the member-bar entry `id` is the active one.
    #[must_use]
    pub fn is_selected(&self, id: &MemberId) -> bool {
        match self {
            Self::All => id.is_all_sentinel(),
            Self::Member(active) => active == id,
        }
    }

    /// Filter key as shown in the member bar.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::All => MemberId::ALL,
            Self::Member(id) => id.as_str(),
        }
    }
}

impl From<MemberId> for MemberFilter {
    fn from(id: MemberId) -> Self {
        if id.is_all_sentinel() {
            Self::All
        } else {
            Self::Member(id)
        }
    }
}

impl fmt::Display for MemberFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Serialize for MemberFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

/// Returns the items whose member attribute passes `filter`, in source
/// order. [`MemberFilter::All`] returns every item; an unmatched key
/// returns an empty vec.
pub fn filter_by<'a, T, F>(items: &'a [T], filter: &MemberFilter, mut member_of: F) -> Vec<&'a T>
where
    F: FnMut(&T) -> &MemberId,
{
    items
        .iter()
        .filter(|&item| filter.matches(member_of(item)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Event {
        id: i64,
        member: MemberId,
    }

    fn events() -> Vec<Event> {
        [(1, "hana"), (2, "yuri"), (3, "hana"), (4, "mina")]
            .into_iter()
            .map(|(id, m)| Event {
                id,
                member: MemberId::from(m),
            })
            .collect()
    }

    fn ids(items: &[&Event]) -> Vec<i64> {
        items.iter().map(|e| e.id).collect()
    }

    #[test]
    fn all_returns_everything_in_order() {
        let events = events();
        let visible = filter_by(&events, &MemberFilter::All, |e| &e.member);
        assert_eq!(ids(&visible), vec![1, 2, 3, 4]);
    }

    #[test]
    fn member_filter_keeps_matches() {
        let events = events();
        let visible = filter_by(&events, &MemberFilter::parse("hana"), |e| &e.member);
        assert_eq!(ids(&visible), vec![1, 3]);
    }

    #[test]
    fn unmatched_key_is_empty_not_error() {
        let events = events();
        let visible = filter_by(&events, &MemberFilter::parse("nobody"), |e| &e.member);
        assert!(visible.is_empty());
    }

    #[test]
    fn sentinel_parses_to_all() {
        assert_eq!(MemberFilter::parse("all"), MemberFilter::All);
        assert_eq!(MemberFilter::from(MemberId::from("all")), MemberFilter::All);
        assert_eq!(MemberFilter::default().key(), "all");
    }

    #[test]
    fn selection_highlight() {
        let all = MemberFilter::All;
        assert!(all.is_selected(&MemberId::from("all")));
        assert!(!all.is_selected(&MemberId::from("hana")));

        let hana = MemberFilter::parse("hana");
        assert!(hana.is_selected(&MemberId::from("hana")));
        assert!(!hana.is_selected(&MemberId::from("all")));
    }
}
