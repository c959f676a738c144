//! Type-safe birthday member identifier.
//!
//! [`MemberId`] is a newtype over the member's text id so that member
//! keys cannot be confused with other strings (titles, dates, URLs).
//! Member ids are never numerically coerced.

use std::fmt;

use serde::Serialize;

/// Identifier of a birthday member, e.g. `"jisoo"`.
///
/// The id `"all"` is reserved: a member row carrying it is the "no
/// filter" entry of the member bar (see
/// [`crate::view::MemberFilter::All`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct MemberId(String);

impl MemberId {
    /// Reserved id meaning "no filter".
    pub const ALL: &'static str = "all";

    /// Creates a `MemberId` from any string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for the reserved `"all"` id.
    #[must_use]
    pub fn is_all_sentinel(&self) -> bool {
        self.0 == Self::ALL
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MemberId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for MemberId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for MemberId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
