//! The six datasets bundled with the site.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::loader::Coercion;

/// One static CSV dataset.
///
/// Each page owns one or two datasets; every dataset is loaded exactly
/// once per page entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    /// Album timeline entries.
    Albums,
    /// Photocard gallery entries.
    Photocards,
    /// Fan-sign map locations.
    FanSignLocations,
    /// Lightstick / idol profiles.
    Lightsticks,
    /// Birthday filter members (including the `all` sentinel row).
    BirthdayMembers,
    /// Birthday support events.
    BirthdayEvents,
}

impl Dataset {
    /// Every dataset, in page order.
    pub const ALL: [Self; 6] = [
        Self::Albums,
        Self::Photocards,
        Self::FanSignLocations,
        Self::Lightsticks,
        Self::BirthdayMembers,
        Self::BirthdayEvents,
    ];

    /// Short label used in logs and diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Albums => "albums",
            Self::Photocards => "photocards",
            Self::FanSignLocations => "fansign_locations",
            Self::Lightsticks => "lightsticks",
            Self::BirthdayMembers => "birthday_members",
            Self::BirthdayEvents => "birthday_events",
        }
    }

    /// File name inside the content directory.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Albums => "albums.csv",
            Self::Photocards => "photocards.csv",
            Self::FanSignLocations => "fansign_locations.csv",
            Self::Lightsticks => "lightsticks.csv",
            Self::BirthdayMembers => "birthday_members.csv",
            Self::BirthdayEvents => "birthday_events.csv",
        }
    }

    /// Blanket coercion policy for the dataset's cells.
    ///
    /// Albums and members are authored as plain text (years and member
    /// ids stay strings); the other datasets carry numeric ids and
    /// coordinates.
    #[must_use]
    pub const fn coercion(self) -> Coercion {
        match self {
            Self::Albums | Self::BirthdayMembers => Coercion::Off,
            Self::Photocards | Self::FanSignLocations | Self::Lightsticks | Self::BirthdayEvents => {
                Coercion::Numeric
            }
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serializes as [`Dataset::as_str`], the same label diagnostics carry.
impl Serialize for Dataset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
