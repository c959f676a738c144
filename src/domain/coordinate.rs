//! Exact map coordinate used as a marker grouping key.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Serialize, Serializer};

/// A `(lat, lng)` pair compared by exact bit pattern.
///
/// No tolerance is applied: two locations collapse into one marker only
/// when both numbers parsed to the identical `f64`. `-0.0` is folded into
/// `0.0`.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateKey {
    lat: f64,
    lng: f64,
}

impl CoordinateKey {
    /// Creates a key from parsed latitude and longitude.
    #[must_use]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat: fold_zero(lat),
            lng: fold_zero(lng),
        }
    }

    /// Latitude.
    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude.
    #[must_use]
    pub const fn lng(&self) -> f64 {
        self.lng
    }

    fn bits(self) -> (u64, u64) {
        (self.lat.to_bits(), self.lng.to_bits())
    }
}

fn fold_zero(v: f64) -> f64 {
    if v == 0.0 { 0.0 } else { v }
}

impl PartialEq for CoordinateKey {
    fn eq(&self, other: &Self) -> bool {
        self.bits() == other.bits()
    }
}

impl Eq for CoordinateKey {}

impl Hash for CoordinateKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits().hash(state);
    }
}

/// Renders as `"23.5,121.0"`: the shortest round-trip form of each
/// number, always with a fractional part.
impl fmt::Display for CoordinateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?},{:?}", self.lat, self.lng)
    }
}

impl Serialize for CoordinateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
