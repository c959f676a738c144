//! Fan-sign map locations.

use serde::Serialize;

use super::{CoordinateKey, Dataset};
use crate::loader::{Record, Row, RowError};

/// One place the idols visited.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FanSignLocation {
    /// Location id, unique within the map.
    pub id: i64,
    /// Place name.
    pub name: String,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
    /// Photo URL.
    pub img: String,
    /// Free text shown under the photo, line breaks preserved.
    pub desc: Option<String>,
}

impl FanSignLocation {
    /// Marker grouping key.
    #[must_use]
    pub fn coordinate(&self) -> CoordinateKey {
        CoordinateKey::new(self.lat, self.lng)
    }

    /// Google Maps search link for this location.
    #[must_use]
    pub fn maps_url(&self) -> String {
        format!(
            "https://www.google.com/maps/search/?api=1&query={},{}",
            self.lat, self.lng
        )
    }
}

impl Record for FanSignLocation {
    const DATASET: Dataset = Dataset::FanSignLocations;

    fn from_row(row: &Row) -> Result<Self, RowError> {
        Ok(Self {
            id: row.integer("id")?,
            name: row.text("name")?,
            lat: row.float("lat")?,
            lng: row.float("lng")?,
            img: row.text("img")?,
            desc: row.optional_text("desc"),
        })
    }

    fn unique_id(&self) -> Option<i64> {
        Some(self.id)
    }
}
