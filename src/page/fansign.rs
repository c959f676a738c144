//! Fan-sign map page.
//!
//! Locations sharing an exact coordinate collapse into one marker. A
//! marker with several entries pages through them with its own
//! [`Carousel`].

use serde::Serialize;

use crate::domain::{CoordinateKey, FanSignLocation};
use crate::view::{Carousel, group_by};

/// One map marker and the locations stacked on it.
#[derive(Debug, Clone)]
pub struct Marker {
    key: CoordinateKey,
    entries: Vec<FanSignLocation>,
    carousel: Carousel,
}

impl Marker {
    /// Exact coordinate of the marker.
    #[must_use]
    pub const fn key(&self) -> CoordinateKey {
        self.key
    }

    /// Locations on this marker, in source order.
    #[must_use]
    pub fn entries(&self) -> &[FanSignLocation] {
        &self.entries
    }

    /// Location currently shown in the popup.
    #[must_use]
    pub fn current(&self) -> Option<&FanSignLocation> {
        self.carousel.current(&self.entries)
    }

    /// Shows the next entry, wrapping around.
    pub fn advance(&mut self) -> usize {
        self.carousel.advance()
    }

    /// Shows the previous entry, wrapping around.
    pub fn retreat(&mut self) -> usize {
        self.carousel.retreat()
    }

    /// Popup position label, e.g. `"1 / 2"`.
    #[must_use]
    pub fn label(&self) -> String {
        self.carousel.label()
    }

    /// Returns `true` if the popup shows navigation arrows.
    #[must_use]
    pub const fn is_navigable(&self) -> bool {
        self.carousel.is_navigable()
    }
}

/// One location inside a marker view.
#[derive(Debug, Clone, Serialize)]
pub struct MarkerEntry<'a> {
    /// The location record.
    #[serde(flatten)]
    pub location: &'a FanSignLocation,
    /// Google Maps search link.
    pub maps_url: String,
}

/// Serializable snapshot of one marker.
#[derive(Debug, Clone, Serialize)]
pub struct MarkerView<'a> {
    /// Coordinate key, e.g. `"23.5,121.0"`.
    pub key: CoordinateKey,
    /// Marker latitude.
    pub lat: f64,
    /// Marker longitude.
    pub lng: f64,
    /// `true` when the popup needs navigation arrows.
    pub navigable: bool,
    /// Entries in source order.
    pub entries: Vec<MarkerEntry<'a>>,
}

/// Serializable snapshot of the map page.
#[derive(Debug, Clone, Serialize)]
pub struct FanSignView<'a> {
    /// `true` while no location is available.
    pub loading: bool,
    /// Markers in first-seen coordinate order.
    pub markers: Vec<MarkerView<'a>>,
}

/// Controller of the fan-sign map.
#[derive(Debug, Clone, Default)]
pub struct FanSignPage {
    markers: Vec<Marker>,
}

impl FanSignPage {
    /// Groups `locations` into markers by exact coordinate.
    #[must_use]
    pub fn new(locations: &[FanSignLocation]) -> Self {
        let markers = group_by(locations, FanSignLocation::coordinate)
            .into_iter()
            .filter_map(|group| {
                Carousel::new(group.len()).map(|carousel| Marker {
                    key: group.key,
                    entries: group.items.into_iter().cloned().collect(),
                    carousel,
                })
            })
            .collect();
        Self { markers }
    }

    /// Returns `true` while there is nothing to show.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.markers.is_empty()
    }

    /// Markers in first-seen coordinate order.
    #[must_use]
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Mutable access to one marker's popup state.
    pub fn marker_mut(&mut self, index: usize) -> Option<&mut Marker> {
        self.markers.get_mut(index)
    }

    /// Snapshot for export.
    #[must_use]
    pub fn view(&self) -> FanSignView<'_> {
        let markers = self
            .markers
            .iter()
            .map(|m| MarkerView {
                key: m.key,
                lat: m.key.lat(),
                lng: m.key.lng(),
                navigable: m.is_navigable(),
                entries: m
                    .entries
                    .iter()
                    .map(|location| MarkerEntry {
                        location,
                        maps_url: location.maps_url(),
                    })
                    .collect(),
            })
            .collect();
        FanSignView {
            loading: self.is_loading(),
            markers,
        }
    }
}
