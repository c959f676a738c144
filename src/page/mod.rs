//! Page controllers.
//!
//! Each page owns its records and its transient view state (active
//! filter, carousel cursor, modal selection). Nothing is shared between
//! pages; entering a page builds its controller from scratch.

pub mod albums;
pub mod birthday;
pub mod fansign;
pub mod lightsticks;
pub mod photocards;

pub use albums::AlbumsPage;
pub use birthday::BirthdayPage;
pub use fansign::{FanSignPage, Marker};
pub use lightsticks::{LightstickState, LightsticksPage};
pub use photocards::PhotocardsPage;
