//! Domain layer: datasets and their typed records.
//!
//! Every record is immutable once parsed. Each type implements
//! [`crate::loader::Record`], which declares its dataset and how each
//! column is read.

pub mod album;
pub mod birthday;
pub mod coordinate;
pub mod dataset;
pub mod fansign;
pub mod idol;
pub mod member_id;
pub mod photocard;

pub use album::AlbumRecord;
pub use birthday::{BirthdayEvent, BirthdayMember};
pub use coordinate::CoordinateKey;
pub use dataset::Dataset;
pub use fansign::FanSignLocation;
pub use idol::IdolProfile;
pub use member_id::MemberId;
pub use photocard::PhotocardRecord;
