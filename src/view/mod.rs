//! Pure view derivations over loaded records.
//!
//! Nothing here reads ambient state: the active filter, carousel index
//! and modal selection are passed in by the page that owns them.

pub mod carousel;
pub mod filter;
pub mod group;
pub mod selection;

pub use carousel::Carousel;
pub use filter::{MemberFilter, filter_by};
pub use group::{Group, group_by};
pub use selection::Selection;
