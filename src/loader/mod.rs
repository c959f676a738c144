//! Content loader and normalizer.
//!
//! Turns the raw text of one dataset into an ordered sequence of typed
//! records. Parsing is header-driven, empty lines are skipped, malformed
//! rows are dropped and reported as [`Diagnostic`]s through `tracing`.

pub mod diagnostic;
pub mod record;
pub mod table;
pub mod value;

pub use diagnostic::{Diagnostic, DiagnosticKind, RowError};
pub use record::{Loaded, Record, load};
pub use table::{Field, Row, Table, parse_table};
pub use value::{Coercion, Value};
