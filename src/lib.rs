//! # hidol-content
//!
//! Content pipeline for the hidol fan site.
//!
//! This crate turns the site's six static CSV datasets into typed records
//! and derives the per-page views the presentation layer renders: the
//! album timeline, the photocard gallery, the fan-sign map, the
//! lightstick carousel and the birthday event river. Everything is
//! synchronous and in-memory; malformed rows become diagnostics, never
//! errors.
//!
//! ## Architecture
//!
//! ```text
//! content/*.csv
//!     │
//!     ├── Table parsing (loader::table)
//!     ├── Typed records (loader::record, domain/)
//!     │
//!     ├── ContentCatalog + LoadReport (catalog)
//!     │
//!     ├── Pure views: group, filter, carousel, selection (view/)
//!     ├── Page controllers (page/)
//!     │
//!     └── JSON page views (export)
//! ```

pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod export;
pub mod loader;
pub mod page;
pub mod view;
