//! Content pipeline error types with stable numeric codes.
//!
//! [`ContentError`] is the crate-level error type. Row-level problems are
//! never surfaced through it; those become [`crate::loader::Diagnostic`]s
//! and the offending row is dropped.

use std::path::PathBuf;

/// Crate-level error enum.
///
/// # Error Code Ranges
///
/// | Range     | Category      |
/// |-----------|---------------|
/// | 1000–1999 | Configuration / operator policy |
/// | 3000–3999 | I/O and encoding |
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// A content file or output directory could not be read or written.
    #[error("cannot access {}: {source}", path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A page view could not be serialized.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// A configuration value was present but invalid.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Strict mode is on and the load recorded diagnostics.
    #[error("{count} content diagnostics recorded in strict mode")]
    StrictDiagnostics {
        /// Number of diagnostics across all datasets.
        count: usize,
    },
}

impl ContentError {
    /// Builds an [`ContentError::Io`] for the given path.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidConfig(_) => 1001,
            Self::StrictDiagnostics { .. } => 1002,
            Self::Io { .. } => 3001,
            Self::Json(_) => 3003,
        }
    }
}
