//! Operator-facing diagnostics for dropped or suspicious rows.
//!
//! Content is authored and bundled by the site operator, so a bad row is
//! a data-quality note rather than a runtime failure. Every diagnostic is
//! logged through `tracing` when it is recorded and kept for the export
//! report.

use std::fmt;

use serde::Serialize;

/// Why a row could not become a typed record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowError {
    /// The header has no column with this name.
    #[error("missing column `{0}`")]
    MissingColumn(String),

    /// A field that must carry a value is blank.
    #[error("field `{0}` must not be empty")]
    EmptyField(String),

    /// A numeric field holds something that is not a number.
    #[error("field `{field}` is not a valid {expected}: `{raw}`")]
    InvalidNumber {
        /// Column name.
        field: String,
        /// Expected kind, e.g. `"integer"`.
        expected: &'static str,
        /// Cell text as written.
        raw: String,
    },

    /// The record id repeats an earlier row's id.
    #[error("duplicate id {0}")]
    DuplicateId(i64),
}

/// Classification of a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// The source has no header row.
    EmptySource,
    /// The row has fewer cells than the header. Row dropped.
    TooFewFields {
        /// Header width.
        expected: usize,
        /// Cells found.
        found: usize,
    },
    /// The row has more cells than the header. Row kept, surplus ignored.
    ExtraFields {
        /// Header width.
        expected: usize,
        /// Cells found.
        found: usize,
    },
    /// The CSV reader could not decode the row. Row dropped.
    Unparsable {
        /// Reader error message.
        message: String,
    },
    /// The row could not produce a typed record. Row dropped.
    InvalidRecord {
        /// Rendered [`RowError`].
        message: String,
    },
}

impl From<RowError> for DiagnosticKind {
    fn from(err: RowError) -> Self {
        Self::InvalidRecord {
            message: err.to_string(),
        }
    }
}

/// One diagnostic, tied to a source and a 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Dataset or source label, e.g. `"albums"`.
    pub source: String,
    /// Line of the offending record in the source text (0 if unknown).
    pub line: u64,
    /// What went wrong.
    #[serde(flatten)]
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    /// Creates a diagnostic and logs it at `warn` level.
    #[must_use]
    pub fn record(source: &str, line: u64, kind: impl Into<DiagnosticKind>) -> Self {
        let diagnostic = Self {
            source: source.to_string(),
            line,
            kind: kind.into(),
        };
        tracing::warn!(dataset = source, line, "{diagnostic}");
        diagnostic
    }

    /// Returns `true` if the offending row was excluded from the output.
    #[must_use]
    pub const fn dropped_row(&self) -> bool {
        !matches!(
            self.kind,
            DiagnosticKind::ExtraFields { .. } | DiagnosticKind::EmptySource
        )
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: ", self.source, self.line)?;
        match &self.kind {
            DiagnosticKind::EmptySource => write!(f, "no header row"),
            DiagnosticKind::TooFewFields { expected, found } => {
                write!(f, "row dropped, {found} of {expected} fields")
            }
            DiagnosticKind::ExtraFields { expected, found } => {
                write!(f, "{found} fields for {expected} columns, surplus ignored")
            }
            DiagnosticKind::Unparsable { message } => write!(f, "row dropped, {message}"),
            DiagnosticKind::InvalidRecord { message } => write!(f, "row dropped, {message}"),
        }
    }
}
