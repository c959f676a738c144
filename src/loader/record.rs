//! Typed record extraction on top of [`super::table`].

use std::collections::HashSet;

use serde::Serialize;

use super::diagnostic::{Diagnostic, RowError};
use super::table::{Row, parse_table};
use crate::domain::Dataset;

/// A typed record built from one CSV row.
///
/// Implementors read each column by its declared type through the
/// [`Row`] accessors, so the dataset-wide coercion never decides the type
/// of a field on its own.
pub trait Record: Sized {
    /// Dataset this record type is loaded from.
    const DATASET: Dataset;

    /// Builds a record from a well-shaped row.
    ///
    /// # Errors
    ///
    /// Returns a [`RowError`] naming the first field that could not be
    /// produced. The row is then dropped by [`load`].
    fn from_row(row: &Row) -> Result<Self, RowError>;

    /// Identifier that must be unique within the dataset, if any.
    fn unique_id(&self) -> Option<i64> {
        None
    }
}

/// Result of loading one dataset.
#[derive(Debug, Clone, Serialize)]
pub struct Loaded<T> {
    /// Records in source order.
    pub records: Vec<T>,
    /// Everything that was dropped or looked suspicious.
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> Default for Loaded<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            diagnostics: Vec::new(),
        }
    }
}

impl<T> Loaded<T> {
    /// Number of rows that were excluded from `records`.
    #[must_use]
    pub fn dropped(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.dropped_row()).count()
    }
}

/// Parses `text` as the dataset of `T` and builds typed records.
///
/// Rows that cannot produce a record, and rows whose
/// [`Record::unique_id`] repeats an earlier one, are dropped and
/// diagnosed. Never fails: the worst case is an empty record list.
#[must_use]
pub fn load<T: Record>(text: &str) -> Loaded<T> {
    let dataset = T::DATASET;
    let source = dataset.as_str();
    let table = parse_table(text, dataset.coercion(), source);

    let mut diagnostics = table.diagnostics;
    let mut records = Vec::with_capacity(table.rows.len());
    let mut seen = HashSet::new();

    for row in &table.rows {
        match T::from_row(row) {
            Ok(record) => {
                if let Some(id) = record.unique_id()
                    && !seen.insert(id)
                {
                    diagnostics.push(Diagnostic::record(
                        source,
                        row.line(),
                        RowError::DuplicateId(id),
                    ));
                    continue;
                }
                records.push(record);
            }
            Err(err) => {
                diagnostics.push(Diagnostic::record(source, row.line(), err));
            }
        }
    }

    tracing::info!(
        dataset = source,
        records = records.len(),
        diagnostics = diagnostics.len(),
        "dataset loaded"
    );
    Loaded {
        records,
        diagnostics,
    }
}
