//! Header-driven CSV parsing into untyped rows.
//!
//! The first record names the columns; every later record maps
//! positionally onto those names. Quoting follows standard CSV escaping
//! (handled by the `csv` crate).

use serde::Serialize;

use super::diagnostic::{Diagnostic, DiagnosticKind, RowError};
use super::value::{Coercion, Value, parse_float};

/// One cell: column name, raw text and coerced value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    /// Column name from the header.
    pub name: String,
    /// Cell text exactly as written (quotes removed).
    pub raw: String,
    /// Value after the table's [`Coercion`] was applied.
    pub value: Value,
}

/// One data record of a [`Table`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    line: u64,
    fields: Vec<Field>,
}

impl Row {
    /// Line of this record in the source text.
    #[must_use]
    pub const fn line(&self) -> u64 {
        self.line
    }

    /// All fields in header order.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Returns the field for `name`. The first column wins when the header
    /// repeats a name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Returns the coerced value of `name`.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.get(name).map(|f| &f.value)
    }

    /// Required text column. A blank cell yields an empty string.
    ///
    /// # Errors
    ///
    /// Returns [`RowError::MissingColumn`] if the header has no `name`.
    pub fn text(&self, name: &str) -> Result<String, RowError> {
        self.require(name).map(|f| f.raw.clone())
    }

    /// Required text column that must not be blank.
    ///
    /// # Errors
    ///
    /// Returns [`RowError::MissingColumn`] if the header has no `name`,
    /// or [`RowError::EmptyField`] if the cell is blank.
    pub fn non_empty_text(&self, name: &str) -> Result<String, RowError> {
        let field = self.require(name)?;
        if field.raw.trim().is_empty() {
            return Err(RowError::EmptyField(name.to_string()));
        }
        Ok(field.raw.clone())
    }

    /// Optional text column: `None` when the column is absent or the cell
    /// is blank.
    #[must_use]
    pub fn optional_text(&self, name: &str) -> Option<String> {
        self.get(name)
            .filter(|f| !f.raw.trim().is_empty())
            .map(|f| f.raw.clone())
    }

    /// Required integer column. An integral float such as `1.0` is
    /// accepted as `1`.
    ///
    /// # Errors
    ///
    /// Returns [`RowError::MissingColumn`] or [`RowError::InvalidNumber`].
    pub fn integer(&self, name: &str) -> Result<i64, RowError> {
        let field = self.require(name)?;
        match field.value {
            Value::Integer(n) => Ok(n),
            _ => field
                .raw
                .trim()
                .parse::<i64>()
                .ok()
                .or_else(|| parse_float(&field.raw).and_then(integral))
                .ok_or_else(|| invalid_number(field, "integer")),
        }
    }

    /// Required floating point column.
    ///
    /// # Errors
    ///
    /// Returns [`RowError::MissingColumn`] or [`RowError::InvalidNumber`].
    pub fn float(&self, name: &str) -> Result<f64, RowError> {
        let field = self.require(name)?;
        match field.value {
            Value::Float(f) => Ok(f),
            Value::Integer(n) => Ok(n as f64),
            _ => parse_float(&field.raw).ok_or_else(|| invalid_number(field, "number")),
        }
    }

    fn require(&self, name: &str) -> Result<&Field, RowError> {
        self.get(name)
            .ok_or_else(|| RowError::MissingColumn(name.to_string()))
    }
}

#[allow(clippy::cast_possible_truncation)]
fn integral(f: f64) -> Option<i64> {
    const LIMIT: f64 = 9_223_372_036_854_775_808.0; // 2^63
    (f.fract() == 0.0 && (-LIMIT..LIMIT).contains(&f)).then_some(f as i64)
}

fn invalid_number(field: &Field, expected: &'static str) -> RowError {
    RowError::InvalidNumber {
        field: field.name.clone(),
        expected,
        raw: field.raw.clone(),
    }
}

/// Parsed table: header, well-shaped rows and diagnostics.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Table {
    /// Column names, trimmed.
    pub headers: Vec<String>,
    /// Rows in source order. Malformed rows are absent.
    pub rows: Vec<Row>,
    /// One entry per dropped or suspicious row.
    pub diagnostics: Vec<Diagnostic>,
}

impl Table {
    /// Number of rows kept.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if no row was kept.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Parses CSV `text` with a mandatory header row.
///
/// - empty lines, and lines whose cells are all blank, are skipped;
/// - a record with fewer cells than the header is dropped;
/// - a record with more cells is kept and the surplus ignored;
/// - every problem becomes a [`Diagnostic`] labelled with `source`.
#[must_use]
pub fn parse_table(text: &str, coercion: Coercion, source: &str) -> Table {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut table = Table::default();

    match reader.headers() {
        Ok(record) => {
            table.headers = record
                .iter()
                .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
                .collect();
        }
        Err(err) => {
            let line = err.position().map_or(0, csv::Position::line);
            table.diagnostics.push(Diagnostic::record(
                source,
                line,
                DiagnosticKind::Unparsable {
                    message: err.to_string(),
                },
            ));
            return table;
        }
    }

    if table.headers.iter().all(String::is_empty) {
        table.headers.clear();
        table
            .diagnostics
            .push(Diagnostic::record(source, 1, DiagnosticKind::EmptySource));
        return table;
    }

    let expected = table.headers.len();
    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                let line = err.position().map_or(0, csv::Position::line);
                table.diagnostics.push(Diagnostic::record(
                    source,
                    line,
                    DiagnosticKind::Unparsable {
                        message: err.to_string(),
                    },
                ));
                continue;
            }
        };
        let line = record.position().map_or(0, csv::Position::line);

        if record.iter().all(|cell| cell.trim().is_empty()) {
            tracing::trace!(dataset = source, line, "blank row skipped");
            continue;
        }

        let found = record.len();
        if found < expected {
            table.diagnostics.push(Diagnostic::record(
                source,
                line,
                DiagnosticKind::TooFewFields { expected, found },
            ));
            continue;
        }
        if found > expected {
            table.diagnostics.push(Diagnostic::record(
                source,
                line,
                DiagnosticKind::ExtraFields { expected, found },
            ));
        }

        let fields = table
            .headers
            .iter()
            .zip(record.iter())
            .map(|(name, raw)| Field {
                name: name.clone(),
                raw: raw.to_string(),
                value: Value::coerce(raw, coercion),
            })
            .collect();
        table.rows.push(Row { line, fields });
    }

    tracing::debug!(
        dataset = source,
        rows = table.rows.len(),
        diagnostics = table.diagnostics.len(),
        "table parsed"
    );
    table
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn raw_column(table: &Table, name: &str) -> Vec<String> {
        table
            .rows
            .iter()
            .filter_map(|r| r.get(name).map(|f| f.raw.clone()))
            .collect()
    }

    #[test]
    fn keeps_every_valid_row_in_order() {
        let table = parse_table(
            "year,title\n2020,Debut\n2021,Comeback\n2020,Special",
            Coercion::Off,
            "albums",
        );
        assert_eq!(table.headers, vec!["year", "title"]);
        assert_eq!(table.len(), 3);
        assert_eq!(raw_column(&table, "title"), vec!["Debut", "Comeback", "Special"]);
        assert!(table.diagnostics.is_empty());
    }

    #[test]
    fn empty_lines_are_skipped() {
        let table = parse_table("id,name\n\n1,a\n\n\n2,b\n\n", Coercion::Numeric, "t");
        assert_eq!(table.len(), 2);
        assert!(table.diagnostics.is_empty());
    }

    #[test]
    fn all_blank_rows_are_skipped() {
        let table = parse_table("id,name\n1,a\n,\n2,b\n", Coercion::Numeric, "t");
        assert_eq!(table.len(), 2);
        assert!(table.diagnostics.is_empty());
    }

    #[test]
    fn short_rows_are_dropped_with_diagnostic() {
        let table = parse_table("id,name,img\n1,a,x\n2,b\n3,c,z\n4\n", Coercion::Numeric, "t");
        assert_eq!(table.len(), 2);
        assert_eq!(table.diagnostics.len(), 2);
        let Some(first) = table.diagnostics.first() else {
            panic!("expected a diagnostic");
        };
        assert_eq!(first.line, 3);
        assert_eq!(
            first.kind,
            DiagnosticKind::TooFewFields {
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn empty_cell_is_not_a_missing_cell() {
        let table = parse_table("id,member\n1,\n", Coercion::Numeric, "photocards");
        assert_eq!(table.len(), 1);
        let Some(row) = table.rows.first() else {
            panic!("row expected");
        };
        assert_eq!(row.text("member").ok().as_deref(), Some(""));
        assert_eq!(row.optional_text("member"), None);
        assert_eq!(row.integer("id").ok(), Some(1));
    }

    #[test]
    fn surplus_cells_are_ignored() {
        let table = parse_table("id,name\n1,a,extra\n", Coercion::Off, "t");
        assert_eq!(table.len(), 1);
        assert_eq!(table.diagnostics.len(), 1);
        let Some(row) = table.rows.first() else {
            panic!("row expected");
        };
        assert_eq!(row.fields().len(), 2);
    }

    #[test]
    fn quoted_fields_keep_commas_and_newlines() {
        let text = "id,desc\n1,\"Taipei, Taiwan\"\n2,\"line one\nline two\"\n";
        let table = parse_table(text, Coercion::Numeric, "t");
        assert_eq!(
            raw_column(&table, "desc"),
            vec!["Taipei, Taiwan", "line one\nline two"]
        );
    }

    #[test]
    fn empty_source_reports_missing_header() {
        let table = parse_table("", Coercion::Off, "albums");
        assert!(table.is_empty());
        assert!(table.headers.is_empty());
        assert_eq!(table.diagnostics.len(), 1);
        let Some(d) = table.diagnostics.first() else {
            panic!("diagnostic expected");
        };
        assert_eq!(d.kind, DiagnosticKind::EmptySource);
    }

    #[test]
    fn headers_are_trimmed_and_bom_stripped() {
        let table = parse_table("\u{feff}id , name\n1,a\n", Coercion::Off, "t");
        assert_eq!(table.headers, vec!["id", "name"]);
    }

    #[test]
    fn coercion_is_applied_per_table_and_raw_is_kept() {
        let table = parse_table("id,code\n7,007\n", Coercion::Numeric, "t");
        let Some(row) = table.rows.first() else {
            panic!("row expected");
        };
        assert_eq!(row.value("code"), Some(&Value::Integer(7)));
        assert_eq!(row.text("code").ok().as_deref(), Some("007"));
    }

    #[test]
    fn typed_accessors_report_field_errors() {
        let table = parse_table("id,lat\nx,north\n", Coercion::Numeric, "t");
        let Some(row) = table.rows.first() else {
            panic!("row expected");
        };
        assert!(matches!(row.integer("id"), Err(RowError::InvalidNumber { .. })));
        assert!(matches!(row.float("lat"), Err(RowError::InvalidNumber { .. })));
        assert_eq!(
            row.text("img"),
            Err(RowError::MissingColumn("img".to_string()))
        );
    }

    #[test]
    fn integer_accepts_integral_floats() {
        let table = parse_table("id,rank,score\n1.0,2e1,1.5\n", Coercion::Numeric, "t");
        let Some(row) = table.rows.first() else {
            panic!("row expected");
        };
        assert_eq!(row.integer("id").ok(), Some(1));
        assert_eq!(row.integer("rank").ok(), Some(20));
        assert!(matches!(row.integer("score"), Err(RowError::InvalidNumber { .. })));
    }

    #[test]
    fn float_accepts_integer_values() {
        let table = parse_table("lat\n121\n", Coercion::Numeric, "t");
        let Some(row) = table.rows.first() else {
            panic!("row expected");
        };
        assert_eq!(row.float("lat").ok(), Some(121.0));
    }

    #[test]
    fn repeated_parse_is_deterministic() {
        let text = "year,title\n2020,Debut\n2021,Comeback\n";
        let a = parse_table(text, Coercion::Off, "albums");
        let b = parse_table(text, Coercion::Off, "albums");
        assert_eq!(a.rows, b.rows);
    }
}
