//! Cell values and the numeric coercion policy.

use serde::Serialize;

/// Per-dataset coercion policy applied to every cell of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Coercion {
    /// Every cell stays text.
    #[default]
    Off,
    /// Syntactically numeric cells become [`Value::Integer`] or
    /// [`Value::Float`].
    Numeric,
}

/// Typed value of a single cell after coercion.
///
/// The raw text is always kept next to the value (see
/// [`super::Field`]), so coercion never loses information such as
/// leading zeros.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Blank cell.
    Empty,
    /// Integral number that fits in an `i64`.
    Integer(i64),
    /// Any other finite number.
    Float(f64),
    /// Everything else.
    Text(String),
}

impl Value {
    /// Classifies `raw` according to `coercion`.
    #[must_use]
    pub fn coerce(raw: &str, coercion: Coercion) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Empty;
        }
        if coercion == Coercion::Off || !is_numeric_literal(trimmed) {
            return Self::Text(raw.to_string());
        }
        let integral = !trimmed.contains(['.', 'e', 'E']);
        if integral && let Ok(n) = trimmed.parse::<i64>() {
            return Self::Integer(n);
        }
        match trimmed.parse::<f64>() {
            Ok(f) if f.is_finite() => Self::Float(f),
            _ => Self::Text(raw.to_string()),
        }
    }
}

/// Parses a trimmed numeric literal as `f64`, rejecting `NaN`, `inf`
/// and anything else [`is_numeric_literal`] does not accept.
#[must_use]
pub fn parse_float(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if !is_numeric_literal(trimmed) {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|f| f.is_finite())
}

/// Returns `true` if `s` is an optionally signed decimal number with an
/// optional fraction and optional exponent (`-12`, `+3.5`, `.5`, `1e-3`).
#[must_use]
pub fn is_numeric_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i = 1;
    }

    let int_start = i;
    while bytes.get(i).is_some_and(u8::is_ascii_digit) {
        i += 1;
    }
    let int_digits = i - int_start;

    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        let frac_start = i;
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        frac_digits = i - frac_start;
    }
    if int_digits + frac_digits == 0 {
        return false;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let exp_start = i;
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }

    i == bytes.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_literals() {
        for s in ["0", "42", "-7", "+7", "23.5", "121.0", ".5", "5.", "1e3", "-2.5E-4"] {
            assert!(is_numeric_literal(s), "{s} should be numeric");
        }
        for s in ["", "-", ".", "e5", "1e", "1.2.3", "NaN", "inf", "12abc", "0x1f", "1,000"] {
            assert!(!is_numeric_literal(s), "{s} should not be numeric");
        }
    }

    #[test]
    fn coercion_off_keeps_text() {
        assert_eq!(Value::coerce("2020", Coercion::Off), Value::Text("2020".to_string()));
    }

    #[test]
    fn coercion_numeric_splits_integer_and_float() {
        assert_eq!(Value::coerce("12", Coercion::Numeric), Value::Integer(12));
        assert_eq!(Value::coerce(" -3 ", Coercion::Numeric), Value::Integer(-3));
        assert_eq!(Value::coerce("23.5", Coercion::Numeric), Value::Float(23.5));
        assert_eq!(Value::coerce("121.0", Coercion::Numeric), Value::Float(121.0));
        assert_eq!(
            Value::coerce("Jisoo", Coercion::Numeric),
            Value::Text("Jisoo".to_string())
        );
    }

    #[test]
    fn blank_is_empty_under_both_policies() {
        assert_eq!(Value::coerce("", Coercion::Numeric), Value::Empty);
        assert_eq!(Value::coerce("   ", Coercion::Off), Value::Empty);
    }

    #[test]
    fn integer_overflow_falls_back_to_float() {
        let v = Value::coerce("99999999999999999999", Coercion::Numeric);
        assert!(matches!(v, Value::Float(_)));
    }

    #[test]
    fn parse_float_rejects_non_finite() {
        assert_eq!(parse_float(" 121.5 "), Some(121.5));
        assert_eq!(parse_float("inf"), None);
        assert_eq!(parse_float("NaN"), None);
        assert_eq!(parse_float("north"), None);
    }
}
