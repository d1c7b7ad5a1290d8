use crate::core::utils::format::format_float;
use std::fmt;

/// Cell spellings that are read as a missing value rather than as text.
const MISSING_MARKERS: &[&str] = &["", "NA", "N/A", "NaN", "nan", "null"];

/// A single scalar cell of a [`ResultTable`](super::table::ResultTable).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
    Missing,
}

impl Value {
    /// Infers the type of a raw field: integer, then float, then text.
    pub fn infer(raw: &str) -> Self {
        let raw = raw.trim();
        if MISSING_MARKERS.contains(&raw) {
            return Value::Missing;
        }
        if let Ok(int) = raw.parse::<i64>() {
            return Value::Int(int);
        }
        match raw.parse::<f64>() {
            Ok(float) if float.is_nan() => Value::Missing,
            Ok(float) => Value::Float(float),
            Err(_) => Value::Text(raw.to_string()),
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Value::Text(value.into())
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    /// Returns the string content for text cells.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => f.write_str(&format_float(*x)),
            Value::Text(s) => f.write_str(s),
            Value::Missing => Ok(()),
        }
    }
}
