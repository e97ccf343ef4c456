//! Cell values and dataset records
//!
//! The host delivers a dataset as rows of key → value pairs (typically
//! decoded from JSON). [`CellValue`] is the raw, untyped form a cell takes
//! before the formatter applies the column's logical type.

use std::collections::HashMap;

/// A single raw cell value
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

/// One dataset row, keyed by column key
pub type Record = HashMap<String, CellValue>;

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Numeric coercion; `None` for values with no numeric reading
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Int(n) => Some(*n as f64),
            CellValue::Float(n) => Some(*n),
            CellValue::Text(s) => s.trim().parse().ok(),
            CellValue::Null | CellValue::Bool(_) => None,
        }
    }

    /// Display form used when no type-specific formatting rule applies
    ///
    /// Null renders as the empty string here; the formatter substitutes its
    /// own null marker before this is consulted.
    pub fn natural_string(&self) -> String {
        match self {
            CellValue::Null => String::new(),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Int(n) => n.to_string(),
            CellValue::Float(n) => n.to_string(),
            CellValue::Text(s) => s.clone(),
        }
    }

    /// Map a JSON value into a cell
    ///
    /// Arrays and objects keep their JSON text form; the grid shows them
    /// verbatim.
    pub fn from_json(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => CellValue::Null,
            serde_json::Value::Bool(b) => CellValue::Bool(*b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    CellValue::Int(i)
                } else {
                    CellValue::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => CellValue::Text(s.clone()),
            other => CellValue::Text(other.to_string()),
        }
    }
}

/// Decode one JSON object into a dataset record
pub fn record_from_json(object: &serde_json::Map<String, serde_json::Value>) -> Record {
    object
        .iter()
        .map(|(key, value)| (key.clone(), CellValue::from_json(value)))
        .collect()
}
