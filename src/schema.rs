//! Column schema types
//!
//! A grid instance is described by an ordered list of [`Column`]s. The
//! logical type classifies a column's values for formatting and alignment;
//! the raw type is the opaque storage-level name surfaced in header
//! tooltips.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Domain-level classification of a column's values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogicalType {
    Boolean,
    Integer,
    Float,
    Decimal {
        /// Number of fraction digits in the unscaled representation
        scale: u32,
    },
    Date,
    Timestamp,
    #[default]
    Text,
    Other,
}

impl LogicalType {
    /// Numeric types are right-aligned in the grid
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            LogicalType::Integer | LogicalType::Float | LogicalType::Decimal { .. }
        )
    }
}

impl fmt::Display for LogicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicalType::Boolean => write!(f, "boolean"),
            LogicalType::Integer => write!(f, "integer"),
            LogicalType::Float => write!(f, "float"),
            LogicalType::Decimal { scale } => write!(f, "decimal({})", scale),
            LogicalType::Date => write!(f, "date"),
            LogicalType::Timestamp => write!(f, "timestamp"),
            LogicalType::Text => write!(f, "text"),
            LogicalType::Other => write!(f, "other"),
        }
    }
}

/// One column of the grid schema
///
/// Identity is `key`, unique across the schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub key: String,
    pub display_name: String,
    pub logical_type: LogicalType,
    /// Storage-level type name (e.g. `"DECIMAL(10,2)"`); may be empty
    #[serde(default)]
    pub raw_type: String,
}

impl Column {
    /// Create a column whose display name equals its key
    pub fn new(key: &str, logical_type: LogicalType) -> Self {
        Self {
            key: key.to_string(),
            display_name: key.to_string(),
            logical_type,
            raw_type: String::new(),
        }
    }

    /// Set the storage-level type name (builder pattern)
    pub fn with_raw_type(mut self, raw_type: &str) -> Self {
        self.raw_type = raw_type.to_string();
        self
    }

    /// Type name shown in the header tooltip
    ///
    /// Prefers the storage-level name, falling back to the logical type.
    pub fn type_label(&self) -> String {
        if self.raw_type.is_empty() {
            self.logical_type.to_string()
        } else {
            self.raw_type.clone()
        }
    }
}
