// ============================================================
// FIELD TYPE ENUM
// ============================================================
// Primitive column types understood by Table Schema consumers

use serde::{Deserialize, Serialize};

/// Type tag inferred for a single column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Fallback for anything not matched by a narrower type
    #[default]
    String,

    /// Whole numbers, including values like `1.0` or `1e3`
    Integer,

    /// Finite numbers with a fractional part somewhere in the sample
    Number,

    /// Literal `true` / `false`
    Boolean,

    /// Exactly `YYYY-MM-DD`
    Date,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Integer => "integer",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
            FieldType::Date => "date",
        }
    }

    /// Table Schema `format` to emit alongside the type, if any
    pub fn default_format(&self) -> Option<&'static str> {
        match self {
            FieldType::Date => Some("default"),
            _ => None,
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
