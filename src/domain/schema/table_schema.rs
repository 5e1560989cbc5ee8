// ============================================================
// TABLE SCHEMA TYPES
// ============================================================
// Serializable Frictionless-style Table Schema

use serde::{Deserialize, Serialize};

use super::FieldType;

/// A single field descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaField {
    /// Sanitized, machine-safe field name
    pub name: String,

    /// Original header text
    pub title: String,

    /// Inferred primitive type
    #[serde(rename = "type")]
    pub field_type: FieldType,

    /// Type format hint (only set for dates)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl SchemaField {
    pub fn new(name: String, title: String, field_type: FieldType) -> Self {
        Self {
            name,
            title,
            format: field_type.default_format().map(str::to_string),
            field_type,
        }
    }
}

/// Table Schema generated for one CSV resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSchema {
    pub fields: Vec<SchemaField>,

    /// Cell values treated as missing by consumers
    pub missing_values: Vec<String>,
}

impl TableSchema {
    pub fn new(fields: Vec<SchemaField>) -> Self {
        Self {
            fields,
            missing_values: vec![String::new()],
        }
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    pub fn field(&self, name: &str) -> Option<&SchemaField> {
        self.fields.iter().find(|f| f.name == name)
    }
}
