// ============================================================
// SCHEMA DOMAIN LAYER
// ============================================================
// Core types and pure transforms for Table Schema generation
// No I/O, no async

mod column_profile;
mod csv_sample;
mod field_name;
mod field_type;
mod inference;
mod raw_value;
mod schema_config;
mod table_schema;

pub use column_profile::ColumnProfile;
pub use csv_sample::CsvSample;
pub use field_name::{is_sanitized, sanitize, FALLBACK_FIELD_NAME};
pub use field_type::FieldType;
pub use inference::{infer_type, infer_type_from_strs, is_date, parse_number};
pub use raw_value::RawValue;
pub use schema_config::SchemaConfig;
pub use table_schema::{SchemaField, TableSchema};
