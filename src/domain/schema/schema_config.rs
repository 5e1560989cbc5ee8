// ============================================================
// SCHEMA GENERATION CONFIGURATION
// ============================================================
// Sampling, parsing and output options for schema generation

use serde::{Deserialize, Serialize};

/// Configuration for schema generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaConfig {
    /// Number of leading data rows read for type inference (default: 100)
    pub sample_rows: usize,

    /// Fixed delimiter; auto-detected from the content when unset
    pub delimiter: Option<char>,

    /// Trim whitespace around headers and values (default: true)
    pub trim: bool,

    /// Suffix repeated field names with `_2`, `_3`, ... (default: true)
    pub deduplicate_names: bool,

    /// Pretty-print generated JSON (default: true)
    pub pretty: bool,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            sample_rows: 100,
            delimiter: None,
            trim: true,
            deduplicate_names: true,
            pretty: true,
        }
    }
}

impl SchemaConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sample_rows(mut self, sample_rows: usize) -> Self {
        self.sample_rows = sample_rows;
        self
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Delimiter as the single byte the CSV reader expects; `None` for
    /// non-ASCII characters
    pub fn delimiter_byte(&self) -> Option<u8> {
        self.delimiter.filter(char::is_ascii).map(|c| c as u8)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.sample_rows == 0 {
            return Err("sample_rows must be > 0".to_string());
        }
        if let Some(delimiter) = self.delimiter {
            if !delimiter.is_ascii() {
                return Err(format!("delimiter must be an ASCII character, got {:?}", delimiter));
            }
            if delimiter == '"' || delimiter == '\n' || delimiter == '\r' {
                return Err(format!("delimiter {:?} is not allowed", delimiter));
            }
        }
        Ok(())
    }
}
