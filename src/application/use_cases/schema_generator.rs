// ============================================================
// SCHEMA GENERATOR USE CASE
// ============================================================
// Orchestrate CSV sampling, header sanitizing, and type inference

use std::collections::HashSet;
use std::path::Path;
use std::time::Instant;

use tracing::{debug, info};

use crate::domain::error::Result;
use crate::domain::schema::{
    infer_type, sanitize, CsvSample, SchemaConfig, SchemaField, TableSchema,
};
use crate::infrastructure::csv::{ColumnProfiler, CsvParser};

/// Table Schema generation use case
pub struct SchemaGenerator {
    config: SchemaConfig,
}

impl SchemaGenerator {
    /// Create a new schema generator
    pub fn new(config: SchemaConfig) -> Self {
        Self { config }
    }

    /// Create with default configuration
    pub fn default_config() -> Self {
        Self::new(SchemaConfig::default())
    }

    /// Generate a Table Schema for a CSV file
    pub fn generate_from_path(&self, csv_path: &Path) -> Result<TableSchema> {
        info!(path = %csv_path.display(), "Generating table schema");
        let sample = CsvParser::from_config(&self.config)?.parse_file(csv_path)?;
        Ok(self.build_schema(&sample))
    }

    /// Generate a Table Schema from CSV text (for testing or in-memory data)
    pub fn generate_from_str(&self, content: &str) -> Result<TableSchema> {
        let sample = CsvParser::from_config(&self.config)?.parse_content(content)?;
        Ok(self.build_schema(&sample))
    }

    /// Build the schema for an already parsed sample; only the first
    /// `sample_rows` rows are used for inference
    pub fn generate_from_sample(&self, sample: &CsvSample) -> TableSchema {
        let mut names: Vec<String> = sample.headers.iter().map(|h| sanitize(h)).collect();
        if self.config.deduplicate_names {
            names = deduplicate_names(names);
        }

        let fields = sample
            .headers
            .iter()
            .zip(names)
            .enumerate()
            .map(|(index, (header, name))| {
                let values = sample.column_values(index, self.config.sample_rows);
                let field_type = infer_type(&values);
                debug!(header = %header, name = %name, field_type = %field_type, "Inferred field");
                SchemaField::new(name, header.clone(), field_type)
            })
            .collect();

        TableSchema::new(fields)
    }

    /// Column profile report for a CSV file
    pub fn profile_path(&self, csv_path: &Path) -> Result<String> {
        let sample = CsvParser::from_config(&self.config)?.parse_file(csv_path)?;
        Ok(self.profile_report(&sample))
    }

    /// Column profile report for CSV text
    pub fn profile_str(&self, content: &str) -> Result<String> {
        let sample = CsvParser::from_config(&self.config)?.parse_content(content)?;
        Ok(self.profile_report(&sample))
    }

    fn profile_report(&self, sample: &CsvSample) -> String {
        ColumnProfiler::new(self.config.clone()).get_profile_report(sample)
    }

    /// Serialize a schema as JSON, pretty or compact per config
    pub fn to_json(&self, schema: &TableSchema) -> Result<String> {
        let json = if self.config.pretty {
            serde_json::to_string_pretty(schema)?
        } else {
            serde_json::to_string(schema)?
        };
        Ok(json)
    }

    fn build_schema(&self, sample: &CsvSample) -> TableSchema {
        let start = Instant::now();
        let schema = self.generate_from_sample(sample);

        info!(
            columns = schema.fields.len(),
            sampled_rows = sample.row_count(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Generated table schema"
        );
        schema
    }
}

impl Default for SchemaGenerator {
    fn default() -> Self {
        Self::default_config()
    }
}

/// Make field names unique in header order.
///
/// The first occurrence keeps its name; repeats get `_2`, `_3`, ... skipping
/// any suffixed name that another column already uses.
pub fn deduplicate_names(names: Vec<String>) -> Vec<String> {
    let originals: HashSet<String> = names.iter().cloned().collect();
    let mut used: HashSet<String> = HashSet::with_capacity(names.len());

    names
        .into_iter()
        .map(|name| {
            if used.insert(name.clone()) {
                return name;
            }

            let mut suffix = 2usize;
            loop {
                let candidate = format!("{}_{}", name, suffix);
                if !originals.contains(&candidate) && used.insert(candidate.clone()) {
                    return candidate;
                }
                suffix += 1;
            }
        })
        .collect()
}
