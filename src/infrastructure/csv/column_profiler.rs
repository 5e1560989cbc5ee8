// ============================================================
// COLUMN PROFILER
// ============================================================
// Per-column statistics and type inference over a CSV sample

use std::collections::HashSet;

use crate::domain::schema::{
    infer_type, sanitize, ColumnProfile, CsvSample, RawValue, SchemaConfig,
};

/// Column profiler for sampled CSV data
pub struct ColumnProfiler {
    config: SchemaConfig,
}

impl ColumnProfiler {
    /// Create a new column profiler
    pub fn new(config: SchemaConfig) -> Self {
        Self { config }
    }

    /// Profile every column of the sample, in header order
    pub fn profile(&self, sample: &CsvSample) -> Vec<ColumnProfile> {
        sample
            .headers
            .iter()
            .enumerate()
            .map(|(index, header)| self.profile_column(sample, index, header))
            .collect()
    }

    fn profile_column(&self, sample: &CsvSample, index: usize, header: &str) -> ColumnProfile {
        let cells = sample.column_cells(index, self.config.sample_rows);

        let empty_count = cells.iter().filter(|c| c.is_empty()).count();
        let distinct: HashSet<&str> = cells.iter().copied().filter(|c| !c.is_empty()).collect();

        let values: Vec<RawValue> = cells.iter().map(|c| RawValue::from(*c)).collect();

        ColumnProfile {
            name: sanitize(header),
            title: header.to_string(),
            field_type: infer_type(&values),
            sampled: cells.len(),
            empty_count,
            distinct_count: distinct.len(),
        }
    }

    /// Get detailed profile report
    pub fn get_profile_report(&self, sample: &CsvSample) -> String {
        let profiles = self.profile(sample);

        let mut report = format!(
            "Column Profile ({} columns, {} sampled rows):",
            sample.column_count(),
            sample.row_count()
        );
        for profile in &profiles {
            report.push('\n');
            report.push_str(&profile.summary());
        }
        report
    }
}

impl Default for ColumnProfiler {
    fn default() -> Self {
        Self::new(SchemaConfig::default())
    }
}
