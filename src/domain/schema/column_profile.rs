// ============================================================
// COLUMN PROFILE
// ============================================================
// Per-column statistics gathered over the sampled rows

use serde::{Deserialize, Serialize};

use super::FieldType;

/// Statistics and inferred type for one column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnProfile {
    /// Sanitized field name
    pub name: String,

    /// Original header text
    pub title: String,

    /// Type inferred over the sample
    pub field_type: FieldType,

    /// Number of sampled cells
    pub sampled: usize,

    /// Number of sampled cells that were empty
    pub empty_count: usize,

    /// Number of distinct non-empty values
    pub distinct_count: usize,
}

impl ColumnProfile {
    /// Ratio of empty cells (0.0 - 1.0)
    pub fn empty_ratio(&self) -> f32 {
        if self.sampled == 0 {
            0.0
        } else {
            self.empty_count as f32 / self.sampled as f32
        }
    }

    /// One line per column for text reports
    pub fn summary(&self) -> String {
        format!(
            "- {} ({}): {} | sampled {}, empty {} ({:.0}%), distinct {}",
            self.name,
            self.title,
            self.field_type,
            self.sampled,
            self.empty_count,
            self.empty_ratio() * 100.0,
            self.distinct_count
        )
    }
}
