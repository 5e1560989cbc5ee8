// ============================================================
// CSV SAMPLE
// ============================================================
// Header row plus a bounded prefix of data rows

use serde::{Deserialize, Serialize};

use super::RawValue;

/// Header row and leading data rows read from a CSV source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CsvSample {
    /// Raw header strings, verbatim apart from optional trimming
    pub headers: Vec<String>,

    /// Data rows, each padded or cut to `headers.len()` cells
    pub rows: Vec<Vec<String>>,
}

impl CsvSample {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();

        Self { headers, rows }
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Cells of one column in row order, at most `limit` of them
    pub fn column_cells(&self, index: usize, limit: usize) -> Vec<&str> {
        self.rows
            .iter()
            .take(limit)
            .map(|row| row.get(index).map(String::as_str).unwrap_or(""))
            .collect()
    }

    /// Leading cells of one column as inference input
    pub fn column_values(&self, index: usize, limit: usize) -> Vec<RawValue> {
        self.column_cells(index, limit)
            .into_iter()
            .map(RawValue::from)
            .collect()
    }
}
