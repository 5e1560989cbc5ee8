// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// CSV sampling, encoding detection, and column profiling

mod column_profiler;
mod csv_parser;

pub use column_profiler::ColumnProfiler;
pub use csv_parser::CsvParser;
