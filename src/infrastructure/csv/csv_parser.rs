// ============================================================
// CSV PARSER
// ============================================================
// Read headers and a bounded sample of rows with encoding fallback

use std::borrow::Cow;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use encoding_rs::WINDOWS_1252;
use tracing::{debug, warn};

use crate::domain::error::AppError;
use crate::domain::schema::{CsvSample, SchemaConfig};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Candidate delimiters tried by auto-detection
const DELIMITER_CANDIDATES: [u8; 4] = [b',', b';', b'\t', b'|'];

/// CSV sampler with encoding detection
pub struct CsvParser {
    /// Delimiter character; detected from the content when unset
    delimiter: Option<u8>,

    /// Whether to trim whitespace from headers and values
    trim: bool,

    /// Maximum number of data rows to read
    max_rows: usize,
}

impl Default for CsvParser {
    fn default() -> Self {
        Self {
            delimiter: None,
            trim: true,
            max_rows: SchemaConfig::default().sample_rows,
        }
    }
}

impl CsvParser {
    /// Create a new CSV parser with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a parser from validated schema config
    pub fn from_config(config: &SchemaConfig) -> Result<Self, AppError> {
        config
            .validate()
            .map_err(|e| AppError::ValidationError(format!("Invalid schema config: {}", e)))?;

        Ok(Self {
            delimiter: config.delimiter_byte(),
            trim: config.trim,
            max_rows: config.sample_rows,
        })
    }

    /// Set custom delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Set whether to trim whitespace
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Set the maximum number of data rows read
    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = max_rows;
        self
    }

    /// Parse a CSV file into a header + row sample
    pub fn parse_file(&self, path: &Path) -> Result<CsvSample, AppError> {
        let content = Self::read_file(path)?;
        self.parse_content(&content)
    }

    /// Parse CSV content from string
    pub fn parse_content(&self, content: &str) -> Result<CsvSample, AppError> {
        let delimiter = self
            .delimiter
            .unwrap_or_else(|| Self::detect_delimiter(content));

        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .trim(if self.trim { Trim::All } else { Trim::None })
            .flexible(true) // Allow rows with different lengths
            .from_reader(content.as_bytes());

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| AppError::ParseError(format!("Failed to read CSV headers: {}", e)))?
            .iter()
            .map(str::to_string)
            .collect();

        if headers.is_empty() {
            return Err(AppError::ParseError(
                "CSV content has no header row".to_string(),
            ));
        }

        let mut rows: Vec<Vec<String>> = Vec::new();
        for (index, result) in reader.records().take(self.max_rows).enumerate() {
            let record = result.map_err(|e| {
                AppError::ParseError(format!("Failed to parse CSV row {}: {}", index + 1, e))
            })?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        debug!(
            columns = headers.len(),
            rows = rows.len(),
            delimiter = %(delimiter as char).escape_default(),
            "Sampled CSV content"
        );

        Ok(CsvSample::new(headers, rows))
    }

    /// Read a file as text: UTF-8 first, Windows-1252 as the fallback
    pub fn read_file(path: &Path) -> Result<String, AppError> {
        let bytes = std::fs::read(path).map_err(|e| {
            AppError::IoError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let text = Self::decode(&bytes);
        if let Cow::Owned(_) = text {
            warn!(path = %path.display(), "CSV is not valid UTF-8, decoded as Windows-1252");
        }
        Ok(text.into_owned())
    }

    /// Decode raw bytes, stripping a UTF-8 byte order mark
    pub fn decode(bytes: &[u8]) -> Cow<'_, str> {
        let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

        match std::str::from_utf8(bytes) {
            Ok(text) => Cow::Borrowed(text),
            Err(_) => {
                let (text, _, _) = WINDOWS_1252.decode(bytes);
                Cow::Owned(text.into_owned())
            }
        }
    }

    /// Detect delimiter from content (comma, semicolon, tab, pipe)
    pub fn detect_delimiter(content: &str) -> u8 {
        let sample_lines: Vec<_> = content.lines().take(10).collect();
        if sample_lines.is_empty() {
            return b',';
        }

        let mut best_delimiter = b',';
        let mut best_score = 0.0f32;

        for &delimiter in &DELIMITER_CANDIDATES {
            let field_counts: Vec<usize> = sample_lines
                .iter()
                .map(|line| line.bytes().filter(|&b| b == delimiter).count())
                .collect();

            // Score by consistency (low standard deviation) and frequency
            let avg = field_counts.iter().sum::<usize>() as f32 / field_counts.len() as f32;
            let variance = field_counts
                .iter()
                .map(|&x| (x as f32 - avg).powi(2))
                .sum::<f32>()
                / field_counts.len() as f32;

            let score = avg / (1.0 + variance.sqrt());

            if score > best_score {
                best_score = score;
                best_delimiter = delimiter;
            }
        }

        best_delimiter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_simple_csv() {
        let content = "name,age,city\nAlice,30,NYC\nBob,25,LA";
        let parser = CsvParser::new();
        let sample = parser.parse_content(content).unwrap();

        assert_eq!(sample.headers, vec!["name", "age", "city"]);
        assert_eq!(sample.row_count(), 2);
        assert_eq!(sample.rows[0][0], "Alice");
    }

    #[test]
    fn test_sample_is_bounded() {
        let content = "n\n1\n2\n3\n4\n5";
        let parser = CsvParser::new().with_max_rows(3);
        let sample = parser.parse_content(content).unwrap();

        assert_eq!(sample.column_cells(0, 10), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_ragged_rows() {
        let content = "a,b,c\n1,2\n1,2,3,4";
        let sample = CsvParser::new().parse_content(content).unwrap();

        assert_eq!(sample.rows[0], vec!["1", "2", ""]);
        assert_eq!(sample.rows[1], vec!["1", "2", "3"]);
    }

    #[test]
    fn test_trim_toggle() {
        let content = " City , State \n Austin , TX ";

        let trimmed = CsvParser::new().parse_content(content).unwrap();
        assert_eq!(trimmed.headers, vec!["City", "State"]);
        assert_eq!(trimmed.rows[0], vec!["Austin", "TX"]);

        let raw = CsvParser::new().with_trim(false).parse_content(content).unwrap();
        assert_eq!(raw.headers, vec![" City ", " State "]);
    }

    #[test]
    fn test_quoted_headers_keep_commas() {
        let content = "\"City, State\",Population\n\"Austin, TX\",961855";
        let sample = CsvParser::new().parse_content(content).unwrap();

        assert_eq!(sample.headers[0], "City, State");
        assert_eq!(sample.rows[0][0], "Austin, TX");
    }

    #[test]
    fn test_empty_content_is_error() {
        let result = CsvParser::new().parse_content("");
        assert!(matches!(result, Err(AppError::ParseError(_))));
    }

    #[test]
    fn test_detect_delimiter() {
        assert_eq!(CsvParser::detect_delimiter("a,b,c\nd,e,f"), b',');
        assert_eq!(CsvParser::detect_delimiter("a;b;c\nd;e;f"), b';');
        assert_eq!(CsvParser::detect_delimiter("a\tb\tc\nd\te\tf"), b'\t');
        assert_eq!(CsvParser::detect_delimiter("a|b\nc|d"), b'|');
        assert_eq!(CsvParser::detect_delimiter(""), b',');
    }

    #[test]
    fn test_from_config_prefers_fixed_delimiter() {
        let config = SchemaConfig::new().with_delimiter('|');
        let sample = CsvParser::from_config(&config)
            .unwrap()
            .parse_content("a;b\n1;2")
            .unwrap();

        assert_eq!(sample.headers, vec!["a;b"]);
    }

    #[test]
    fn test_from_config_detects_delimiter_when_unset() {
        let sample = CsvParser::from_config(&SchemaConfig::default())
            .unwrap()
            .parse_content("a;b\n1;2")
            .unwrap();

        assert_eq!(sample.headers, vec!["a", "b"]);
    }

    #[test]
    fn test_from_config_rejects_non_ascii_delimiter() {
        let config = SchemaConfig::new().with_delimiter('§');
        let result = CsvParser::from_config(&config);

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_decode_strips_bom() {
        let decoded = CsvParser::decode(b"\xEF\xBB\xBFname\nx");
        assert_eq!(decoded, "name\nx");
    }

    #[test]
    fn test_decode_falls_back_to_windows_1252() {
        // "Café" with é as a single Windows-1252 byte
        let decoded = CsvParser::decode(b"Caf\xE9");
        assert_eq!(decoded, "Café");
    }

    #[test]
    fn test_parse_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"id,amount\n1,2.5\n2,3\n").unwrap();

        let sample = CsvParser::new().parse_file(file.path()).unwrap();
        assert_eq!(sample.headers, vec!["id", "amount"]);
        assert_eq!(sample.row_count(), 2);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = CsvParser::read_file(Path::new("/definitely/not/here.csv"));
        assert!(matches!(result, Err(AppError::IoError(_))));
    }
}
