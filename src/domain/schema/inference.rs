// ============================================================
// COLUMN TYPE INFERENCE
// ============================================================
// Pick the narrowest primitive type that fits every sampled value

use once_cell::sync::Lazy;
use regex::Regex;

use super::{FieldType, RawValue};

// Anchored on both ends: "2024-01-15_report.csv" must not count as a date.
static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap());

/// Infer the type of a column from its sampled values.
///
/// Checks run in a fixed order: boolean, numeric, date, then the string
/// fallback. Missing values (`Null` or empty text) are ignored; a column
/// with nothing left is `string`.
pub fn infer_type(values: &[RawValue]) -> FieldType {
    let present: Vec<&RawValue> = values.iter().filter(|v| !v.is_missing()).collect();

    if present.is_empty() {
        return FieldType::String;
    }

    if present.iter().all(|v| is_boolean(v)) {
        return FieldType::Boolean;
    }

    let numbers: Option<Vec<f64>> = present.iter().map(|v| parse_number(v.as_text())).collect();
    if let Some(numbers) = numbers {
        return if numbers.iter().all(|n| n.fract() == 0.0) {
            FieldType::Integer
        } else {
            FieldType::Number
        };
    }

    if present.iter().all(|v| is_date(v.as_text())) {
        return FieldType::Date;
    }

    FieldType::String
}

/// Same as [`infer_type`] for plain string cells; empty strings are missing.
pub fn infer_type_from_strs(values: &[&str]) -> FieldType {
    let values: Vec<RawValue> = values.iter().map(|v| RawValue::from(*v)).collect();
    infer_type(&values)
}

fn is_boolean(value: &RawValue) -> bool {
    match value {
        RawValue::Bool(_) => true,
        RawValue::Text(s) => s == "true" || s == "false",
        RawValue::Null => false,
    }
}

/// Parse a whole cell as a finite number.
///
/// Accepts the `f64` grammar after trimming surrounding whitespace: an
/// optional sign, decimals, and exponents. Thousands separators, radix
/// prefixes, `inf` and `nan` are rejected, as are literals outside the `f64`
/// range: overflow to infinity (`1e999`) and non-zero values that underflow
/// to zero (`1e-400`).
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let number = trimmed.parse::<f64>().ok().filter(|n| n.is_finite())?;
    if number == 0.0 && has_nonzero_mantissa(trimmed) {
        return None;
    }
    Some(number)
}

fn has_nonzero_mantissa(literal: &str) -> bool {
    literal
        .split(['e', 'E'])
        .next()
        .unwrap_or("")
        .bytes()
        .any(|b| (b'1'..=b'9').contains(&b))
}

pub fn is_date(text: &str) -> bool {
    DATE_PATTERN.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_samples_are_strings() {
        assert_eq!(infer_type(&[]), FieldType::String);
        assert_eq!(infer_type_from_strs(&["", ""]), FieldType::String);
        assert_eq!(
            infer_type(&[RawValue::Null, RawValue::Null]),
            FieldType::String
        );
    }

    #[test]
    fn test_boolean_strings() {
        assert_eq!(
            infer_type_from_strs(&["true", "false", "true"]),
            FieldType::Boolean
        );
    }

    #[test]
    fn test_boolean_is_case_sensitive() {
        assert_eq!(
            infer_type_from_strs(&["True", "FALSE"]),
            FieldType::String
        );
    }

    #[test]
    fn test_native_booleans_mix_with_strings() {
        let values = vec![
            RawValue::Bool(true),
            RawValue::Text("false".to_string()),
            RawValue::Null,
        ];
        assert_eq!(infer_type(&values), FieldType::Boolean);
    }

    #[test]
    fn test_native_boolean_is_not_numeric() {
        let values = vec![RawValue::Bool(true), RawValue::Text("1".to_string())];
        assert_eq!(infer_type(&values), FieldType::String);
    }

    #[test]
    fn test_integers() {
        assert_eq!(infer_type_from_strs(&["1", "2", "3"]), FieldType::Integer);
        assert_eq!(
            infer_type_from_strs(&["-4", "+7", "1.0", "1e3"]),
            FieldType::Integer
        );
    }

    #[test]
    fn test_numbers() {
        assert_eq!(infer_type_from_strs(&["1.5", "2.7"]), FieldType::Number);
        assert_eq!(
            infer_type_from_strs(&["1", "2.5", "3"]),
            FieldType::Number
        );
        assert_eq!(infer_type_from_strs(&[".5", "2e-3"]), FieldType::Number);
    }

    #[test]
    fn test_numeric_grammar_rejections() {
        assert_eq!(infer_type_from_strs(&["1,000"]), FieldType::String);
        assert_eq!(infer_type_from_strs(&["0x1A"]), FieldType::String);
        assert_eq!(infer_type_from_strs(&["inf"]), FieldType::String);
        assert_eq!(infer_type_from_strs(&["NaN"]), FieldType::String);
        assert_eq!(infer_type_from_strs(&["12abc"]), FieldType::String);
        assert_eq!(infer_type_from_strs(&["1e999"]), FieldType::String);
    }

    #[test]
    fn test_underflowing_literals_are_not_numeric() {
        assert_eq!(parse_number("1e-400"), None);
        assert_eq!(infer_type_from_strs(&["1e-400"]), FieldType::String);
        assert_eq!(parse_number("0e-400"), Some(0.0));
        assert_eq!(parse_number("-0.000"), Some(-0.0));
        assert_eq!(infer_type_from_strs(&["0", "0.0", "0E5"]), FieldType::Integer);
    }

    #[test]
    fn test_whitespace_around_numbers() {
        assert_eq!(parse_number(" 42 "), Some(42.0));
        assert_eq!(parse_number("   "), None);
    }

    #[test]
    fn test_dates() {
        assert_eq!(
            infer_type_from_strs(&["2024-01-15", "2024-02-20"]),
            FieldType::Date
        );
        assert_eq!(
            infer_type_from_strs(&["2024-01-15", ""]),
            FieldType::Date
        );
    }

    #[test]
    fn test_date_pattern_is_anchored() {
        assert_eq!(
            infer_type_from_strs(&["2024-01-15_report.csv", "2024-02-20_data.csv"]),
            FieldType::String
        );
        assert_eq!(
            infer_type_from_strs(&["2024-01-15T10:30:00"]),
            FieldType::String
        );
        assert_eq!(infer_type_from_strs(&["x2024-01-15"]), FieldType::String);
    }

    #[test]
    fn test_mixed_date_and_text_is_string() {
        assert_eq!(
            infer_type_from_strs(&["2024-01-15", "not-a-date"]),
            FieldType::String
        );
    }

    #[test]
    fn test_date_pattern_ignores_unicode_digits() {
        assert!(!is_date("٢٠٢٤-٠١-١٥"));
        assert!(is_date("2024-13-45"));
    }

    #[test]
    fn test_boolean_before_numeric_before_date() {
        assert_eq!(infer_type_from_strs(&["true", "1"]), FieldType::String);
        assert_eq!(
            infer_type_from_strs(&["1", "2024-01-15"]),
            FieldType::String
        );
    }
}
