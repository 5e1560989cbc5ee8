use serde::{Deserialize, Serialize};

/// One cell of a column sample as handed to the type inferencer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Bool(bool),
    Text(String),
    Null,
}

impl RawValue {
    /// `Null` and empty text both count as missing.
    pub fn is_missing(&self) -> bool {
        match self {
            RawValue::Null => true,
            RawValue::Text(s) => s.is_empty(),
            RawValue::Bool(_) => false,
        }
    }

    /// String form used by the numeric and date checks.
    pub fn as_text(&self) -> &str {
        match self {
            RawValue::Text(s) => s,
            RawValue::Bool(true) => "true",
            RawValue::Bool(false) => "false",
            RawValue::Null => "",
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            RawValue::Null
        } else {
            RawValue::Text(value.to_string())
        }
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        if value.is_empty() {
            RawValue::Null
        } else {
            RawValue::Text(value)
        }
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        RawValue::Bool(value)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(RawValue::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_values() {
        assert!(RawValue::Null.is_missing());
        assert!(RawValue::Text(String::new()).is_missing());
        assert!(!RawValue::Text(" ".to_string()).is_missing());
        assert!(!RawValue::Bool(false).is_missing());
    }

    #[test]
    fn test_conversions() {
        assert_eq!(RawValue::from(""), RawValue::Null);
        assert_eq!(RawValue::from("x"), RawValue::Text("x".to_string()));
        assert_eq!(RawValue::from(None::<&str>), RawValue::Null);
        assert_eq!(RawValue::from(Some(true)), RawValue::Bool(true));
        assert_eq!(RawValue::Bool(false).as_text(), "false");
    }

    #[test]
    fn test_deserialize_json_cells() {
        let values: Vec<RawValue> = serde_json::from_str(r#"[true, "a", null]"#).unwrap();
        assert_eq!(
            values,
            vec![
                RawValue::Bool(true),
                RawValue::Text("a".to_string()),
                RawValue::Null
            ]
        );
    }
}
