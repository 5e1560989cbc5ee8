// ============================================================
// FIELD NAME SANITIZER
// ============================================================
// Turn raw CSV headers into machine-safe schema field names

/// Name used when a header sanitizes down to nothing
pub const FALLBACK_FIELD_NAME: &str = "field";

/// Sanitize a raw header into a field name.
///
/// The result only contains `[a-z0-9]` runs joined by single underscores,
/// or is exactly [`FALLBACK_FIELD_NAME`]. Non-ASCII letters are not
/// transliterated; they become separators like any other punctuation.
pub fn sanitize(raw: &str) -> String {
    let replaced: String = raw
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    let cleaned = replaced
        .split('_')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("_");

    if cleaned.is_empty() {
        FALLBACK_FIELD_NAME.to_string()
    } else {
        cleaned
    }
}

/// Check whether `name` is already in sanitized form.
pub fn is_sanitized(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('_')
        && !name.ends_with('_')
        && !name.contains("__")
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}
