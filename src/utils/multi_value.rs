//! Multi-value filter strings such as `"English,German"`.

/// Separator used by every multi-value filter except course subjects.
pub const LIST_SEPARATOR: char = ',';

/// Separator for course subjects. Subject names may themselves contain commas.
pub const SUBJECT_SEPARATOR: char = ';';

/// Splits a raw filter string into lower-cased, trimmed, non-empty segments.
///
/// An absent value, an empty string and a string made only of separators all
/// yield an empty list, which callers treat as "no constraint".
pub fn split_lowercase(raw: Option<&str>, separator: char) -> Vec<String> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    raw.split(separator)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Lower-cases and trims a free-text search term, returning `None` when blank.
pub fn search_term(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_lowercase)
}
