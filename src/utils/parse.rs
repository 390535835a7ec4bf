//! Parsing of numeric and boolean request values.
//!
//! Whether a malformed value is rejected or replaced by its zero value is an
//! explicit [`InputPolicy`] chosen in configuration.

use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// What to do with a present but malformed numeric or boolean value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputPolicy {
    /// Fail the request with a 400.
    #[default]
    Reject,
    /// Substitute `0` / `false` and carry on.
    Default,
}

impl FromStr for InputPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "default" => Ok(Self::Default),
            other => Err(format!(
                "INPUT_POLICY must be 'reject' or 'default', got '{other}'"
            )),
        }
    }
}

impl fmt::Display for InputPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reject => f.write_str("reject"),
            Self::Default => f.write_str("default"),
        }
    }
}

/// Parses a boolean the way form and query flags are written.
///
/// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`.
pub fn parse_bool_literal(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Parses an optional flag. Absent or empty means `false`.
pub fn parse_flag(raw: Option<&str>, field: &str, policy: InputPolicy) -> Result<bool, AppError> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(false),
        Some(raw) => raw,
    };

    match (parse_bool_literal(raw), policy) {
        (Some(value), _) => Ok(value),
        (None, InputPolicy::Default) => Ok(false),
        (None, InputPolicy::Reject) => Err(AppError::invalid(field)),
    }
}

/// Parses an optional number. Absent or empty means zero.
pub fn parse_number<T>(raw: Option<&str>, field: &str, policy: InputPolicy) -> Result<T, AppError>
where
    T: FromStr + Default,
{
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(T::default()),
        Some(raw) => raw,
    };

    match (raw.parse::<T>(), policy) {
        (Ok(value), _) => Ok(value),
        (Err(_), InputPolicy::Default) => Ok(T::default()),
        (Err(_), InputPolicy::Reject) => Err(AppError::invalid(field)),
    }
}

/// Parses a value that must always be well-formed, regardless of policy.
pub fn parse_strict<T: FromStr>(raw: &str, field: &str) -> Result<T, AppError> {
    raw.trim().parse::<T>().map_err(|_| AppError::invalid(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_from_str() {
        assert_eq!("reject".parse::<InputPolicy>(), Ok(InputPolicy::Reject));
        assert_eq!("DEFAULT".parse::<InputPolicy>(), Ok(InputPolicy::Default));
        assert!("lenient".parse::<InputPolicy>().is_err());
    }

    #[test]
    fn test_flag_absent_is_false() {
        assert!(!parse_flag(None, "isTu9", InputPolicy::Reject).unwrap());
        assert!(!parse_flag(Some(""), "isTu9", InputPolicy::Reject).unwrap());
    }

    #[test]
    fn test_flag_literals() {
        for raw in ["1", "t", "T", "TRUE", "true", "True"] {
            assert!(parse_flag(Some(raw), "f", InputPolicy::Reject).unwrap());
        }
        for raw in ["0", "f", "F", "FALSE", "false", "False"] {
            assert!(!parse_flag(Some(raw), "f", InputPolicy::Reject).unwrap());
        }
    }

    #[test]
    fn test_malformed_flag_follows_policy() {
        assert!(parse_flag(Some("yes"), "isU15", InputPolicy::Reject).is_err());
        assert!(!parse_flag(Some("yes"), "isU15", InputPolicy::Default).unwrap());
    }

    #[test]
    fn test_malformed_number_follows_policy() {
        assert!(parse_number::<i32>(Some("12a"), "id", InputPolicy::Reject).is_err());
        assert_eq!(
            parse_number::<i32>(Some("12a"), "id", InputPolicy::Default).unwrap(),
            0
        );
        assert_eq!(
            parse_number::<i32>(Some(" 42 "), "id", InputPolicy::Reject).unwrap(),
            42
        );
        assert_eq!(parse_number::<i32>(None, "id", InputPolicy::Reject).unwrap(), 0);
    }

    #[test]
    fn test_strict_ignores_policy() {
        assert!(parse_strict::<i32>("abc", "id").is_err());
        assert_eq!(parse_strict::<i32>("7", "id").unwrap(), 7);
    }
}
