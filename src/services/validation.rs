use regex::Regex;
use std::sync::OnceLock;

use crate::errors::{RecordError, RecordResult};

const MAX_NAME_LENGTH: usize = 255;

static CONTROL_CHARS: OnceLock<Option<Regex>> = OnceLock::new();

/// Input checks for record fields submitted through forms or CSV rows.
///
/// Accepted values are stored exactly as given: names are not trimmed and
/// may be empty, ages may be any 32-bit integer.
pub struct ValidationService;

impl ValidationService {
    /// Check a record name without altering it
    pub fn validate_name(name: &str) -> RecordResult<String> {
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(RecordError::Validation(format!(
                "name is too long (max {} characters)",
                MAX_NAME_LENGTH
            )));
        }

        let control_chars = CONTROL_CHARS
            .get_or_init(|| Regex::new(r"[\x00-\x1F\x7F]").ok())
            .as_ref()
            .ok_or_else(|| {
                RecordError::Validation("Failed to compile name regex".to_string())
            })?;
        if control_chars.is_match(name) {
            return Err(RecordError::Validation(
                "name contains control characters".to_string(),
            ));
        }

        Ok(name.to_string())
    }

    /// Parse an age field; surrounding whitespace is ignored
    pub fn parse_age(age: &str) -> RecordResult<i32> {
        let trimmed = age.trim();

        trimmed.parse::<i32>().map_err(|_| {
            RecordError::Validation(format!("age '{}' is not an integer", trimmed))
        })
    }

    /// Validate both fields of a submitted record
    pub fn validate_record(name: &str, age: &str) -> RecordResult<(String, i32)> {
        Ok((Self::validate_name(name)?, Self::parse_age(age)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_kept_verbatim() {
        assert_eq!(ValidationService::validate_name("  Anna ").unwrap(), "  Anna ");
        assert_eq!(ValidationService::validate_name("").unwrap(), "");
        assert_eq!(ValidationService::validate_name("   ").unwrap(), "   ");
        assert!(ValidationService::validate_name("Jānis Bērziņš").is_ok());
        assert!(ValidationService::validate_name(&"a".repeat(255)).is_ok());
    }

    #[test]
    fn test_name_limits() {
        assert!(ValidationService::validate_name("bad\u{0007}name").is_err());
        assert!(ValidationService::validate_name(&"a".repeat(256)).is_err());
    }

    #[test]
    fn test_age_parsing() {
        assert_eq!(ValidationService::parse_age("42").unwrap(), 42);
        assert_eq!(ValidationService::parse_age(" 7 ").unwrap(), 7);
        assert_eq!(ValidationService::parse_age("0").unwrap(), 0);
        assert_eq!(ValidationService::parse_age("-1").unwrap(), -1);
        assert_eq!(ValidationService::parse_age("+5").unwrap(), 5);

        assert!(ValidationService::parse_age("").is_err());
        assert!(ValidationService::parse_age("forty").is_err());
        assert!(ValidationService::parse_age("4.5").is_err());
        assert!(ValidationService::parse_age("99999999999").is_err());
    }

    #[test]
    fn test_validate_record() {
        let (name, age) = ValidationService::validate_record(" Bob", "-30").unwrap();
        assert_eq!(name, " Bob");
        assert_eq!(age, -30);

        let err = ValidationService::validate_record("Bob", "x").unwrap_err();
        assert!(matches!(err, RecordError::Validation(_)));
    }
}
