//! Ingress validation for the ingredients field.

use std::fmt;

use thiserror::Error;

/// Length bound applied after trimming, in characters.
pub const MAX_QUERY_CHARS: usize = 300;

/// Why an ingredients field was rejected. Display strings are the exact
/// messages returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("No ingredients provided.")]
    Empty,

    #[error("Ingredients text too long.")]
    TooLong,
}

/// Validated, bounded user-supplied ingredient text.
///
/// Exists only for the duration of one request; downstream components never
/// see an unvalidated string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientQuery(String);

impl IngredientQuery {
    /// Validate raw request input. The field defaults to empty when absent
    /// or null, is trimmed, and must be 1-300 characters. Arbitrary text is
    /// accepted within those bounds.
    pub fn parse(raw: Option<&str>) -> Result<Self, ValidationError> {
        let trimmed = raw.unwrap_or_default().trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty);
        }
        if trimmed.chars().count() > MAX_QUERY_CHARS {
            return Err(ValidationError::TooLong);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IngredientQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_text() {
        let query = IngredientQuery::parse(Some("chicken, tomatoes")).unwrap();
        assert_eq!(query.as_str(), "chicken, tomatoes");
    }

    #[test]
    fn test_trims_whitespace() {
        let query = IngredientQuery::parse(Some("  rice \n")).unwrap();
        assert_eq!(query.as_str(), "rice");
    }

    #[test]
    fn test_rejects_missing_field() {
        assert_eq!(IngredientQuery::parse(None), Err(ValidationError::Empty));
    }

    #[test]
    fn test_rejects_empty_after_trim() {
        assert_eq!(
            IngredientQuery::parse(Some("   \t\n")),
            Err(ValidationError::Empty)
        );
    }

    #[test]
    fn test_accepts_exactly_300_chars() {
        let input = "a".repeat(300);
        assert!(IngredientQuery::parse(Some(&input)).is_ok());
    }

    #[test]
    fn test_rejects_301_chars() {
        let input = "a".repeat(301);
        assert_eq!(
            IngredientQuery::parse(Some(&input)),
            Err(ValidationError::TooLong)
        );
    }

    #[test]
    fn test_length_bound_counts_chars_not_bytes() {
        // 300 two-byte characters are within the bound
        let input = "é".repeat(300);
        assert!(IngredientQuery::parse(Some(&input)).is_ok());
    }

    #[test]
    fn test_no_delimiter_validation() {
        // Arbitrary non-empty text is accepted, not just comma lists
        assert!(IngredientQuery::parse(Some("whatever I had in the fridge")).is_ok());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::Empty.to_string(),
            "No ingredients provided."
        );
        assert_eq!(
            ValidationError::TooLong.to_string(),
            "Ingredients text too long."
        );
    }
}
