//! Cardinality checks for structured provider output.

use storyweaver_error::{ValidationError, ValidationErrorKind};

/// Output types that must satisfy the bounds of the schema they were generated under.
///
/// Serde already rejects missing and unknown fields; `validate` covers what serde
/// cannot express, such as `minItems`/`maxItems`.
pub trait Validate {
    /// Check the value against its schema bounds.
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Fail unless `len` lies within `min..=max`.
#[track_caller]
pub(crate) fn check_len(
    field: &str,
    len: usize,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    if (min..=max).contains(&len) {
        Ok(())
    } else {
        Err(ValidationError::new(ValidationErrorKind::SchemaViolation(
            format!("{} must contain {} to {} items, got {}", field, min, max, len),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_len_bounds_are_inclusive() {
        assert!(check_len("choices", 2, 2, 4).is_ok());
        assert!(check_len("choices", 4, 2, 4).is_ok());
        assert!(check_len("choices", 1, 2, 4).is_err());
        assert!(check_len("choices", 5, 2, 4).is_err());
    }

    #[test]
    fn test_check_len_message_names_field() {
        let err = check_len("vibeTags", 7, 3, 6).unwrap_err();
        assert_eq!(
            err.kind().to_string(),
            "Provider output violated schema: vibeTags must contain 3 to 6 items, got 7"
        );
    }
}
