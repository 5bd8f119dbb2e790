//! Validation errors for request bodies and structured provider output.

/// Validation error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ValidationErrorKind {
    /// Required request fields were absent or empty
    #[display("Missing required fields: {}", _0.join(", "))]
    MissingFields(Vec<String>),

    /// A request field carried a value outside its allowed set
    #[display("Invalid value for '{}': {}", field, reason)]
    InvalidField {
        /// The field name, as it appears on the wire
        field: String,
        /// Why the value was rejected
        reason: String,
    },

    /// The request body was not decodable JSON
    #[display("Invalid request body: {}", _0)]
    MalformedBody(String),

    /// Provider output decoded but broke the schema it was constrained to
    #[display("Provider output violated schema: {}", _0)]
    SchemaViolation(String),
}

impl ValidationErrorKind {
    /// Whether this condition was caused by the HTTP caller.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::SchemaViolation(_))
    }
}

/// Validation error with location tracking.
///
/// # Examples
///
/// ```
/// use storyweaver_error::{ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::MissingFields(vec!["theme".into()]));
/// assert_eq!(err.kind().to_string(), "Missing required fields: theme");
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    kind: ValidationErrorKind,
    line: u32,
    file: &'static str,
}

impl ValidationError {
    /// Create a new validation error with caller location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ValidationErrorKind {
        &self.kind
    }
}
