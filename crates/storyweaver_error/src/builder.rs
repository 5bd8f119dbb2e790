//! Errors raised while assembling provider requests with `derive_builder`.

/// Specific builder error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum BuilderErrorKind {
    /// A required builder field was never set
    #[display("Missing required field: {}", _0)]
    MissingField(String),

    /// The builder rejected the assembled value
    #[display("Validation failed: {}", _0)]
    ValidationFailed(String),
}

impl BuilderErrorKind {
    /// Classify a `derive_builder` error message.
    ///
    /// Uninitialized-field messages have the form `` `name` must be initialized ``.
    fn from_message(msg: &str) -> Self {
        msg.strip_suffix(" must be initialized")
            .and_then(|field| field.strip_prefix('`'))
            .and_then(|field| field.strip_suffix('`'))
            .map(|field| Self::MissingField(field.to_string()))
            .unwrap_or_else(|| Self::ValidationFailed(msg.to_string()))
    }
}

/// Builder error with location tracking.
///
/// # Examples
///
/// ```
/// use storyweaver_error::{BuilderError, BuilderErrorKind};
///
/// let err = BuilderError::from("`model` must be initialized");
/// assert_eq!(err.kind(), &BuilderErrorKind::MissingField("model".to_string()));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Builder Error: {} at line {} in {}", kind, line, file)]
pub struct BuilderError {
    kind: BuilderErrorKind,
    line: u32,
    file: &'static str,
}

impl BuilderError {
    /// Create a new builder error with caller location tracking.
    #[track_caller]
    pub fn new(kind: BuilderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &BuilderErrorKind {
        &self.kind
    }
}

impl From<String> for BuilderError {
    #[track_caller]
    fn from(msg: String) -> Self {
        Self::new(BuilderErrorKind::from_message(&msg))
    }
}

impl From<&str> for BuilderError {
    #[track_caller]
    fn from(msg: &str) -> Self {
        Self::new(BuilderErrorKind::from_message(msg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_messages_are_validation_failures() {
        let err = BuilderError::from("size must be WxH".to_string());
        assert_eq!(
            err.kind(),
            &BuilderErrorKind::ValidationFailed("size must be WxH".to_string())
        );
    }
}
