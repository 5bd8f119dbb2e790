//! Generative AI provider error types.

/// Provider-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ProviderErrorKind {
    /// API key not found in environment
    #[display("OPENAI_API_KEY is not set. Please configure it in your environment.")]
    MissingApiKey,
    /// Request never produced a response (connect, TLS, timeout)
    #[display("Provider request failed: {}", _0)]
    Request(String),
    /// Provider answered with a non-success status
    #[display("HTTP {} error: {}", status_code, message)]
    Api {
        /// HTTP status code
        status_code: u16,
        /// Response body text returned by the provider
        message: String,
    },
    /// Response body could not be decoded
    #[display("Failed to decode provider response: {}", _0)]
    Decode(String),
    /// Response decoded, but matched none of the known response shapes
    #[display("Unrecognized provider response shape")]
    UnrecognizedResponseShape,
}

/// Provider error with source location tracking.
///
/// # Examples
///
/// ```
/// use storyweaver_error::{ProviderError, ProviderErrorKind};
///
/// let err = ProviderError::new(ProviderErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("OPENAI_API_KEY"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Provider Error: {} at line {} in {}", kind, line, file)]
pub struct ProviderError {
    /// The kind of error that occurred
    pub kind: ProviderErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ProviderError {
    /// Create a new ProviderError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ProviderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
