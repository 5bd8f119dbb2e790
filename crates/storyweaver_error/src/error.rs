//! Top-level error wrapper types.

use crate::{BuilderError, ConfigError, JsonError, ProviderError, ServerError, ValidationError};

/// Every error condition a StoryWeaver operation can produce.
///
/// # Examples
///
/// ```
/// use storyweaver_error::{StoryweaverError, StoryweaverErrorKind, JsonError};
///
/// let err: StoryweaverError = JsonError::new("trailing characters").into();
/// assert!(matches!(err.kind(), StoryweaverErrorKind::Json(_)));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum StoryweaverErrorKind {
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
    /// Generative AI provider error
    #[from(ProviderError)]
    Provider(ProviderError),
    /// Request or payload validation error
    #[from(ValidationError)]
    Validation(ValidationError),
    /// HTTP server lifecycle error
    #[from(ServerError)]
    Server(ServerError),
}

/// StoryWeaver error with kind discrimination.
///
/// # Examples
///
/// ```
/// use storyweaver_error::{StoryweaverError, StoryweaverResult, ConfigError};
///
/// fn might_fail() -> StoryweaverResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("StoryWeaver Error: {}", _0)]
pub struct StoryweaverError(Box<StoryweaverErrorKind>);

impl StoryweaverError {
    /// Create a new error from a kind.
    pub fn new(kind: StoryweaverErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StoryweaverErrorKind {
        &self.0
    }

    /// Whether the caller, not the provider or the service, caused this error.
    pub fn is_client_error(&self) -> bool {
        match self.kind() {
            StoryweaverErrorKind::Validation(err) => err.kind().is_client_error(),
            _ => false,
        }
    }

    /// The error message without source location, suitable for a response body.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyweaver_error::{ProviderError, ProviderErrorKind, StoryweaverError};
    ///
    /// let err: StoryweaverError = ProviderError::new(ProviderErrorKind::MissingApiKey).into();
    /// assert!(err.public_message().starts_with("OPENAI_API_KEY is not set"));
    /// assert!(!err.public_message().contains("line"));
    /// ```
    pub fn public_message(&self) -> String {
        match self.kind() {
            StoryweaverErrorKind::Json(err) => err.message.clone(),
            StoryweaverErrorKind::Config(err) => err.message.clone(),
            StoryweaverErrorKind::Builder(err) => err.kind().to_string(),
            StoryweaverErrorKind::Provider(err) => err.kind.to_string(),
            StoryweaverErrorKind::Validation(err) => err.kind().to_string(),
            StoryweaverErrorKind::Server(err) => err.kind().to_string(),
        }
    }
}

// Generic From implementation for any type that converts to StoryweaverErrorKind
impl<T> From<T> for StoryweaverError
where
    T: Into<StoryweaverErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for StoryWeaver operations.
///
/// # Examples
///
/// ```
/// use storyweaver_error::{StoryweaverResult, ConfigError};
///
/// fn fetch_data() -> StoryweaverResult<String> {
///     Err(ConfigError::new("port out of range"))?
/// }
/// ```
pub type StoryweaverResult<T> = std::result::Result<T, StoryweaverError>;
