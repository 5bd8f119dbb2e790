//! Errors that carry only a message and the location that raised them.

macro_rules! message_error {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
        #[display("{} Error: {} at line {} in {}", $label, message, line, file)]
        pub struct $name {
            /// The underlying error message
            pub message: String,
            /// Line number where the error occurred
            pub line: u32,
            /// File where the error occurred
            pub file: &'static str,
        }

        impl $name {
            /// Create the error at the caller's location.
            #[track_caller]
            pub fn new(message: impl Into<String>) -> Self {
                let location = std::panic::Location::caller();
                Self {
                    message: message.into(),
                    line: location.line(),
                    file: location.file(),
                }
            }
        }
    };
}

message_error!(
    /// Malformed JSON, in provider output or while encoding a prompt.
    ///
    /// ```
    /// use storyweaver_error::JsonError;
    ///
    /// let err = JsonError::new("expected value at line 1 column 1");
    /// assert!(err.to_string().starts_with("JSON Error: expected value"));
    /// ```
    JsonError,
    "JSON"
);

message_error!(
    /// Failure to build or deserialize the layered configuration.
    ConfigError,
    "Configuration"
);
