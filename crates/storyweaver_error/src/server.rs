//! Failures of the listening socket and the accept loop.

/// What went wrong while running the HTTP service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ServerErrorKind {
    /// The listener could not be bound
    #[display("Failed to bind {}: {}", address, reason)]
    Bind {
        /// Address the service tried to listen on
        address: String,
        /// I/O error text
        reason: String,
    },

    /// `axum::serve` returned an error
    #[display("Server stopped unexpectedly: {}", _0)]
    Serve(String),
}

/// A [`ServerErrorKind`] plus the place it was raised.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Server Error: {} ({}:{})", kind, file, line)]
pub struct ServerError {
    kind: ServerErrorKind,
    file: &'static str,
    line: u32,
}

impl ServerError {
    /// Wrap `kind`, recording the caller's location.
    #[track_caller]
    pub fn new(kind: ServerErrorKind) -> Self {
        let caller = std::panic::Location::caller();
        Self {
            kind,
            file: caller.file(),
            line: caller.line(),
        }
    }

    /// Shorthand for a [`ServerErrorKind::Bind`] failure.
    #[track_caller]
    pub fn bind(address: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::new(ServerErrorKind::Bind {
            address: address.into(),
            reason: reason.to_string(),
        })
    }

    /// The failure.
    pub fn kind(&self) -> &ServerErrorKind {
        &self.kind
    }
}
