//! Mapping service errors onto HTTP responses.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use storyweaver_error::{StoryweaverError, ValidationError, ValidationErrorKind};
use tracing::{error, warn};

/// Fallback 500 message for the story endpoint.
pub const STORY_FALLBACK_MESSAGE: &str = "Unexpected error generating story beat";

/// Fallback 500 message for the inspiration endpoint.
pub const INSPIRATION_FALLBACK_MESSAGE: &str = "Unexpected error generating inspiration kit";

/// An error response body `{"error": message}` with its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// Classify `err` and pick the message to send.
    ///
    /// Client errors always carry their message. Server errors carry the
    /// underlying message when `expose_details` is set, otherwise `fallback`.
    pub fn from_error(err: StoryweaverError, fallback: &str, expose_details: bool) -> Self {
        if err.is_client_error() {
            warn!(error = %err, "Rejected request");
            return Self {
                status: StatusCode::BAD_REQUEST,
                message: err.public_message(),
            };
        }

        error!(error = %err, "Request failed");
        let message = if expose_details {
            err.public_message()
        } else {
            fallback.to_string()
        };
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message,
        }
    }

    /// Response status.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Response message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

/// A body that failed to decode is the caller's fault.
pub(crate) fn rejection_error(rejection: JsonRejection) -> StoryweaverError {
    ValidationError::new(ValidationErrorKind::MalformedBody(rejection.body_text())).into()
}
