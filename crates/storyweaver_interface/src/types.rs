//! Request and response types exchanged with providers.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A schema-constrained generation request.
///
/// # Examples
///
/// ```
/// use storyweaver_interface::StructuredRequest;
/// use serde_json::json;
///
/// let request = StructuredRequest::builder()
///     .system_prompt("You are a terse assistant.")
///     .user_content(r#"{"question":"colour of the sky"}"#)
///     .schema_name("answer")
///     .schema(json!({"type": "object"}))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.schema_name(), "answer");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct StructuredRequest {
    /// Fixed instruction prompt
    system_prompt: String,
    /// User message, usually a JSON document
    user_content: String,
    /// Name the schema is registered under with the provider
    schema_name: String,
    /// JSON schema the output must conform to
    schema: serde_json::Value,
}

impl StructuredRequest {
    /// Creates a new builder for `StructuredRequest`.
    pub fn builder() -> StructuredRequestBuilder {
        StructuredRequestBuilder::default()
    }
}

/// An image render request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ImageRequest {
    /// Image prompt
    prompt: String,
}

impl ImageRequest {
    /// Creates a new builder for `ImageRequest`.
    pub fn builder() -> ImageRequestBuilder {
        ImageRequestBuilder::default()
    }
}

/// A rendered image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct GeneratedImage {
    /// Base64-encoded image bytes, if the provider returned any
    base64: Option<String>,
}

impl GeneratedImage {
    /// Wrap the provider's base64 payload.
    pub fn new(base64: Option<String>) -> Self {
        Self { base64 }
    }

    /// Consume the image, returning its base64 payload.
    pub fn into_base64(self) -> Option<String> {
        self.base64
    }
}

/// A speech render request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct SpeechRequest {
    /// Text to speak
    input: String,
}

impl SpeechRequest {
    /// Creates a new builder for `SpeechRequest`.
    pub fn builder() -> SpeechRequestBuilder {
        SpeechRequestBuilder::default()
    }
}

/// Rendered audio.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct GeneratedAudio {
    /// Encoded audio bytes
    data: Vec<u8>,
    /// MIME type of `data`
    mime_type: String,
}

impl GeneratedAudio {
    /// Creates a new builder for `GeneratedAudio`.
    pub fn builder() -> GeneratedAudioBuilder {
        GeneratedAudioBuilder::default()
    }
}
