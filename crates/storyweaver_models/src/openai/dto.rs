//! OpenAI REST API data transfer objects.

use crate::openai::{AudioFormat, Verbosity};
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Message role in a Responses API input list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpenAiRole {
    /// Instruction message
    System,
    /// End-user message
    User,
}

/// One entry of the `input` list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct OpenAiInputMessage {
    /// Message role
    role: OpenAiRole,
    /// Message text
    content: String,
}

impl OpenAiInputMessage {
    /// Creates a new builder for `OpenAiInputMessage`.
    pub fn builder() -> OpenAiInputMessageBuilder {
        OpenAiInputMessageBuilder::default()
    }
}

/// `text.format` block selecting JSON-schema output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct OpenAiTextFormat {
    /// Always `json_schema`
    #[serde(rename = "type")]
    #[builder(default = "\"json_schema\".to_string()")]
    format_type: String,
    /// Schema name
    name: String,
    /// The schema itself
    schema: serde_json::Value,
    /// Strict schema adherence flag
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    strict: Option<bool>,
}

impl OpenAiTextFormat {
    /// Creates a new builder for `OpenAiTextFormat`.
    pub fn builder() -> OpenAiTextFormatBuilder {
        OpenAiTextFormatBuilder::default()
    }
}

/// `text` block of a Responses API request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct OpenAiTextConfig {
    /// Output format
    format: OpenAiTextFormat,
    /// Output verbosity
    verbosity: Verbosity,
}

impl OpenAiTextConfig {
    /// Creates a new builder for `OpenAiTextConfig`.
    pub fn builder() -> OpenAiTextConfigBuilder {
        OpenAiTextConfigBuilder::default()
    }
}

/// `POST /responses` request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct OpenAiResponsesRequest {
    /// Model identifier
    model: String,
    /// System and user messages
    input: Vec<OpenAiInputMessage>,
    /// Output format configuration
    text: OpenAiTextConfig,
}

impl OpenAiResponsesRequest {
    /// Creates a new builder for `OpenAiResponsesRequest`.
    pub fn builder() -> OpenAiResponsesRequestBuilder {
        OpenAiResponsesRequestBuilder::default()
    }
}

/// `POST /images/generations` request body.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct OpenAiImageRequest {
    /// Model identifier
    model: String,
    /// Image prompt
    prompt: String,
    /// Image size, e.g. `1024x1024`
    size: String,
    /// Always `b64_json`
    #[builder(default = "\"b64_json\".to_string()")]
    response_format: String,
}

impl OpenAiImageRequest {
    /// Creates a new builder for `OpenAiImageRequest`.
    pub fn builder() -> OpenAiImageRequestBuilder {
        OpenAiImageRequestBuilder::default()
    }
}

/// One generated image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct OpenAiImageDatum {
    /// Base64 image bytes
    #[serde(default)]
    b64_json: Option<String>,
}

/// `POST /images/generations` response body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct OpenAiImageResponse {
    /// Generated images
    #[serde(default)]
    data: Vec<OpenAiImageDatum>,
}

impl OpenAiImageResponse {
    /// Base64 payload of the first image, if any.
    pub fn first_image(self) -> Option<String> {
        self.data.into_iter().next().and_then(|datum| datum.b64_json)
    }
}

/// `POST /audio/speech` request body.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct OpenAiSpeechRequest {
    /// Model identifier
    model: String,
    /// Voice name
    voice: String,
    /// Text to speak
    input: String,
    /// Encoding of the returned audio
    response_format: AudioFormat,
}

impl OpenAiSpeechRequest {
    /// Creates a new builder for `OpenAiSpeechRequest`.
    pub fn builder() -> OpenAiSpeechRequestBuilder {
        OpenAiSpeechRequestBuilder::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_responses_request_wire_shape() {
        let request = OpenAiResponsesRequest::builder()
            .model("gpt-4o-mini")
            .input(vec![
                OpenAiInputMessage::builder()
                    .role(OpenAiRole::System)
                    .content("Be brief.")
                    .build()
                    .unwrap(),
                OpenAiInputMessage::builder()
                    .role(OpenAiRole::User)
                    .content("{}")
                    .build()
                    .unwrap(),
            ])
            .text(
                OpenAiTextConfig::builder()
                    .format(
                        OpenAiTextFormat::builder()
                            .name("story_beat")
                            .schema(json!({"type": "object"}))
                            .build()
                            .unwrap(),
                    )
                    .verbosity(Verbosity::Medium)
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "model": "gpt-4o-mini",
                "input": [
                    {"role": "system", "content": "Be brief."},
                    {"role": "user", "content": "{}"}
                ],
                "text": {
                    "format": {"type": "json_schema", "name": "story_beat", "schema": {"type": "object"}},
                    "verbosity": "medium"
                }
            })
        );
    }

    #[test]
    fn test_image_request_defaults_to_b64() {
        let request = OpenAiImageRequest::builder()
            .model("dall-e-3")
            .prompt("A lighthouse")
            .size("1024x1024")
            .build()
            .unwrap();
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["response_format"], "b64_json");
    }

    #[test]
    fn test_image_response_first_image() {
        let response: OpenAiImageResponse =
            serde_json::from_value(json!({"created": 1, "data": [{"b64_json": "iVBOR"}]})).unwrap();
        assert_eq!(response.first_image().as_deref(), Some("iVBOR"));

        let empty: OpenAiImageResponse = serde_json::from_value(json!({"data": []})).unwrap();
        assert_eq!(empty.first_image(), None);

        let url_only: OpenAiImageResponse =
            serde_json::from_value(json!({"data": [{"url": "https://example.com/a.png"}]})).unwrap();
        assert_eq!(url_only.first_image(), None);
    }

    #[test]
    fn test_speech_request_wire_shape() {
        let request = OpenAiSpeechRequest::builder()
            .model("gpt-4o-mini-tts")
            .voice("ember")
            .input("Low strings, slow tempo")
            .response_format(AudioFormat::Mp3)
            .build()
            .unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "model": "gpt-4o-mini-tts",
                "voice": "ember",
                "input": "Low strings, slow tempo",
                "response_format": "mp3"
            })
        );
    }
}
