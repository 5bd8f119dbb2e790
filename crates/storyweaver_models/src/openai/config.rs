//! OpenAI client configuration.

use serde::{Deserialize, Serialize};

/// Environment variable holding the API credential.
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Encoding requested from the speech endpoint.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AudioFormat {
    /// MPEG layer III
    #[default]
    Mp3,
    /// Opus in an Ogg container
    Opus,
    /// AAC
    Aac,
    /// FLAC
    Flac,
    /// WAV
    Wav,
    /// Raw 24kHz 16-bit PCM
    Pcm,
}

impl AudioFormat {
    /// MIME type reported to clients for this encoding.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyweaver_models::AudioFormat;
    ///
    /// assert_eq!(AudioFormat::Mp3.mime_type(), "audio/mpeg");
    /// ```
    pub fn mime_type(&self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "audio/mpeg",
            AudioFormat::Opus => "audio/ogg",
            AudioFormat::Aac => "audio/aac",
            AudioFormat::Flac => "audio/flac",
            AudioFormat::Wav => "audio/wav",
            AudioFormat::Pcm => "audio/pcm",
        }
    }
}

/// Output verbosity hint for structured generation.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Verbosity {
    /// Terse
    Low,
    /// Balanced
    #[default]
    Medium,
    /// Expansive
    High,
}

/// Models, voice, and endpoint used by [`crate::OpenAiClient`].
///
/// Loaded from the `[openai]` table of `storyweaver.toml`. Every field has a
/// default, so partial tables are fine.
///
/// ```toml
/// [openai]
/// text_model = "gpt-4o-mini"
/// voice = "alloy"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OpenAiConfig {
    /// API root, without trailing slash
    pub base_url: String,
    /// Model for structured text generation
    pub text_model: String,
    /// Model for image generation
    pub image_model: String,
    /// Image size, e.g. `1024x1024`
    pub image_size: String,
    /// Model for speech generation
    pub speech_model: String,
    /// Speech voice
    pub voice: String,
    /// Speech encoding
    pub audio_format: AudioFormat,
    /// Structured output verbosity
    pub verbosity: Verbosity,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            text_model: "gpt-4o-mini".to_string(),
            image_model: "dall-e-3".to_string(),
            image_size: "1024x1024".to_string(),
            speech_model: "gpt-4o-mini-tts".to_string(),
            voice: "ember".to_string(),
            audio_format: AudioFormat::Mp3,
            verbosity: Verbosity::Medium,
        }
    }
}

impl OpenAiConfig {
    /// Full URL for an API path such as `/responses`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}
