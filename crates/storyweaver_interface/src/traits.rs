//! Trait definitions for generative AI providers and their capabilities.

use crate::{GeneratedAudio, GeneratedImage, ImageRequest, SpeechRequest, StructuredRequest};
use async_trait::async_trait;
use storyweaver_error::StoryweaverResult;

/// Text generation constrained to a JSON schema.
#[async_trait]
pub trait StructuredGeneration: Send + Sync {
    /// Generate text that should conform to `req.schema()`.
    ///
    /// Returns the raw text of the provider's answer. Callers are responsible
    /// for parsing and validating it; see [`crate::generate_validated`].
    async fn generate_structured(&self, req: &StructuredRequest) -> StoryweaverResult<String>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &'static str;
}

/// Image rendering from a text prompt.
#[async_trait]
pub trait ImageGeneration: Send + Sync {
    /// Render an image. The result carries no image when the provider returned none.
    async fn generate_image(&self, req: &ImageRequest) -> StoryweaverResult<GeneratedImage>;
}

/// Speech/audio rendering from text.
#[async_trait]
pub trait SpeechGeneration: Send + Sync {
    /// Render audio for `req.input()`.
    async fn synthesize_speech(&self, req: &SpeechRequest) -> StoryweaverResult<GeneratedAudio>;
}

/// Everything the story and inspiration endpoints need from a provider.
pub trait CreativeProvider: StructuredGeneration + ImageGeneration + SpeechGeneration {}

impl<T> CreativeProvider for T where T: StructuredGeneration + ImageGeneration + SpeechGeneration {}
