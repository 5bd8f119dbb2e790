//! Mock creative provider for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use storyweaver_error::{ProviderError, ProviderErrorKind, StoryweaverError, StoryweaverResult};
use storyweaver_interface::{
    GeneratedAudio, GeneratedImage, ImageGeneration, ImageRequest, SpeechGeneration,
    SpeechRequest, StructuredGeneration, StructuredRequest,
};

/// What one capability answers with.
#[derive(Debug, Clone)]
pub enum MockBehavior<T> {
    /// Always succeed with this value
    Success(T),
    /// Always fail with this error
    Error(ProviderErrorKind),
}

impl<T: Clone> MockBehavior<T> {
    fn respond(&self) -> StoryweaverResult<T> {
        match self {
            MockBehavior::Success(value) => Ok(value.clone()),
            MockBehavior::Error(kind) => Err(StoryweaverError::from(ProviderError::new(kind.clone()))),
        }
    }
}

/// Mock provider recording every request it receives.
///
/// Each capability is configured independently. Unconfigured capabilities
/// fail with a request error so a test notices unexpected calls.
pub struct MockProvider {
    structured: MockBehavior<String>,
    image: MockBehavior<Option<String>>,
    speech: MockBehavior<Vec<u8>>,
    structured_requests: Arc<Mutex<Vec<StructuredRequest>>>,
    image_requests: Arc<Mutex<Vec<ImageRequest>>>,
    speech_requests: Arc<Mutex<Vec<SpeechRequest>>>,
}

impl Default for MockProvider {
    fn default() -> Self {
        let unconfigured = || ProviderErrorKind::Request("mock capability not configured".to_string());
        Self {
            structured: MockBehavior::Error(unconfigured()),
            image: MockBehavior::Error(unconfigured()),
            speech: MockBehavior::Error(unconfigured()),
            structured_requests: Arc::new(Mutex::new(Vec::new())),
            image_requests: Arc::new(Mutex::new(Vec::new())),
            speech_requests: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[allow(dead_code)]
impl MockProvider {
    /// Create a mock whose structured generation returns `text`.
    pub fn new_structured(text: impl Into<String>) -> Self {
        Self::default().with_structured(MockBehavior::Success(text.into()))
    }

    /// Replace the structured generation behavior.
    pub fn with_structured(mut self, behavior: MockBehavior<String>) -> Self {
        self.structured = behavior;
        self
    }

    /// Replace the image behavior.
    pub fn with_image(mut self, behavior: MockBehavior<Option<String>>) -> Self {
        self.image = behavior;
        self
    }

    /// Replace the speech behavior.
    pub fn with_speech(mut self, behavior: MockBehavior<Vec<u8>>) -> Self {
        self.speech = behavior;
        self
    }

    /// Structured requests received so far.
    pub fn structured_requests(&self) -> Vec<StructuredRequest> {
        self.structured_requests.lock().unwrap().clone()
    }

    /// Image requests received so far.
    pub fn image_requests(&self) -> Vec<ImageRequest> {
        self.image_requests.lock().unwrap().clone()
    }

    /// Speech requests received so far.
    pub fn speech_requests(&self) -> Vec<SpeechRequest> {
        self.speech_requests.lock().unwrap().clone()
    }

    /// Total calls across all capabilities.
    pub fn call_count(&self) -> usize {
        self.structured_requests.lock().unwrap().len()
            + self.image_requests.lock().unwrap().len()
            + self.speech_requests.lock().unwrap().len()
    }
}

#[async_trait]
impl StructuredGeneration for MockProvider {
    async fn generate_structured(&self, req: &StructuredRequest) -> StoryweaverResult<String> {
        self.structured_requests.lock().unwrap().push(req.clone());
        self.structured.respond()
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

#[async_trait]
impl ImageGeneration for MockProvider {
    async fn generate_image(&self, req: &ImageRequest) -> StoryweaverResult<GeneratedImage> {
        self.image_requests.lock().unwrap().push(req.clone());
        self.image.respond().map(GeneratedImage::new)
    }
}

#[async_trait]
impl SpeechGeneration for MockProvider {
    async fn synthesize_speech(&self, req: &SpeechRequest) -> StoryweaverResult<GeneratedAudio> {
        self.speech_requests.lock().unwrap().push(req.clone());
        let data = self.speech.respond()?;
        Ok(GeneratedAudio::builder()
            .data(data)
            .mime_type("audio/mpeg")
            .build()
            .unwrap())
    }
}
