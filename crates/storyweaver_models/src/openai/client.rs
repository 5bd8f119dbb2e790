//! OpenAI REST client.

use crate::openai::{
    extract_response_text, OpenAiConfig, OpenAiImageRequest, OpenAiImageResponse,
    OpenAiInputMessage, OpenAiResponsesRequest, OpenAiRole, OpenAiSpeechRequest, OpenAiTextConfig,
    OpenAiTextFormat, OPENAI_API_KEY_VAR,
};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Serialize;
use storyweaver_error::{
    BuilderError, ProviderError, ProviderErrorKind, StoryweaverResult,
};
use storyweaver_interface::{
    GeneratedAudio, GeneratedImage, ImageGeneration, ImageRequest, SpeechGeneration,
    SpeechRequest, StructuredGeneration, StructuredRequest,
};
use tracing::{debug, error, instrument};

/// Client for the OpenAI Responses, Images, and Audio APIs.
///
/// A missing credential does not prevent construction. It is reported by
/// every call instead, so the service can start and answer `/health` without
/// a key.
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: Option<String>,
    config: OpenAiConfig,
}

impl std::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("config", &self.config)
            .finish()
    }
}

impl OpenAiClient {
    /// Creates a client reading the key from `OPENAI_API_KEY`.
    ///
    /// An unset or empty variable leaves the client without a key.
    #[instrument(skip_all)]
    pub fn new(config: OpenAiConfig) -> Self {
        let api_key = std::env::var(OPENAI_API_KEY_VAR).ok();
        Self::with_api_key(api_key, config)
    }

    /// Creates a client with an explicit key.
    pub fn with_api_key(api_key: Option<String>, config: OpenAiConfig) -> Self {
        let api_key = api_key.filter(|key| !key.trim().is_empty());
        if api_key.is_none() {
            debug!("No OpenAI API key configured; provider calls will fail");
        }
        Self {
            client: Client::new(),
            api_key,
            config,
        }
    }

    /// Whether a credential is configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Active configuration.
    pub fn config(&self) -> &OpenAiConfig {
        &self.config
    }

    #[track_caller]
    fn api_key(&self) -> Result<&str, ProviderError> {
        self.api_key
            .as_deref()
            .ok_or_else(|| ProviderError::new(ProviderErrorKind::MissingApiKey))
    }

    /// POST `body` to `path` and return the response once its status is a success.
    async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Response, ProviderError> {
        let api_key = self.api_key()?;
        let url = self.config.endpoint(path);
        debug!(url = %url, "Sending OpenAI API request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| ProviderError::new(ProviderErrorKind::Request(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), url = %url, "OpenAI API returned an error");
            return Err(ProviderError::new(ProviderErrorKind::Api {
                status_code: status.as_u16(),
                message,
            }));
        }

        Ok(response)
    }

    fn responses_request(
        &self,
        req: &StructuredRequest,
    ) -> Result<OpenAiResponsesRequest, BuilderError> {
        let messages = vec![
            OpenAiInputMessage::builder()
                .role(OpenAiRole::System)
                .content(req.system_prompt().as_str())
                .build()
                .map_err(|e| BuilderError::from(e.to_string()))?,
            OpenAiInputMessage::builder()
                .role(OpenAiRole::User)
                .content(req.user_content().as_str())
                .build()
                .map_err(|e| BuilderError::from(e.to_string()))?,
        ];

        let format = OpenAiTextFormat::builder()
            .name(req.schema_name().as_str())
            .schema(req.schema().clone())
            .build()
            .map_err(|e| BuilderError::from(e.to_string()))?;

        let text = OpenAiTextConfig::builder()
            .format(format)
            .verbosity(self.config.verbosity)
            .build()
            .map_err(|e| BuilderError::from(e.to_string()))?;

        OpenAiResponsesRequest::builder()
            .model(self.config.text_model.as_str())
            .input(messages)
            .text(text)
            .build()
            .map_err(|e| BuilderError::from(e.to_string()))
    }
}

#[async_trait]
impl StructuredGeneration for OpenAiClient {
    #[instrument(skip(self, req), fields(model = %self.config.text_model, schema = %req.schema_name()))]
    async fn generate_structured(&self, req: &StructuredRequest) -> StoryweaverResult<String> {
        self.api_key()?;
        let body = self.responses_request(req)?;

        let response = self.post("/responses", &body).await?;
        let value: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ProviderError::new(ProviderErrorKind::Decode(e.to_string())))?;

        let text = extract_response_text(value)?;
        debug!(length = text.len(), "Extracted response text");
        Ok(text)
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }
}

#[async_trait]
impl ImageGeneration for OpenAiClient {
    #[instrument(skip(self, req), fields(model = %self.config.image_model))]
    async fn generate_image(&self, req: &ImageRequest) -> StoryweaverResult<GeneratedImage> {
        self.api_key()?;
        let body = OpenAiImageRequest::builder()
            .model(self.config.image_model.as_str())
            .prompt(req.prompt().as_str())
            .size(self.config.image_size.as_str())
            .build()
            .map_err(|e| BuilderError::from(e.to_string()))?;

        let response = self.post("/images/generations", &body).await?;
        let images: OpenAiImageResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::new(ProviderErrorKind::Decode(e.to_string())))?;

        let base64 = images.first_image();
        if base64.is_none() {
            debug!("Image response carried no base64 payload");
        }
        Ok(GeneratedImage::new(base64))
    }
}

#[async_trait]
impl SpeechGeneration for OpenAiClient {
    #[instrument(skip(self, req), fields(model = %self.config.speech_model, voice = %self.config.voice))]
    async fn synthesize_speech(&self, req: &SpeechRequest) -> StoryweaverResult<GeneratedAudio> {
        self.api_key()?;
        let body = OpenAiSpeechRequest::builder()
            .model(self.config.speech_model.as_str())
            .voice(self.config.voice.as_str())
            .input(req.input().as_str())
            .response_format(self.config.audio_format)
            .build()
            .map_err(|e| BuilderError::from(e.to_string()))?;

        let response = self.post("/audio/speech", &body).await?;
        let data = response
            .bytes()
            .await
            .map_err(|e| ProviderError::new(ProviderErrorKind::Decode(e.to_string())))?;
        debug!(bytes = data.len(), "Received speech audio");

        GeneratedAudio::builder()
            .data(data.to_vec())
            .mime_type(self.config.audio_format.mime_type())
            .build()
            .map_err(|e| BuilderError::from(e.to_string()).into())
    }
}
