//! Tests for the OpenAI client that need no network access.

use std::sync::Arc;
use storyweaver_error::{ProviderErrorKind, StoryweaverErrorKind};
use storyweaver_interface::{CreativeProvider, ImageRequest, SpeechGeneration, SpeechRequest};
use storyweaver_models::{AudioFormat, OpenAiClient, OpenAiConfig};

#[tokio::test]
async fn test_keyless_client_usable_as_creative_provider() -> anyhow::Result<()> {
    let provider: Arc<dyn CreativeProvider> =
        Arc::new(OpenAiClient::with_api_key(None, OpenAiConfig::default()));
    assert_eq!(provider.provider_name(), "openai");

    let err = provider
        .generate_image(&ImageRequest::builder().prompt("Fog").build()?)
        .await
        .unwrap_err();
    assert!(matches!(
        err.kind(),
        StoryweaverErrorKind::Provider(p) if p.kind == ProviderErrorKind::MissingApiKey
    ));
    assert!(!err.is_client_error());
    Ok(())
}

#[tokio::test]
async fn test_unreachable_endpoint_is_request_error() -> anyhow::Result<()> {
    let config = OpenAiConfig {
        // Port 9 (discard) on loopback refuses connections on test hosts.
        base_url: "http://127.0.0.1:9/v1".to_string(),
        audio_format: AudioFormat::Wav,
        ..Default::default()
    };
    let client = OpenAiClient::with_api_key(Some("sk-test".to_string()), config);

    let err = client
        .synthesize_speech(&SpeechRequest::builder().input("Rain").build()?)
        .await
        .unwrap_err();
    assert!(matches!(
        err.kind(),
        StoryweaverErrorKind::Provider(p) if matches!(p.kind, ProviderErrorKind::Request(_))
    ));
    Ok(())
}
