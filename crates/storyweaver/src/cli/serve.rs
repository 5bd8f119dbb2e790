//! `serve` command handler.

use std::{path::Path, sync::Arc};
use storyweaver_error::StoryweaverResult;
use storyweaver_models::OpenAiClient;
use storyweaver_server::{serve, StoryweaverConfig};

/// Handle the `serve` command
pub async fn run_server(
    path: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
) -> StoryweaverResult<()> {
    let mut config = StoryweaverConfig::load(path)?;
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    let client = OpenAiClient::new(config.openai.clone());
    if !client.has_api_key() {
        tracing::warn!("OPENAI_API_KEY is not set; story and inspiration requests will fail");
    }
    tracing::info!(model = %config.openai.text_model, "Starting StoryWeaver. Press Ctrl+C to stop.");

    serve(&config.server, Arc::new(client)).await
}
