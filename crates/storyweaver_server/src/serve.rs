//! Listener lifecycle.

use crate::{create_router, AppState, ServerConfig};
use std::sync::Arc;
use storyweaver_error::{ServerError, ServerErrorKind, StoryweaverResult};
use storyweaver_interface::CreativeProvider;
use tokio::net::TcpListener;
use tracing::{info, instrument, warn};

/// Bind `config.address()` and serve until Ctrl+C.
#[instrument(skip(provider))]
pub async fn serve(config: &ServerConfig, provider: Arc<dyn CreativeProvider>) -> StoryweaverResult<()> {
    let address = config.address();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|e| ServerError::bind(address.as_str(), e))?;

    if !config.expose_error_details {
        info!("Provider error details will be withheld from responses");
    }
    info!(address = %address, "StoryWeaver listening");

    let router = create_router(AppState::new(provider, config.expose_error_details));
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Serve(e.to_string())))?;

    info!("StoryWeaver stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => warn!(error = %e, "Failed to listen for shutdown signal"),
    }
}
