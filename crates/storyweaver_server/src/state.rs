//! Shared router state.

use std::sync::Arc;
use storyweaver_interface::CreativeProvider;

/// State cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    provider: Arc<dyn CreativeProvider>,
    expose_error_details: bool,
}

impl AppState {
    /// Creates new app state.
    pub fn new(provider: Arc<dyn CreativeProvider>, expose_error_details: bool) -> Self {
        Self {
            provider,
            expose_error_details,
        }
    }

    /// The AI provider.
    pub fn provider(&self) -> &dyn CreativeProvider {
        self.provider.as_ref()
    }

    /// Whether 500 responses carry the underlying error message.
    pub fn expose_error_details(&self) -> bool {
        self.expose_error_details
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("provider", &self.provider.provider_name())
            .field("expose_error_details", &self.expose_error_details)
            .finish()
    }
}
