//! StoryWeaver HTTP service.
//!
//! Two JSON endpoints backed by a generative AI provider:
//!
//! - `POST /story` continues an interactive story, returning a [`storyweaver_core::StoryBeat`]
//! - `POST /inspiration` builds a multimedia [`storyweaver_core::InspirationResult`]
//!
//! The provider is injected as an `Arc<dyn CreativeProvider>`; nothing here
//! knows which AI service is behind it.
//!
//! ```no_run
//! use std::sync::Arc;
//! use storyweaver_models::OpenAiClient;
//! use storyweaver_server::{serve, StoryweaverConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = StoryweaverConfig::load(None)?;
//! let provider = Arc::new(OpenAiClient::new(config.openai.clone()));
//! serve(&config.server, provider).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod inspiration;
mod prompts;
mod router;
mod schema;
mod serve;
mod state;
mod story;

pub use config::{ServerConfig, StoryweaverConfig};
pub use error::{ApiError, INSPIRATION_FALLBACK_MESSAGE, STORY_FALLBACK_MESSAGE};
pub use inspiration::{generate_inspiration_kit, inspiration_handler};
pub use prompts::{INSPIRATION_SYSTEM_PROMPT, STORY_SYSTEM_PROMPT};
pub use router::create_router;
pub use schema::{inspiration_schema, story_beat_schema, INSPIRATION_SCHEMA_NAME, STORY_SCHEMA_NAME};
pub use serve::serve;
pub use state::AppState;
pub use story::{generate_story_beat, story_handler};
