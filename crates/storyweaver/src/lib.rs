//! StoryWeaver - interactive story and inspiration service
//!
//! StoryWeaver co-authors choose-your-own-adventure stories with a generative
//! AI provider and builds multimedia "inspiration kits" (image, audio cue, text
//! spark) from a theme.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use storyweaver::{OpenAiClient, StoryweaverConfig, serve};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = StoryweaverConfig::load(None)?;
//!     let provider = Arc::new(OpenAiClient::new(config.openai.clone()));
//!     serve(&config.server, provider).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `storyweaver_error` - Error types
//! - `storyweaver_core` - Story beats, requests, inspiration kits
//! - `storyweaver_interface` - Provider capability traits
//! - `storyweaver_models` - OpenAI client
//! - `storyweaver_server` - HTTP endpoints, prompts, configuration
//!
//! This crate (`storyweaver`) re-exports everything for convenience.

pub use storyweaver_core::*;
pub use storyweaver_error::*;
pub use storyweaver_interface::*;
pub use storyweaver_models::*;
pub use storyweaver_server::*;
