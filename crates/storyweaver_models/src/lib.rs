//! Generative AI provider integrations for StoryWeaver.
//!
//! [`OpenAiClient`] implements every capability trait from
//! `storyweaver_interface`, so it can be handed to the server as an
//! `Arc<dyn CreativeProvider>`.
//!
//! ```no_run
//! use std::sync::Arc;
//! use storyweaver_interface::CreativeProvider;
//! use storyweaver_models::{OpenAiClient, OpenAiConfig};
//!
//! let provider: Arc<dyn CreativeProvider> = Arc::new(OpenAiClient::new(OpenAiConfig::default()));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod openai;

pub use openai::*;
