//! Provider capability traits for StoryWeaver.
//!
//! The endpoints never talk to a concrete AI client. They receive an
//! `Arc<dyn CreativeProvider>`, which bundles three independent capabilities:
//!
//! - [`StructuredGeneration`]: text constrained to a caller-supplied JSON schema
//! - [`ImageGeneration`]: image render from a prompt
//! - [`SpeechGeneration`]: speech/audio render from text
//!
//! Any type implementing all three is a [`CreativeProvider`], so a test double
//! can stand in for the real client.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod structured;
mod traits;
mod types;

pub use structured::generate_validated;
pub use traits::{CreativeProvider, ImageGeneration, SpeechGeneration, StructuredGeneration};
pub use types::{
    GeneratedAudio, GeneratedAudioBuilder, GeneratedImage, ImageRequest, ImageRequestBuilder,
    SpeechRequest, SpeechRequestBuilder, StructuredRequest, StructuredRequestBuilder,
};
