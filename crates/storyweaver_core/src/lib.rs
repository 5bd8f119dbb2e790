//! Core data types for StoryWeaver.
//!
//! This crate holds the story and inspiration data model shared by the
//! provider client and the HTTP endpoints:
//!
//! - [`StoryBeat`] and its parts, as produced by the story generator
//! - [`StoryRequest`] and the [`CondensedBeat`] history sent back for continuity
//! - [`InspirationRequest`], the intermediate [`Ideation`], and the merged
//!   [`InspirationResult`]
//!
//! Raw request payloads ([`StoryRequestPayload`], [`InspirationPayload`]) accept
//! any subset of fields; converting them into the validated request types reports
//! every missing field at once.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod beat;
mod inspiration;
mod story;
mod validate;

pub use beat::{BeatInspiration, CharacterFocus, CreativeFeedback, StoryBeat, StoryChoice};
pub use inspiration::{
    Focus, Ideation, InspirationPayload, InspirationPrompt, InspirationRequest, InspirationResult,
    Medium, Vibe, INSPIRATION_INSTRUCTION,
};
pub use story::{
    condense_history, CondensedBeat, StoryMode, StoryPrompt, StoryRequest, StoryRequestPayload,
    HISTORY_WINDOW,
};
pub use validate::Validate;
