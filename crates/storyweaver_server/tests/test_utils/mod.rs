//! Test utilities for StoryWeaver server tests.
//!
//! This module provides a mock provider, payload fixtures, and request helpers.

pub mod fixtures;
pub mod http;
pub mod mock_provider;

#[allow(unused_imports)]
pub use fixtures::{beat_json, ideation_json};
#[allow(unused_imports)]
pub use http::{post_json, send};
#[allow(unused_imports)]
pub use mock_provider::{MockBehavior, MockProvider};
