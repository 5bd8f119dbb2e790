//! Error types for StoryWeaver.
//!
//! This crate provides the error types shared by every StoryWeaver crate.
//!
//! # Error Hierarchy
//!
//! Errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! Client-caused problems (missing or malformed request fields) are
//! [`ValidationError`]s; everything the AI provider does wrong, including
//! schema-violating output, surfaces as [`ProviderError`], [`JsonError`], or a
//! [`ValidationError`] raised against the provider's payload.
//!
//! # Examples
//!
//! ```
//! use storyweaver_error::{StoryweaverResult, JsonError};
//!
//! fn fetch_data() -> StoryweaverResult<String> {
//!     Err(JsonError::new("EOF while parsing an object"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod error;
mod message;
mod provider;
mod server;
mod validation;

pub use builder::{BuilderError, BuilderErrorKind};
pub use error::{StoryweaverError, StoryweaverErrorKind, StoryweaverResult};
pub use message::{ConfigError, JsonError};
pub use provider::{ProviderError, ProviderErrorKind};
pub use server::{ServerError, ServerErrorKind};
pub use validation::{ValidationError, ValidationErrorKind};
