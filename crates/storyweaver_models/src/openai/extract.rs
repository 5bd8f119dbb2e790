//! Response Extractor: turns a Responses API body into plain text.
//!
//! The body is decoded against the two shapes the API is documented to return.
//! A body matching neither is reported as
//! [`ProviderErrorKind::UnrecognizedResponseShape`], which keeps "the provider
//! said nothing" (an empty string) distinct from "we could not read the answer".

use serde::Deserialize;
use storyweaver_error::{ProviderError, ProviderErrorKind};

/// The text payload of a content entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum EntryText {
    /// `"text": "..."`
    Plain(String),
    /// `"text": {"value": "..."}`
    Nested {
        /// The wrapped text
        value: String,
    },
    /// Anything else; contributes no text
    Other(serde_json::Value),
}

impl EntryText {
    fn as_str(&self) -> &str {
        match self {
            EntryText::Plain(text) => text,
            EntryText::Nested { value } => value,
            EntryText::Other(_) => "",
        }
    }
}

/// One entry of an output item's `content` list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ContentEntry {
    /// An object, possibly carrying `text`
    Entry {
        /// Text payload, if present
        #[serde(default)]
        text: Option<EntryText>,
    },
    /// A non-object entry; contributes no text
    Other(serde_json::Value),
}

/// One item of the `output` list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OutputItem {
    /// An item with a content list, such as an assistant message
    Message {
        /// Content entries, in order
        content: Vec<ContentEntry>,
    },
    /// Items without content (reasoning summaries, tool calls); contribute no text
    Other(serde_json::Value),
}

/// Known Responses API body shapes, in order of preference.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ResponseBody {
    /// Convenience field carrying the full text
    Flat {
        /// Aggregated output text
        output_text: String,
    },
    /// Raw list of output items
    Items {
        /// Output items, in order
        output: Vec<OutputItem>,
    },
}

impl ResponseBody {
    /// Concatenate every text fragment in order.
    pub fn text(&self) -> String {
        match self {
            ResponseBody::Flat { output_text } => output_text.clone(),
            ResponseBody::Items { output } => output
                .iter()
                .filter_map(|item| match item {
                    OutputItem::Message { content } => Some(content),
                    OutputItem::Other(_) => None,
                })
                .flatten()
                .map(|entry| match entry {
                    ContentEntry::Entry { text: Some(text) } => text.as_str(),
                    _ => "",
                })
                .collect(),
        }
    }
}

/// Extract the text of a Responses API body.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use storyweaver_models::extract_response_text;
///
/// assert_eq!(extract_response_text(json!({"output_text": "hello"})).unwrap(), "hello");
/// assert!(extract_response_text(json!({})).is_err());
/// ```
///
/// # Errors
///
/// Returns [`ProviderErrorKind::UnrecognizedResponseShape`] when the body
/// matches no known shape.
#[track_caller]
pub fn extract_response_text(body: serde_json::Value) -> Result<String, ProviderError> {
    serde_json::from_value::<ResponseBody>(body)
        .map(|body| body.text())
        .map_err(|_| ProviderError::new(ProviderErrorKind::UnrecognizedResponseShape))
}
