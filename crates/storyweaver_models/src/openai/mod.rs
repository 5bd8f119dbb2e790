//! OpenAI provider: Responses API for structured text, Images API, and Audio API.

mod client;
mod config;
mod dto;
mod extract;

pub use client::OpenAiClient;
pub use config::{AudioFormat, OpenAiConfig, Verbosity, OPENAI_API_KEY_VAR};
pub use dto::{
    OpenAiImageDatum, OpenAiImageRequest, OpenAiImageRequestBuilder, OpenAiImageResponse,
    OpenAiInputMessage, OpenAiInputMessageBuilder, OpenAiResponsesRequest,
    OpenAiResponsesRequestBuilder, OpenAiRole, OpenAiSpeechRequest, OpenAiSpeechRequestBuilder,
    OpenAiTextConfig, OpenAiTextConfigBuilder, OpenAiTextFormat, OpenAiTextFormatBuilder,
};
pub use extract::{extract_response_text, ContentEntry, EntryText, OutputItem, ResponseBody};
