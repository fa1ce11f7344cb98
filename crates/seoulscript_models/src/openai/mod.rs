//! OpenAI-compatible chat completions driver.

mod client;
mod dto;

pub use client::{DEFAULT_BASE_URL, OpenAiClient};
pub use dto::{ChatCompletionRequest, ChatCompletionResponse, Choice, ChoiceMessage, Message};
