//! LLM gateway for the SeoulScript generation service.
//!
//! This crate is the only part of SeoulScript that talks to the network. It
//! provides:
//!
//! - [`LlmDriver`] - the provider seam, one chat completion per call
//! - [`OpenAiClient`] - the OpenAI-compatible production driver
//! - [`RetryPolicy`] - linear backoff between attempts
//! - [`LlmGateway`] - retrying front door used by the orchestrators
//!
//! # Example
//!
//! ```no_run
//! use seoulscript_models::{GenerationParams, LlmGateway, OpenAiClient};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OpenAiClient::new("sk-...", "https://api.openai.com/v1");
//! let gateway = LlmGateway::new(Arc::new(client));
//! let text = gateway
//!     .call_llm("Write a logline.", "gpt-4o-mini", GenerationParams::default())
//!     .await?;
//! println!("{}", text);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod driver;
mod gateway;
mod openai;
mod retry;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use driver::{CompletionRequest, CompletionRequestBuilder, LlmDriver};
pub use gateway::{GenerationParams, LlmGateway};
pub use openai::{
    ChatCompletionRequest, ChatCompletionResponse, Choice, ChoiceMessage, DEFAULT_BASE_URL,
    Message, OpenAiClient,
};
pub use retry::RetryPolicy;
