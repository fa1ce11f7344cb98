//! The provider seam.

use async_trait::async_trait;
use seoulscript_error::GatewayResult;

/// A single chat completion call.
///
/// # Examples
///
/// ```
/// use seoulscript_models::CompletionRequest;
///
/// let request = CompletionRequest::builder()
///     .prompt("Write a logline.")
///     .model("gpt-4o-mini")
///     .temperature(0.9f32)
///     .max_tokens(900u32)
///     .build()
///     .unwrap();
/// assert_eq!(request.model(), "gpt-4o-mini");
/// ```
#[derive(Debug, Clone, PartialEq, derive_builder::Builder, derive_getters::Getters)]
#[builder(setter(into))]
pub struct CompletionRequest {
    /// Entire prompt, sent as one user message
    prompt: String,
    /// Provider model identifier
    model: String,
    /// Sampling temperature
    temperature: f32,
    /// Completion token ceiling
    max_tokens: u32,
}

impl CompletionRequest {
    /// Create a request.
    pub fn new(
        prompt: impl Into<String>,
        model: impl Into<String>,
        temperature: f32,
        max_tokens: u32,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            model: model.into(),
            temperature,
            max_tokens,
        }
    }

    /// Create a builder.
    pub fn builder() -> CompletionRequestBuilder {
        CompletionRequestBuilder::default()
    }
}

/// An LLM provider able to answer a chat completion.
///
/// Implementations make exactly one attempt per call; retrying belongs to
/// [`LlmGateway`](crate::LlmGateway).
#[async_trait]
pub trait LlmDriver: Send + Sync {
    /// Run one completion, returning the first choice's content.
    ///
    /// `Ok(None)` means the provider answered without content.
    async fn complete(&self, request: &CompletionRequest) -> GatewayResult<Option<String>>;

    /// Provider name for logging.
    fn provider_name(&self) -> &'static str;
}
