use super::{ChatCompletionRequest, ChatCompletionResponse, Message};
use crate::{CompletionRequest, LlmDriver};
use async_trait::async_trait;
use seoulscript_error::{GatewayError, GatewayErrorKind, GatewayResult};
use tracing::instrument;

/// Default OpenAI API root.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Client for OpenAI-compatible chat completion APIs.
#[derive(Clone)]
pub struct OpenAiClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl std::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl OpenAiClient {
    /// Create a client for the API rooted at `base_url`.
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        tracing::debug!(base_url = %base_url, "Creating OpenAI client");
        Self {
            api_key: api_key.into(),
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// API root without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a chat completion request
    #[instrument(skip(self, request), fields(model = %request.model))]
    pub async fn chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> GatewayResult<ChatCompletionResponse> {
        let url = format!("{}/chat/completions", self.base_url);
        tracing::debug!("Sending chat completion request to {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Request failed: {}", e);
                GatewayError::new(GatewayErrorKind::Http(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), "Provider returned error");
            let message = if body.is_empty() {
                let reason = status.canonical_reason().unwrap_or("unknown error");
                reason.to_string()
            } else {
                body
            };
            return Err(GatewayError::new(GatewayErrorKind::Api {
                status: status.as_u16(),
                message,
            }));
        }

        let result: ChatCompletionResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse response: {}", e);
            GatewayError::new(GatewayErrorKind::Deserialization(e.to_string()))
        })?;

        tracing::debug!(choices = result.choices.len(), "Chat completion successful");
        Ok(result)
    }
}

#[async_trait]
impl LlmDriver for OpenAiClient {
    #[instrument(skip(self, request), fields(provider = "openai", model = %request.model()))]
    async fn complete(&self, request: &CompletionRequest) -> GatewayResult<Option<String>> {
        let body = ChatCompletionRequest {
            model: request.model().clone(),
            messages: vec![Message::user(request.prompt().as_str())],
            max_tokens: Some(*request.max_tokens()),
            temperature: Some(*request.temperature()),
        };

        let response = self.chat_completion(&body).await?;
        if response.choices.is_empty() {
            return Err(GatewayError::new(GatewayErrorKind::Deserialization(
                "response contained no choices".to_string(),
            )));
        }
        Ok(response.first_content().map(str::to_string))
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }
}
