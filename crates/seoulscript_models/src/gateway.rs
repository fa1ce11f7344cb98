//! Retrying front door to the LLM provider.

use crate::{CompletionRequest, LlmDriver, RetryPolicy};
use seoulscript_error::{GatewayError, GatewayErrorKind, GatewayResult};
use std::sync::Arc;
use tokio_retry2::{Retry, RetryError};
use tracing::{debug, instrument, warn};

/// Sampling parameters for a completion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    /// Sampling temperature
    pub temperature: f32,
    /// Completion token ceiling
    pub max_tokens: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: 0.9,
            max_tokens: 900,
        }
    }
}

/// Sends prompts to the configured driver, retrying failures.
///
/// A gateway without a driver represents a service started without an API
/// key: every call fails with [`GatewayErrorKind::MissingApiKey`] and no
/// attempt is made.
#[derive(Clone)]
pub struct LlmGateway {
    driver: Option<Arc<dyn LlmDriver>>,
    policy: RetryPolicy,
}

impl std::fmt::Debug for LlmGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmGateway")
            .field("provider", &self.driver.as_ref().map(|d| d.provider_name()))
            .field("policy", &self.policy)
            .finish()
    }
}

impl LlmGateway {
    /// Gateway over `driver` with the default retry policy.
    pub fn new(driver: Arc<dyn LlmDriver>) -> Self {
        Self {
            driver: Some(driver),
            policy: RetryPolicy::default(),
        }
    }

    /// Gateway with no credentials.
    pub fn unconfigured() -> Self {
        Self {
            driver: None,
            policy: RetryPolicy::default(),
        }
    }

    /// Replace the retry policy.
    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Whether a driver is configured.
    pub fn is_configured(&self) -> bool {
        self.driver.is_some()
    }

    /// Retry policy used by [`call_llm`](Self::call_llm).
    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Send `prompt` to `model` using the gateway's retry policy.
    ///
    /// Returns the trimmed completion, or an empty string when the provider
    /// answered without content.
    pub async fn call_llm(
        &self,
        prompt: &str,
        model: &str,
        params: GenerationParams,
    ) -> GatewayResult<String> {
        self.call_with_policy(prompt, model, params, self.policy).await
    }

    /// Send `prompt` to `model` with an explicit retry policy.
    ///
    /// # Errors
    ///
    /// [`GatewayErrorKind::MissingApiKey`] without a driver; otherwise the
    /// last attempt's error once `policy.max_attempts()` attempts have failed.
    #[instrument(
        skip(self, prompt, params, policy),
        fields(prompt_len = prompt.len(), max_attempts = *policy.max_attempts())
    )]
    pub async fn call_with_policy(
        &self,
        prompt: &str,
        model: &str,
        params: GenerationParams,
        policy: RetryPolicy,
    ) -> GatewayResult<String> {
        let driver = self
            .driver
            .as_ref()
            .ok_or_else(|| GatewayError::new(GatewayErrorKind::MissingApiKey))?;

        let request = CompletionRequest::new(prompt, model, params.temperature, params.max_tokens);

        let max_attempts = *policy.max_attempts();
        let mut attempt = 0u32;
        let content = Retry::spawn(policy.delays(), || {
            attempt += 1;
            let current = attempt;
            let driver = Arc::clone(driver);
            let request = request.clone();
            async move {
                match driver.complete(&request).await {
                    Ok(content) => Ok(content),
                    Err(e) => {
                        warn!(
                            attempt = current,
                            max_attempts,
                            provider = driver.provider_name(),
                            error = %e.kind,
                            "LLM call failed"
                        );
                        Err(RetryError::Transient {
                            err: e,
                            retry_after: None,
                        })
                    }
                }
            }
        })
        .await?;

        let text = content.unwrap_or_default().trim().to_string();
        debug!(attempts = attempt, chars = text.len(), "LLM call succeeded");
        Ok(text)
    }
}
