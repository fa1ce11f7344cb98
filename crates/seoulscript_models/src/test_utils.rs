//! Scripted driver for exercising the gateway and its callers without a network.

use crate::{CompletionRequest, LlmDriver};
use async_trait::async_trait;
use seoulscript_error::{GatewayError, GatewayErrorKind, GatewayResult};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio::time::Instant;

/// One scripted driver answer.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Successful completion with content
    Text(String),
    /// Successful completion without content
    Empty,
    /// Failed attempt
    Error(GatewayErrorKind),
}

/// Driver replaying a sequence of responses, then repeating a fallback.
#[derive(Debug)]
pub struct MockDriver {
    queue: Mutex<VecDeque<MockResponse>>,
    fallback: MockResponse,
    calls: AtomicUsize,
    requests: Mutex<Vec<CompletionRequest>>,
    call_times: Mutex<Vec<Instant>>,
}

fn locked<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockDriver {
    /// Always answer with `text`.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self::with_sequence(Vec::new(), MockResponse::Text(text.into()))
    }

    /// Always fail.
    pub fn new_failing() -> Self {
        Self::with_sequence(
            Vec::new(),
            MockResponse::Error(GatewayErrorKind::Api {
                status: 503,
                message: "overloaded".to_string(),
            }),
        )
    }

    /// Replay `responses`, then repeat `fallback`.
    pub fn with_sequence(responses: Vec<MockResponse>, fallback: MockResponse) -> Self {
        Self {
            queue: Mutex::new(responses.into()),
            fallback,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
            call_times: Mutex::new(Vec::new()),
        }
    }

    /// Number of completions attempted.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Requests received, in order.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        locked(&self.requests).clone()
    }

    /// Instant of each attempt on the tokio clock, in order.
    pub fn call_times(&self) -> Vec<Instant> {
        locked(&self.call_times).clone()
    }
}

#[async_trait]
impl LlmDriver for MockDriver {
    async fn complete(&self, request: &CompletionRequest) -> GatewayResult<Option<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        locked(&self.call_times).push(Instant::now());
        locked(&self.requests).push(request.clone());

        let next = locked(&self.queue)
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone());

        match next {
            MockResponse::Text(text) => Ok(Some(text)),
            MockResponse::Empty => Ok(None),
            MockResponse::Error(kind) => Err(GatewayError::new(kind)),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}
