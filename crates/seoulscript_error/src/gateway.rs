//! LLM gateway error types.

/// Failure conditions of a chat completion call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GatewayErrorKind {
    /// No API credential was configured, so no client exists
    #[display("OPENAI_API_KEY not set. Cannot call LLM.")]
    MissingApiKey,
    /// The request never produced an HTTP response
    #[display("HTTP request failed: {}", _0)]
    Http(String),
    /// The provider answered with a non-success status
    #[display("API error (HTTP {}): {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or reason phrase
        message: String,
    },
    /// The response body could not be decoded
    #[display("Failed to deserialize response: {}", _0)]
    Deserialization(String),
}

/// Gateway error with location tracking.
///
/// # Examples
///
/// ```
/// use seoulscript_error::{GatewayError, GatewayErrorKind};
///
/// let err = GatewayError::new(GatewayErrorKind::Api {
///     status: 503,
///     message: "overloaded".to_string(),
/// });
/// assert!(format!("{}", err).contains("503"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Gateway Error: {} at line {} in {}", kind, line, file)]
pub struct GatewayError {
    /// The kind of error that occurred
    pub kind: GatewayErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GatewayError {
    /// Create a new gateway error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GatewayErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for gateway calls.
pub type GatewayResult<T> = Result<T, GatewayError>;
