//! Request-level generation error types.

/// Failure conditions of a generation request.
///
/// The first three variants are caller mistakes and are detected before any
/// network call is made.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GenerationErrorKind {
    /// The requested genre is not in the structure dataset
    #[display("Genre '{}' not found", _0)]
    UnknownGenre(String),
    /// The genre exists but defines no episode blocks
    #[display("No episodes defined for genre {}", _0)]
    NoEpisodes(String),
    /// The requested episode block does not exist in the genre
    #[display("Episode block {} not found", _0)]
    UnknownEpisode(String),
    /// The gateway failed after exhausting its retries
    #[display("LLM call failed for episode block {}: {}", episode, message)]
    GatewayFailure {
        /// Episode block being generated
        episode: String,
        /// Gateway error description
        message: String,
    },
    /// The gateway failed while generating a single scene
    #[display("LLM call failed: {}", _0)]
    SceneFailure(String),
    /// Generated results could not be saved
    #[display("Failed to persist results: {}", _0)]
    Persist(String),
}

impl GenerationErrorKind {
    /// Whether the caller caused this error (maps to HTTP 400).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            GenerationErrorKind::UnknownGenre(_)
                | GenerationErrorKind::NoEpisodes(_)
                | GenerationErrorKind::UnknownEpisode(_)
        )
    }
}

/// Generation error with location tracking.
///
/// # Examples
///
/// ```
/// use seoulscript_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::UnknownGenre("noir".to_string()));
/// assert!(err.kind.is_client_error());
/// assert_eq!(err.kind.to_string(), "Genre 'noir' not found");
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The kind of error that occurred
    pub kind: GenerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new generation error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
