//! Request types accepted by the generation endpoints.

use serde::{Deserialize, Serialize};

/// Output style of a generation request.
///
/// Anything other than `"script"` selects storyboard output.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Mode {
    /// Visual storyboard beats
    #[default]
    #[display("storyboard")]
    Storyboard,
    /// Screenplay-format scenes
    #[display("script")]
    Script,
}

impl From<&str> for Mode {
    fn from(value: &str) -> Self {
        match value {
            "script" => Mode::Script,
            _ => Mode::Storyboard,
        }
    }
}

impl From<String> for Mode {
    fn from(value: String) -> Self {
        Mode::from(value.as_str())
    }
}

/// Body of `POST /generate`.
///
/// # Examples
///
/// ```
/// use seoulscript_core::{GenerationRequest, Mode};
///
/// let request: GenerationRequest =
///     serde_json::from_str(r#"{"genre": "office_romance", "mode": "script"}"#).unwrap();
/// assert_eq!(request.mode(), Mode::Script);
/// assert_eq!(request.episode(), None);
/// assert!(!request.wants_examples());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    genre: String,
    #[serde(default)]
    mode: Option<Mode>,
    #[serde(default)]
    episode: Option<String>,
    #[serde(default)]
    examples: Option<bool>,
}

impl GenerationRequest {
    /// Request full-series storyboard generation for `genre`.
    pub fn new(genre: impl Into<String>) -> Self {
        Self {
            genre: genre.into(),
            mode: None,
            episode: None,
            examples: None,
        }
    }

    /// Set the output mode.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Restrict generation to a single episode block.
    pub fn with_episode(mut self, episode: impl Into<String>) -> Self {
        self.episode = Some(episode.into());
        self
    }

    /// Toggle inclusion of reference summaries.
    pub fn with_examples(mut self, examples: bool) -> Self {
        self.examples = Some(examples);
        self
    }

    /// Requested genre.
    pub fn genre(&self) -> &str {
        &self.genre
    }

    /// Output mode, storyboard when unset.
    pub fn mode(&self) -> Mode {
        self.mode.unwrap_or_default()
    }

    /// Requested episode block; an empty string means "all blocks".
    pub fn episode(&self) -> Option<&str> {
        self.episode.as_deref().filter(|key| !key.is_empty())
    }

    /// Whether reference summaries should be included.
    pub fn wants_examples(&self) -> bool {
        self.examples.unwrap_or(false)
    }
}

/// Body of `POST /api/generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MvpRequest {
    /// Requested genre
    pub genre: String,
}
