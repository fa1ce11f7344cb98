//! Generation results.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Title used when the model does not provide one.
pub const DEFAULT_SCENE_TITLE: &str = "SeoulScript Scene";

/// Generated content for one episode block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeSection {
    /// Episode-range key
    pub episode: String,
    /// Episode brief from the structure dataset
    pub description: String,
    /// Tropes the prompt asked for
    pub tropes: Vec<String>,
    /// Trimmed model output
    pub generated: String,
}

/// Outcome of a storyboard/script generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Path of the persisted results file
    pub file: PathBuf,
    /// Sections in generation order
    pub sections: Vec<EpisodeSection>,
}

/// A single generated scene returned by the MVP endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MvpScene {
    /// Scene title
    pub title: String,
    /// Genre echoed from the request
    pub genre: String,
    /// Directing notes, possibly empty
    pub director_notes: Vec<String>,
    /// Scene text
    pub scene_script: String,
}
