//! Random single-scene generation.

use crate::build_mvp_prompt;
use rand::Rng;
use rand::seq::SliceRandom;
use seoulscript_content::ContentStore;
use seoulscript_core::{DEFAULT_SCENE_TITLE, MvpRequest, MvpScene, TropeCatalog};
use seoulscript_error::{GenerationError, GenerationErrorKind};
use seoulscript_models::{GenerationParams, LlmGateway};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Random inputs for one scene prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenePicks {
    /// Description of a random episode block
    pub structure: String,
    /// Name of a random trope, empty if none
    pub trope: String,
    /// A random reference summary, empty if none
    pub summary: String,
}

/// Scene fields recovered from a JSON model response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuredScene {
    /// Scene title
    pub title: String,
    /// Directing notes
    pub director_notes: Vec<String>,
    /// Scene text
    pub scene_script: String,
}

/// A model response that was not a JSON object, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFallback(pub String);

impl StructuredScene {
    /// Attach the requested genre.
    pub fn into_scene(self, genre: impl Into<String>) -> MvpScene {
        MvpScene {
            title: self.title,
            genre: genre.into(),
            director_notes: self.director_notes,
            scene_script: self.scene_script,
        }
    }
}

impl RawFallback {
    /// Wrap the raw text in a default-titled scene.
    pub fn into_scene(self, genre: impl Into<String>) -> MvpScene {
        MvpScene {
            title: DEFAULT_SCENE_TITLE.to_string(),
            genre: genre.into(),
            director_notes: Vec::new(),
            scene_script: self.0,
        }
    }
}

/// Content between a leading ```` ``` ```` fence line and the closing fence.
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = rest.find('\n').map_or("", |newline| &rest[newline + 1..]);
    body.rfind("```").map_or(body, |end| &body[..end]).trim()
}

fn string_field(object: &serde_json::Map<String, Value>, key: &str) -> Option<String> {
    object.get(key).and_then(Value::as_str).map(String::from)
}

/// Interpret a model response for the MVP endpoint.
///
/// A JSON object (optionally inside a Markdown code fence) yields its
/// `title`, `director_notes` and `scene_script` (or legacy `script`), with
/// defaults for anything missing. Any other response is a [`RawFallback`].
///
/// # Examples
///
/// ```
/// use seoulscript_narrative::{RawFallback, parse_scene};
///
/// let scene = parse_scene(r#"{"title": "T", "director_notes": ["n1"], "script": "S"}"#).unwrap();
/// assert_eq!(scene.scene_script, "S");
///
/// assert_eq!(
///     parse_scene("Just a plain sentence."),
///     Err(RawFallback("Just a plain sentence.".to_string()))
/// );
/// ```
pub fn parse_scene(raw: &str) -> Result<StructuredScene, RawFallback> {
    let Ok(Value::Object(object)) = serde_json::from_str::<Value>(strip_code_fence(raw)) else {
        return Err(RawFallback(raw.to_string()));
    };

    let title = string_field(&object, "title").unwrap_or_else(|| DEFAULT_SCENE_TITLE.to_string());
    let director_notes = match object.get("director_notes") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(String::from)
            .collect(),
        Some(Value::String(note)) => vec![note.clone()],
        _ => Vec::new(),
    };
    let scene_script = string_field(&object, "scene_script")
        .or_else(|| string_field(&object, "script"))
        .unwrap_or_else(|| raw.to_string());

    Ok(StructuredScene {
        title,
        director_notes,
        scene_script,
    })
}

/// Generates one scene from a random episode block, trope and summary.
#[derive(Debug, Clone, derive_getters::Getters)]
pub struct MvpSceneGenerator {
    /// Shared datasets
    store: Arc<ContentStore>,
    /// LLM gateway
    gateway: LlmGateway,
    /// Model used for scenes
    model: String,
    /// Sampling parameters
    params: GenerationParams,
}

impl MvpSceneGenerator {
    /// Create a generator using `model` with default sampling parameters.
    pub fn new(store: Arc<ContentStore>, gateway: LlmGateway, model: impl Into<String>) -> Self {
        Self {
            store,
            gateway,
            model: model.into(),
            params: GenerationParams::default(),
        }
    }

    /// Draw the prompt inputs for `genre`.
    ///
    /// # Errors
    ///
    /// Client errors for an unknown genre or a genre without episodes.
    pub fn pick<R: Rng + ?Sized>(
        &self,
        genre: &str,
        rng: &mut R,
    ) -> Result<ScenePicks, GenerationError> {
        let Some(entry) = self.store.structure().genre(genre) else {
            return Err(GenerationError::new(GenerationErrorKind::UnknownGenre(genre.into())));
        };

        let Some(block) = entry.episodes().choose(rng) else {
            return Err(GenerationError::new(GenerationErrorKind::NoEpisodes(genre.into())));
        };

        let trope = self
            .store
            .tropes()
            .entries()
            .choose(rng)
            .map(TropeCatalog::entry_name)
            .unwrap_or_default();

        let summary = self
            .store
            .summaries()
            .choose(rng)
            .map(String::as_str)
            .unwrap_or_default();

        Ok(ScenePicks {
            structure: block.entry().description().to_string(),
            trope: trope.to_string(),
            summary: summary.to_string(),
        })
    }

    /// Generate a scene using the thread-local RNG.
    pub async fn generate(&self, request: &MvpRequest) -> Result<MvpScene, GenerationError> {
        let picks = {
            let mut rng = rand::thread_rng();
            self.pick(&request.genre, &mut rng)?
        };
        self.generate_from(&request.genre, picks).await
    }

    /// Generate a scene drawing inputs from `rng`.
    pub async fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        request: &MvpRequest,
        rng: &mut R,
    ) -> Result<MvpScene, GenerationError> {
        let picks = self.pick(&request.genre, rng)?;
        self.generate_from(&request.genre, picks).await
    }

    #[instrument(skip(self, picks), fields(trope = %picks.trope))]
    async fn generate_from(
        &self,
        genre: &str,
        picks: ScenePicks,
    ) -> Result<MvpScene, GenerationError> {
        let prompt = build_mvp_prompt(genre, &picks.structure, &picks.trope, &picks.summary);

        let raw = self
            .gateway
            .call_llm(&prompt, &self.model, self.params)
            .await
            .map_err(|e| {
                warn!(error = %e.kind, "Scene generation failed");
                GenerationError::new(GenerationErrorKind::SceneFailure(e.kind.to_string()))
            })?;

        Ok(match parse_scene(&raw) {
            Ok(scene) => scene.into_scene(genre),
            Err(fallback) => {
                debug!("Model response was not a JSON object, returning raw text");
                fallback.into_scene(genre)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_falls_back() {
        let scene = match parse_scene("Just a plain sentence.") {
            Ok(_) => panic!("expected fallback"),
            Err(fallback) => fallback.into_scene("romance"),
        };
        assert_eq!(
            scene,
            MvpScene {
                title: "SeoulScript Scene".to_string(),
                genre: "romance".to_string(),
                director_notes: vec![],
                scene_script: "Just a plain sentence.".to_string(),
            }
        );
    }

    #[test]
    fn test_legacy_script_key() {
        let scene = parse_scene(r#"{"title":"T","director_notes":["n1"],"script":"S"}"#).unwrap();
        assert_eq!(scene.title, "T");
        assert_eq!(scene.director_notes, vec!["n1"]);
        assert_eq!(scene.scene_script, "S");
    }

    #[test]
    fn test_scene_script_wins_over_script() {
        let scene = parse_scene(r#"{"scene_script": "new", "script": "old"}"#).unwrap();
        assert_eq!(scene.scene_script, "new");
        assert_eq!(scene.title, DEFAULT_SCENE_TITLE);
    }

    #[test]
    fn test_object_without_script_keeps_raw_text() {
        let raw = r#"{"title": "Only a title"}"#;
        let scene = parse_scene(raw).unwrap();
        assert_eq!(scene.title, "Only a title");
        assert_eq!(scene.scene_script, raw);
    }

    #[test]
    fn test_non_object_json_falls_back() {
        assert_eq!(
            parse_scene("[1, 2]"),
            Err(RawFallback("[1, 2]".to_string()))
        );
        assert_eq!(
            parse_scene("\"text\""),
            Err(RawFallback("\"text\"".to_string()))
        );
    }

    #[test]
    fn test_director_notes_shapes() {
        let single = parse_scene(r#"{"director_notes": "Rain, neon, silence"}"#).unwrap();
        assert_eq!(single.director_notes, vec!["Rain, neon, silence"]);

        let mixed = parse_scene(r#"{"director_notes": ["slow push-in", 3, null, "cut"]}"#).unwrap();
        assert_eq!(mixed.director_notes, vec!["slow push-in", "cut"]);

        let wrong = parse_scene(r#"{"director_notes": {"tone": "warm"}}"#).unwrap();
        assert!(wrong.director_notes.is_empty());
    }

    #[test]
    fn test_non_string_title_uses_default() {
        let scene = parse_scene(r#"{"title": 12, "scene_script": "S"}"#).unwrap();
        assert_eq!(scene.title, DEFAULT_SCENE_TITLE);
    }

    #[test]
    fn test_fenced_json_is_parsed() {
        let raw = "```json\n{\"title\": \"Rooftop\", \"scene_script\": \"EXT. ROOF\"}\n```";
        let scene = parse_scene(raw).unwrap();
        assert_eq!(scene.title, "Rooftop");
        assert_eq!(scene.scene_script, "EXT. ROOF");
    }

    #[test]
    fn test_strip_code_fence() {
        assert_eq!(strip_code_fence("  {\"a\": 1} "), "{\"a\": 1}");
        assert_eq!(strip_code_fence("```\n{}\n```"), "{}");
        assert_eq!(strip_code_fence("```json\n{}"), "{}");
    }
}
