//! Full-series storyboard and script generation.

use crate::{ResultWriter, build_prompt};
use seoulscript_content::ContentStore;
use seoulscript_core::{EpisodeSection, GenerationRequest, GenerationResult, ResolvedEpisode};
use seoulscript_error::{GenerationError, GenerationErrorKind};
use seoulscript_models::{GenerationParams, LlmGateway};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Generates every requested episode block of a genre, one gateway call per
/// block, and saves the results.
///
/// Requests are validated against the content store before any gateway call.
/// Blocks are generated sequentially; the first gateway failure aborts the
/// request and nothing is saved.
#[derive(Debug, Clone, derive_getters::Getters)]
pub struct GenerationOrchestrator {
    /// Shared datasets
    store: Arc<ContentStore>,
    /// LLM gateway
    gateway: LlmGateway,
    /// Result persistence
    writer: ResultWriter,
    /// Model used for every block
    model: String,
    /// Sampling parameters
    params: GenerationParams,
}

impl GenerationOrchestrator {
    /// Create an orchestrator using `model` with default sampling parameters.
    pub fn new(
        store: Arc<ContentStore>,
        gateway: LlmGateway,
        writer: ResultWriter,
        model: impl Into<String>,
    ) -> Self {
        Self {
            store,
            gateway,
            writer,
            model: model.into(),
            params: GenerationParams::default(),
        }
    }

    /// Resolve the episode blocks a request asks for, in generation order.
    ///
    /// # Errors
    ///
    /// Client errors for an unknown genre, a genre without episodes, or an
    /// unknown episode block.
    pub fn plan(
        &self,
        request: &GenerationRequest,
    ) -> Result<Vec<ResolvedEpisode>, GenerationError> {
        let name = request.genre();
        let Some(genre) = self.store.structure().genre(name) else {
            return Err(GenerationError::new(GenerationErrorKind::UnknownGenre(name.into())));
        };

        if genre.episodes().is_empty() {
            return Err(GenerationError::new(GenerationErrorKind::NoEpisodes(name.into())));
        }

        let keys = match request.episode() {
            Some(episode) => vec![episode],
            None => genre.ordered_keys(),
        };

        let mut episodes = Vec::with_capacity(keys.len());
        for key in keys {
            let Some(episode) = genre.resolve(key) else {
                return Err(GenerationError::new(GenerationErrorKind::UnknownEpisode(key.into())));
            };
            episodes.push(episode);
        }
        Ok(episodes)
    }

    /// Generate and save the requested blocks.
    #[instrument(skip(self, request), fields(genre = request.genre(), mode = %request.mode()))]
    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, GenerationError> {
        let episodes = self.plan(request)?;

        let summaries = self.store.summaries();
        let wants_examples = request.wants_examples() && !summaries.is_empty();
        let examples = wants_examples.then_some(summaries.as_slice());

        info!(
            blocks = episodes.len(),
            examples = examples.is_some(),
            "Generating episode blocks"
        );

        let mut sections = Vec::with_capacity(episodes.len());
        for episode in episodes {
            let prompt = build_prompt(
                request.mode(),
                request.genre(),
                &episode.key,
                &episode.description,
                &episode.tropes,
                examples,
            );
            debug!(episode = %episode.key, prompt_len = prompt.len(), "Built prompt");

            let generated = self
                .gateway
                .call_llm(&prompt, &self.model, self.params)
                .await
                .map_err(|e| {
                    warn!(episode = %episode.key, error = %e.kind, "Aborting generation");
                    GenerationError::new(GenerationErrorKind::GatewayFailure {
                        episode: episode.key.clone(),
                        message: e.kind.to_string(),
                    })
                })?;

            sections.push(EpisodeSection {
                episode: episode.key,
                description: episode.description,
                tropes: episode.tropes,
                generated,
            });
        }

        let file = self
            .writer
            .write(request.genre(), request.mode(), &sections)
            .await
            .map_err(|e| GenerationError::new(GenerationErrorKind::Persist(e.kind.to_string())))?;

        Ok(GenerationResult { file, sections })
    }
}
