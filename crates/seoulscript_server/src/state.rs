//! Shared request state.

use seoulscript_content::ContentStore;
use seoulscript_models::LlmGateway;
use seoulscript_narrative::{GenerationOrchestrator, MvpSceneGenerator, ResultWriter};
use std::sync::Arc;

/// State shared by every handler. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct AppState {
    store: Arc<ContentStore>,
    orchestrator: Arc<GenerationOrchestrator>,
    scenes: Arc<MvpSceneGenerator>,
}

impl AppState {
    /// Wire the orchestrators around a loaded store and gateway.
    pub fn new(
        store: Arc<ContentStore>,
        gateway: LlmGateway,
        writer: ResultWriter,
        model: impl Into<String>,
        mvp_model: impl Into<String>,
    ) -> Self {
        let orchestrator =
            GenerationOrchestrator::new(Arc::clone(&store), gateway.clone(), writer, model);
        let scenes = MvpSceneGenerator::new(Arc::clone(&store), gateway, mvp_model);
        Self {
            store,
            orchestrator: Arc::new(orchestrator),
            scenes: Arc::new(scenes),
        }
    }

    /// Loaded datasets.
    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    /// Storyboard and script generation.
    pub fn orchestrator(&self) -> &GenerationOrchestrator {
        &self.orchestrator
    }

    /// Single-scene generation.
    pub fn scenes(&self) -> &MvpSceneGenerator {
        &self.scenes
    }
}
