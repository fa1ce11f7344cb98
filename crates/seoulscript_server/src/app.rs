//! Startup wiring.

use crate::{AppState, ServiceConfig, cors_layer, create_router};
use axum::Router;
use seoulscript_content::ContentStore;
use seoulscript_error::SeoulScriptResult;
use seoulscript_models::{LlmGateway, OpenAiClient};
use seoulscript_narrative::ResultWriter;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Gateway for `config`, unconfigured when no API key is set.
pub fn build_gateway(config: &ServiceConfig) -> LlmGateway {
    match &config.openai_api_key {
        Some(key) => {
            let client = OpenAiClient::new(key.as_str(), config.openai_base_url.as_str());
            LlmGateway::new(Arc::new(client))
        }
        None => {
            warn!(
                "OPENAI_API_KEY not set. The server will run but LLM calls will fail until you set the key."
            );
            LlmGateway::unconfigured()
        }
    }
}

/// Load the datasets and wire the handlers' shared state.
///
/// # Errors
///
/// Any dataset loading failure; the service must not start without its data.
#[instrument(skip_all, fields(root = %config.app_root.display()))]
pub fn build_state(config: &ServiceConfig, gateway: LlmGateway) -> SeoulScriptResult<AppState> {
    let store = Arc::new(ContentStore::load(&config.app_root)?);
    info!(
        genres = store.structure().genres().len(),
        output_dir = %config.output_dir().display(),
        "Application state ready"
    );
    Ok(AppState::new(
        store,
        gateway,
        ResultWriter::new(config.output_dir()),
        config.openai_model.as_str(),
        config.openai_mvp_model.as_str(),
    ))
}

/// Build the complete router for `config`.
pub fn build_app(config: &ServiceConfig) -> SeoulScriptResult<Router> {
    let state = build_state(config, build_gateway(config))?;
    Ok(create_router(state, cors_layer(&config.cors_origins)))
}
