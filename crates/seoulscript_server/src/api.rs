//! HTTP routes.

use crate::{ApiError, AppState};
use axum::{
    Json, Router,
    extract::State,
    response::IntoResponse,
    routing::{get, post},
};
use seoulscript_core::{EpisodeSection, GenerationRequest, MvpRequest, MvpScene};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::cors::CorsLayer;

/// Greeting returned by `GET /`.
pub const WELCOME_MESSAGE: &str = "Welcome to the SeoulScript AI API";

/// Body of a successful `POST /generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Always `"ok"`
    pub status: String,
    /// Path of the saved results file
    pub file: String,
    /// Generated sections in order
    pub result: Vec<EpisodeSection>,
}

/// Build the service router.
pub fn create_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(read_root))
        .route("/genres", get(list_genres))
        .route("/generate", post(generate))
        .route("/api/generate", post(generate_scene))
        .layer(cors)
        .with_state(state)
}

async fn read_root() -> impl IntoResponse {
    Json(json!({ "message": WELCOME_MESSAGE }))
}

async fn list_genres(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({ "genres": state.store().structure().genre_names() }))
}

async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerationRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let result = state.orchestrator().generate(&request).await?;
    Ok(Json(GenerateResponse {
        status: "ok".to_string(),
        file: result.file.display().to_string(),
        result: result.sections,
    }))
}

async fn generate_scene(
    State(state): State<AppState>,
    Json(request): Json<MvpRequest>,
) -> Result<Json<MvpScene>, ApiError> {
    Ok(Json(state.scenes().generate(&request).await?))
}
