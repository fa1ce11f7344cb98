//! HTTP error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use seoulscript_error::GenerationError;
use serde_json::json;

/// A failed generation request rendered as `{"detail": "..."}`.
///
/// Caller mistakes map to 400, everything else to 500.
#[derive(Debug, derive_more::Display, derive_more::From)]
#[display("{}", _0)]
pub struct ApiError(GenerationError);

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        if self.0.kind.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = self.0.kind.to_string();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), %detail, "Request failed");
        } else {
            tracing::warn!(status = status.as_u16(), %detail, "Request rejected");
        }
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
