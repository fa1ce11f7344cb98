//! HTTP service for SeoulScript K-drama storyboard and script generation.
//!
//! Routes:
//!
//! | Method | Path | Purpose |
//! |---|---|---|
//! | GET | `/` | Greeting |
//! | GET | `/genres` | Genre names in dataset order |
//! | POST | `/generate` | Storyboard or script for one or all episode blocks |
//! | POST | `/api/generate` | One random scene |

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod app;
mod config;
mod cors;
mod error;
mod observability;
mod state;

pub use api::{GenerateResponse, WELCOME_MESSAGE, create_router};
pub use app::{build_app, build_gateway, build_state};
pub use config::{CONFIG_FILE, ENV_PREFIX, ServiceConfig};
pub use cors::cors_layer;
pub use error::ApiError;
pub use observability::{ObservabilityConfig, init_observability};
pub use state::AppState;
