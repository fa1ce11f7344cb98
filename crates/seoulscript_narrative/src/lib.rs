//! Prompt construction and generation orchestration for SeoulScript.
//!
//! - [`build_prompt`] / [`build_mvp_prompt`] turn story metadata into prompts
//! - [`GenerationOrchestrator`] generates every requested episode block of a
//!   genre in order and saves the results with [`ResultWriter`]
//! - [`MvpSceneGenerator`] produces one random scene for the MVP endpoint

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod mvp;
mod orchestrator;
mod output;
mod prompt;

pub use mvp::{MvpSceneGenerator, RawFallback, ScenePicks, StructuredScene, parse_scene};
pub use orchestrator::GenerationOrchestrator;
pub use output::ResultWriter;
pub use prompt::{SCRIPT_TEMPLATE, STORYBOARD_TEMPLATE, build_mvp_prompt, build_prompt};
