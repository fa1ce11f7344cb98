//! Core data types for the SeoulScript generation service.
//!
//! This crate holds the story metadata model (genres, episode blocks, tropes)
//! and the request/response types shared by the orchestrators and the HTTP
//! surface. Nothing here performs I/O.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod ordered;
mod request;
mod result;
mod structure;
mod trope;

pub use request::{GenerationRequest, Mode, MvpRequest};
pub use result::{DEFAULT_SCENE_TITLE, EpisodeSection, GenerationResult, MvpScene};
pub use structure::{EpisodeBlock, EpisodeEntry, Genre, ResolvedEpisode, Structure, episode_start};
pub use trope::TropeCatalog;
