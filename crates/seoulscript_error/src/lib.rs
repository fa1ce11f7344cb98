//! Error types for the SeoulScript service.
//!
//! This crate provides the error types shared by every SeoulScript crate.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use seoulscript_error::{ContentError, ContentErrorKind, SeoulScriptResult};
//!
//! fn load() -> SeoulScriptResult<String> {
//!     Err(ContentError::new(ContentErrorKind::MissingFile("structure.json".into())))?
//! }
//!
//! match load() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod content;
mod error;
mod gateway;
mod generation;
mod storage;

pub use config::ConfigError;
pub use content::{ContentError, ContentErrorKind, ContentResult};
pub use error::{SeoulScriptError, SeoulScriptErrorKind, SeoulScriptResult};
pub use gateway::{GatewayError, GatewayErrorKind, GatewayResult};
pub use generation::{GenerationError, GenerationErrorKind};
pub use storage::{StorageError, StorageErrorKind};
