//! Dataset loading for the SeoulScript generation service.
//!
//! The service reads three files at startup:
//!
//! - `structure.json` - genres and their episode blocks (required)
//! - `tropes.json` - the trope catalog (required)
//! - `summaries.txt` - reference summaries separated by blank lines (optional)
//!
//! Each file is looked up under `<root>/data/` first and then directly under
//! `<root>/`. The loaded [`ContentStore`] is immutable and shared by every
//! request.
//!
//! # Example
//!
//! ```no_run
//! use seoulscript_content::ContentStore;
//!
//! let store = ContentStore::load(".")?;
//! println!("{} genres", store.structure().genres().len());
//! # Ok::<(), seoulscript_error::ContentError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod loader;
mod paths;
mod store;

pub use loader::{load_structure, load_summaries, load_tropes, parse_summaries};
pub use paths::{DATA_DIR, DataPaths, STRUCTURE_FILE, SUMMARIES_FILE, TROPES_FILE};
pub use store::ContentStore;
