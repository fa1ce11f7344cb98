//! Dataset file resolution.

use std::path::{Path, PathBuf};

/// Subdirectory searched before the application root.
pub const DATA_DIR: &str = "data";
/// Genre and episode structure.
pub const STRUCTURE_FILE: &str = "structure.json";
/// Trope catalog.
pub const TROPES_FILE: &str = "tropes.json";
/// Reference summaries.
pub const SUMMARIES_FILE: &str = "summaries.txt";

/// Locates dataset files below an application root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    root: PathBuf,
}

impl DataPaths {
    /// Create a resolver for `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Application root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of `filename`, preferring `<root>/data/<filename>` when it exists.
    ///
    /// The returned path may not exist; loaders report that.
    pub fn resolve(&self, filename: &str) -> PathBuf {
        let preferred = self.root.join(DATA_DIR).join(filename);
        if preferred.exists() {
            preferred
        } else {
            self.root.join(filename)
        }
    }

    /// Resolved `structure.json`.
    pub fn structure(&self) -> PathBuf {
        self.resolve(STRUCTURE_FILE)
    }

    /// Resolved `tropes.json`.
    pub fn tropes(&self) -> PathBuf {
        self.resolve(TROPES_FILE)
    }

    /// Resolved `summaries.txt`.
    pub fn summaries(&self) -> PathBuf {
        self.resolve(SUMMARIES_FILE)
    }
}
