//! The loaded, immutable dataset bundle.

use crate::{DataPaths, load_structure, load_summaries, load_tropes};
use seoulscript_core::{Structure, TropeCatalog};
use seoulscript_error::ContentResult;
use std::path::PathBuf;
use tracing::{info, instrument};

/// Structure, trope catalog and summaries, loaded once at startup.
#[derive(Debug, Clone, PartialEq, Default, derive_getters::Getters)]
pub struct ContentStore {
    /// Genre and episode structure
    structure: Structure,
    /// Trope catalog document
    tropes: TropeCatalog,
    /// Reference summaries in file order
    summaries: Vec<String>,
}

impl ContentStore {
    /// Build a store from already-loaded data.
    pub fn new(structure: Structure, tropes: TropeCatalog, summaries: Vec<String>) -> Self {
        Self {
            structure,
            tropes,
            summaries,
        }
    }

    /// Load every dataset below `root`, failing on the first error.
    #[instrument(skip_all)]
    pub fn load(root: impl Into<PathBuf>) -> ContentResult<Self> {
        let paths = DataPaths::new(root);

        let structure = load_structure(&paths.structure())?;
        let tropes = load_tropes(&paths.tropes())?;
        let summaries = load_summaries(&paths.summaries())?;

        info!(
            root = %paths.root().display(),
            genres = structure.genres().len(),
            tropes = tropes.len(),
            summaries = summaries.len(),
            "Content loaded"
        );
        Ok(Self::new(structure, tropes, summaries))
    }
}
