//! Result persistence.

use seoulscript_core::{EpisodeSection, Mode};
use seoulscript_error::{StorageError, StorageErrorKind};
use std::path::{Path, PathBuf};

/// Writes generation results as pretty-printed JSON files.
///
/// Files are named `{genre}_{mode}_{unix_seconds}.json`. Two requests for the
/// same genre and mode within one second write the same path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultWriter {
    output_dir: PathBuf,
}

impl ResultWriter {
    /// Create a writer targeting `output_dir`. The directory is created on
    /// first write.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Output directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// File name for a result set.
    ///
    /// # Examples
    ///
    /// ```
    /// use seoulscript_core::Mode;
    /// use seoulscript_narrative::ResultWriter;
    ///
    /// assert_eq!(
    ///     ResultWriter::file_name("office_romance", Mode::Script, 1_700_000_000),
    ///     "office_romance_script_1700000000.json"
    /// );
    /// ```
    pub fn file_name(genre: &str, mode: Mode, timestamp: i64) -> String {
        format!("{}_{}_{}.json", genre, mode, timestamp)
    }

    /// Save `sections` using the current time.
    pub async fn write(
        &self,
        genre: &str,
        mode: Mode,
        sections: &[EpisodeSection],
    ) -> Result<PathBuf, StorageError> {
        let timestamp = chrono::Utc::now().timestamp();
        self.write_at(genre, mode, sections, timestamp).await
    }

    /// Save `sections` under an explicit timestamp.
    #[tracing::instrument(
        skip(self, sections),
        fields(dir = %self.output_dir.display(), sections = sections.len())
    )]
    pub async fn write_at(
        &self,
        genre: &str,
        mode: Mode,
        sections: &[EpisodeSection],
        timestamp: i64,
    ) -> Result<PathBuf, StorageError> {
        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| {
                let message = format!("{}: {}", self.output_dir.display(), e);
                StorageError::new(StorageErrorKind::DirectoryCreation(message))
            })?;

        let json = serde_json::to_string_pretty(sections)
            .map_err(|e| StorageError::new(StorageErrorKind::Serialization(e.to_string())))?;

        let file_name = Self::file_name(genre, mode, timestamp);
        let path = self.output_dir.join(file_name);
        tokio::fs::write(&path, json).await.map_err(|e| {
            let message = format!("{}: {}", path.display(), e);
            StorageError::new(StorageErrorKind::FileWrite(message))
        })?;

        tracing::info!(path = %path.display(), "Saved generation results");
        Ok(path)
    }
}
