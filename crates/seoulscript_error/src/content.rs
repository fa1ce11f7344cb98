//! Dataset loading error types.

/// Failures while loading the static datasets at startup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ContentErrorKind {
    /// A required dataset file does not exist
    #[display("{} not found", _0)]
    MissingFile(String),
    /// The file exists but could not be read
    #[display("Failed to read {}: {}", path, message)]
    Read {
        /// Path of the dataset file
        path: String,
        /// Underlying I/O error
        message: String,
    },
    /// The file is not valid JSON
    #[display("Failed to parse {}: {}", path, message)]
    Parse {
        /// Path of the dataset file
        path: String,
        /// Underlying parser error
        message: String,
    },
    /// The structure document has neither `structure.genres` nor `genres`
    #[display("{} must contain 'structure.genres' or 'genres' top-level", _0)]
    InvalidStructure(String),
}

/// Dataset loading error with location tracking.
///
/// # Examples
///
/// ```
/// use seoulscript_error::{ContentError, ContentErrorKind};
///
/// let err = ContentError::new(ContentErrorKind::MissingFile("data/tropes.json".to_string()));
/// assert!(format!("{}", err).contains("tropes.json not found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Content Error: {} at line {} in {}", kind, line, file)]
pub struct ContentError {
    /// The kind of error that occurred
    pub kind: ContentErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ContentError {
    /// Create a new content error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ContentErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for dataset loading.
pub type ContentResult<T> = Result<T, ContentError>;
