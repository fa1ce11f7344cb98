//! Top-level error wrapper types.

use crate::{ConfigError, ContentError};

/// Errors that stop the service from starting.
///
/// Request-time failures stay in their own `GenerationError` and are mapped to
/// HTTP responses instead.
///
/// # Examples
///
/// ```
/// use seoulscript_error::{ContentError, ContentErrorKind, SeoulScriptError};
///
/// let content_err = ContentError::new(ContentErrorKind::MissingFile("tropes.json".into()));
/// let err: SeoulScriptError = content_err.into();
/// assert!(format!("{}", err).contains("tropes.json not found"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum SeoulScriptErrorKind {
    /// Service configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Dataset loading error
    #[from(ContentError)]
    Content(ContentError),
}

/// SeoulScript error with kind discrimination.
///
/// # Examples
///
/// ```
/// use seoulscript_error::{ConfigError, SeoulScriptResult};
///
/// fn might_fail() -> SeoulScriptResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("SeoulScript Error: {}", _0)]
pub struct SeoulScriptError(Box<SeoulScriptErrorKind>);

impl SeoulScriptError {
    /// Create a new error from a kind.
    pub fn new(kind: SeoulScriptErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &SeoulScriptErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to SeoulScriptErrorKind
impl<T> From<T> for SeoulScriptError
where
    T: Into<SeoulScriptErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for SeoulScript operations.
pub type SeoulScriptResult<T> = std::result::Result<T, SeoulScriptError>;
