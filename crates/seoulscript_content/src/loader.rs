//! Dataset file loaders.

use seoulscript_core::{Structure, TropeCatalog};
use seoulscript_error::{ContentError, ContentErrorKind, ContentResult};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, instrument};

#[derive(Deserialize)]
struct WrappedStructure {
    structure: Structure,
}

fn read_required(path: &Path) -> ContentResult<String> {
    if !path.exists() {
        return Err(ContentError::new(ContentErrorKind::MissingFile(path.display().to_string())));
    }
    std::fs::read_to_string(path).map_err(|e| {
        ContentError::new(ContentErrorKind::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    })
}

fn parse_error(path: &Path, err: serde_json::Error) -> ContentError {
    ContentError::new(ContentErrorKind::Parse {
        path: path.display().to_string(),
        message: err.to_string(),
    })
}

/// Load the genre structure.
///
/// Accepts either `{"structure": {"genres": ...}}` or `{"genres": ...}`.
/// Genre and episode order follows the file.
///
/// # Errors
///
/// - [`ContentErrorKind::MissingFile`] if the file does not exist
/// - [`ContentErrorKind::Parse`] if it is not valid JSON or genres are malformed
/// - [`ContentErrorKind::InvalidStructure`] if neither top-level shape is present
#[instrument(skip(path), fields(path = %path.display()))]
pub fn load_structure(path: &Path) -> ContentResult<Structure> {
    let text = read_required(path)?;
    let document: Value = serde_json::from_str(&text).map_err(|e| parse_error(path, e))?;

    // Shape is detected on the parsed value, but the typed structure is read
    // from the text so genre and episode order survive.
    let structure = if document
        .get("structure")
        .is_some_and(|inner| inner.get("genres").is_some())
    {
        serde_json::from_str::<WrappedStructure>(&text)
            .map_err(|e| parse_error(path, e))?
            .structure
    } else if document.get("genres").is_some() {
        serde_json::from_str::<Structure>(&text).map_err(|e| parse_error(path, e))?
    } else {
        return Err(ContentError::new(ContentErrorKind::InvalidStructure(
            path.display().to_string(),
        )));
    };

    debug!(genres = structure.genres().len(), "Loaded structure");
    Ok(structure)
}

/// Load the trope catalog as-is.
///
/// # Errors
///
/// A missing file or invalid JSON is fatal.
#[instrument(skip(path), fields(path = %path.display()))]
pub fn load_tropes(path: &Path) -> ContentResult<TropeCatalog> {
    let text = read_required(path)?;
    let document: Value = serde_json::from_str(&text).map_err(|e| parse_error(path, e))?;
    let catalog = TropeCatalog::new(document);
    debug!(tropes = catalog.len(), "Loaded trope catalog");
    Ok(catalog)
}

/// Load reference summaries. A missing file yields an empty list.
#[instrument(skip(path), fields(path = %path.display()))]
pub fn load_summaries(path: &Path) -> ContentResult<Vec<String>> {
    if !path.exists() {
        debug!("No summaries file");
        return Ok(Vec::new());
    }
    let text = std::fs::read_to_string(path).map_err(|e| {
        ContentError::new(ContentErrorKind::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    })?;
    let summaries = parse_summaries(&text);
    debug!(summaries = summaries.len(), "Loaded summaries");
    Ok(summaries)
}

/// Split summary text on blank lines, dropping empty segments.
///
/// # Examples
///
/// ```
/// use seoulscript_content::parse_summaries;
///
/// let summaries = parse_summaries("First story.\r\n\r\n\r\n  Second story.  \n\n");
/// assert_eq!(summaries, vec!["First story.", "Second story."]);
/// ```
pub fn parse_summaries(text: &str) -> Vec<String> {
    text.replace("\r\n", "\n")
        .split("\n\n")
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(String::from)
        .collect()
}
