//! Trope catalog.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The raw trope catalog.
///
/// The document is kept exactly as loaded. Entries are read from a top-level
/// `tropes` array or from a bare array.
///
/// # Examples
///
/// ```
/// use seoulscript_core::TropeCatalog;
///
/// let catalog: TropeCatalog =
///     serde_json::from_str(r#"{"tropes": [{"name": "Chaebol heir"}, {"name": "Amnesia"}]}"#).unwrap();
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(TropeCatalog::entry_name(&catalog.entries()[1]), "Amnesia");
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TropeCatalog(Value);

impl TropeCatalog {
    /// Wrap an already-parsed catalog document.
    pub fn new(document: Value) -> Self {
        Self(document)
    }

    /// The catalog document as loaded.
    pub fn document(&self) -> &Value {
        &self.0
    }

    /// Trope entries, empty when the document has neither shape.
    pub fn entries(&self) -> &[Value] {
        match &self.0 {
            Value::Array(entries) => entries,
            Value::Object(map) => match map.get("tropes") {
                Some(Value::Array(entries)) => entries,
                _ => &[],
            },
            _ => &[],
        }
    }

    /// Name of a catalog entry, or `""` if the entry has no string `name`.
    pub fn entry_name(entry: &Value) -> &str {
        entry.get("name").and_then(Value::as_str).unwrap_or("")
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

impl From<Value> for TropeCatalog {
    fn from(document: Value) -> Self {
        Self(document)
    }
}
