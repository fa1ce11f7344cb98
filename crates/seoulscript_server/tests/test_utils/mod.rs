//! Test utilities for HTTP tests.

#[allow(unused_imports)]
pub use seoulscript_models::test_utils::{MockDriver, MockResponse};

use seoulscript_content::ContentStore;
use seoulscript_core::{Structure, TropeCatalog};
use serde_json::json;
use std::sync::Arc;

/// Store with "office_romance" (three blocks), "historical" (one block) and
/// an empty "thriller" genre.
#[allow(dead_code)]
pub fn fixture_store() -> Arc<ContentStore> {
    // Parsed from text so genre order follows the document.
    let structure: Structure = serde_json::from_str(
        r#"{
            "genres": {
                "office_romance": {
                    "episodes": {
                        "10-12": "Wedding crisis",
                        "1-2": {"description": "Chaebol heir meets intern", "tropes": ["contract relationship"]},
                        "3-4": "Fake engagement"
                    },
                    "optional_tropes": ["love triangle"]
                },
                "historical": {"episodes": {"1-2": "Crown prince in disguise"}},
                "thriller": {"episodes": {}}
            }
        }"#,
    )
    .unwrap();
    let tropes = TropeCatalog::new(json!({"tropes": [{"name": "Amnesia"}]}));
    Arc::new(ContentStore::new(structure, tropes, vec!["A cold CEO...".to_string()]))
}
