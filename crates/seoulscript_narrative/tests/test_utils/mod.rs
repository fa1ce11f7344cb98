//! Test utilities for orchestration tests.

#[allow(unused_imports)]
pub use seoulscript_models::test_utils::{MockDriver, MockResponse};

use seoulscript_content::ContentStore;
use seoulscript_core::{EpisodeEntry, Genre, Structure, TropeCatalog};
use serde_json::json;
use std::sync::Arc;

/// Store with an "office_romance" genre (four blocks, one unnumbered), an
/// empty "thriller" genre, two tropes and two summaries.
#[allow(dead_code)]
pub fn fixture_store() -> Arc<ContentStore> {
    let structure: Structure = serde_json::from_str(
        r#"{
            "genres": {
                "office_romance": {
                    "episodes": {
                        "10-12": "Wedding crisis",
                        "x-y": "Bonus epilogue",
                        "1-2": {"description": "Chaebol heir meets intern", "tropes": ["contract relationship"]},
                        "3-4": {"description": "Fake engagement"}
                    },
                    "optional_tropes": ["love triangle", "second lead syndrome"]
                },
                "thriller": {"episodes": {}}
            }
        }"#,
    )
    .unwrap();

    let tropes = TropeCatalog::new(json!({"tropes": [{"name": "Amnesia"}, {"name": "Amnesia"}]}));
    let summaries = vec!["A poor girl...".to_string(), "A cold CEO...".to_string()];
    Arc::new(ContentStore::new(structure, tropes, summaries))
}

/// Store with a single one-block genre and no tropes or summaries.
#[allow(dead_code)]
pub fn minimal_store() -> Arc<ContentStore> {
    let block = (
        "1-2".to_string(),
        EpisodeEntry::Description("Crown prince in disguise".to_string()),
    );
    let genre = Genre::new("historical", vec![block], vec![]);
    let structure = Structure::new(vec![genre]);
    Arc::new(ContentStore::new(structure, TropeCatalog::default(), vec![]))
}
