//! Single-scene generation against a scripted driver.

mod test_utils;

use rand::SeedableRng;
use rand::rngs::StdRng;
use seoulscript_core::{DEFAULT_SCENE_TITLE, MvpRequest};
use seoulscript_error::{GatewayErrorKind, GenerationErrorKind};
use seoulscript_models::{LlmGateway, RetryPolicy};
use seoulscript_narrative::MvpSceneGenerator;
use std::sync::Arc;
use std::time::Duration;
use test_utils::{MockDriver, MockResponse, fixture_store, minimal_store};

fn request(genre: &str) -> MvpRequest {
    MvpRequest {
        genre: genre.to_string(),
    }
}

#[tokio::test]
async fn test_unknown_genre_makes_no_calls() {
    let driver = Arc::new(MockDriver::new_success("{}"));
    let generator = MvpSceneGenerator::new(fixture_store(), LlmGateway::new(driver.clone()), "m");

    let err = generator
        .generate(&request("space_opera"))
        .await
        .unwrap_err();

    assert!(err.kind.is_client_error());
    assert_eq!(driver.call_count(), 0);
}

#[tokio::test]
async fn test_genre_without_episodes() {
    let driver = Arc::new(MockDriver::new_success("{}"));
    let generator = MvpSceneGenerator::new(fixture_store(), LlmGateway::new(driver.clone()), "m");

    let err = generator.generate(&request("thriller")).await.unwrap_err();

    assert_eq!(
        err.kind,
        GenerationErrorKind::NoEpisodes("thriller".to_string())
    );
    assert_eq!(driver.call_count(), 0);
}

#[tokio::test]
async fn test_structured_response() -> anyhow::Result<()> {
    let driver = Arc::new(MockDriver::new_success(
        r#"{"title": "Rooftop Confession", "director_notes": ["Neon rain"], "scene_script": "EXT. ROOFTOP - NIGHT"}"#,
    ));
    let generator = MvpSceneGenerator::new(
        fixture_store(),
        LlmGateway::new(driver.clone()),
        "gpt-4o-mini",
    );

    let scene = generator.generate(&request("office_romance")).await?;

    assert_eq!(scene.title, "Rooftop Confession");
    assert_eq!(scene.genre, "office_romance");
    assert_eq!(scene.director_notes, vec!["Neon rain"]);
    assert_eq!(scene.scene_script, "EXT. ROOFTOP - NIGHT");

    let requests = driver.requests();
    assert_eq!(requests[0].model(), "gpt-4o-mini");
    assert_eq!(*requests[0].max_tokens(), 900);
    assert!(requests[0].prompt().contains("TROPE: Amnesia\n"));
    Ok(())
}

#[tokio::test]
async fn test_plain_text_response_falls_back() -> anyhow::Result<()> {
    let driver = Arc::new(MockDriver::new_success("Just a plain sentence."));
    let generator = MvpSceneGenerator::new(minimal_store(), LlmGateway::new(driver), "m");

    let scene = generator.generate(&request("historical")).await?;

    assert_eq!(scene.title, DEFAULT_SCENE_TITLE);
    assert!(scene.director_notes.is_empty());
    assert_eq!(scene.scene_script, "Just a plain sentence.");
    Ok(())
}

#[tokio::test]
async fn test_legacy_script_key() -> anyhow::Result<()> {
    let raw = r#"{"title":"T","director_notes":["n1"],"script":"S"}"#;
    let driver = Arc::new(MockDriver::new_success(raw));
    let generator = MvpSceneGenerator::new(minimal_store(), LlmGateway::new(driver), "m");

    let scene = generator.generate(&request("historical")).await?;

    assert_eq!(scene.title, "T");
    assert_eq!(scene.director_notes, vec!["n1"]);
    assert_eq!(scene.scene_script, "S");
    Ok(())
}

#[test]
fn test_empty_catalog_and_summaries_pick_empty_strings() {
    let generator = MvpSceneGenerator::new(minimal_store(), LlmGateway::unconfigured(), "m");
    let mut rng = StdRng::seed_from_u64(7);

    let picks = generator.pick("historical", &mut rng).unwrap();

    assert_eq!(picks.structure, "Crown prince in disguise");
    assert_eq!(picks.trope, "");
    assert_eq!(picks.summary, "");
}

#[test]
fn test_seeded_picks_are_reproducible() {
    let generator = MvpSceneGenerator::new(fixture_store(), LlmGateway::unconfigured(), "m");

    let first = generator
        .pick("office_romance", &mut StdRng::seed_from_u64(42))
        .unwrap();
    let second = generator
        .pick("office_romance", &mut StdRng::seed_from_u64(42))
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(first.trope, "Amnesia");
    assert!(["A poor girl...", "A cold CEO..."].contains(&first.summary.as_str()));
}

#[tokio::test]
async fn test_seeded_generation_uses_drawn_block() -> anyhow::Result<()> {
    let driver = Arc::new(MockDriver::new_success("text"));
    let generator = MvpSceneGenerator::new(fixture_store(), LlmGateway::new(driver.clone()), "m");
    let expected = generator.pick("office_romance", &mut StdRng::seed_from_u64(9))?;

    generator
        .generate_with_rng(&request("office_romance"), &mut StdRng::seed_from_u64(9))
        .await?;

    let prompt = driver.requests()[0].prompt().clone();
    assert!(prompt.contains(&format!("STRUCTURE: {}\n", expected.structure)));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_gateway_failure_is_a_server_error() {
    let driver = Arc::new(MockDriver::with_sequence(
        Vec::new(),
        MockResponse::Error(GatewayErrorKind::Api {
            status: 500,
            message: "boom".to_string(),
        }),
    ));
    let policy = RetryPolicy::new(3, Duration::from_secs(1));
    let gateway = LlmGateway::new(driver.clone()).with_policy(policy);
    let generator = MvpSceneGenerator::new(minimal_store(), gateway, "m");

    let err = generator
        .generate(&request("historical"))
        .await
        .unwrap_err();

    assert!(matches!(err.kind, GenerationErrorKind::SceneFailure(_)));
    assert!(err.kind.to_string().starts_with("LLM call failed: "));
    assert_eq!(driver.call_count(), 3);
}
