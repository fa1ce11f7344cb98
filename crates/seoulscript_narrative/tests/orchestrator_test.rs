//! Episode-block generation against a scripted driver.

mod test_utils;

use seoulscript_core::{EpisodeSection, GenerationRequest, Mode};
use seoulscript_error::{GatewayErrorKind, GenerationErrorKind};
use seoulscript_models::{LlmGateway, RetryPolicy};
use seoulscript_narrative::{GenerationOrchestrator, ResultWriter};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use test_utils::{MockDriver, MockResponse, fixture_store};

fn orchestrator(driver: Arc<MockDriver>, out: &TempDir) -> GenerationOrchestrator {
    let policy = RetryPolicy::new(2, Duration::from_millis(1));
    let gateway = LlmGateway::new(driver).with_policy(policy);
    GenerationOrchestrator::new(
        fixture_store(),
        gateway,
        ResultWriter::new(out.path()),
        "gpt-3.5-turbo",
    )
}

#[test]
fn test_plan_resolves_blocks_in_order() {
    let out = TempDir::new().unwrap();
    let driver = Arc::new(MockDriver::new_success("text"));
    let orchestrator = orchestrator(driver.clone(), &out);

    let request = GenerationRequest::new("office_romance");
    let plan = orchestrator.plan(&request).unwrap();

    let keys: Vec<_> = plan.iter().map(|episode| &episode.key).collect();
    assert_eq!(keys, ["1-2", "3-4", "10-12", "x-y"]);
    assert_eq!(plan[1].description, "Fake engagement");
    let genre_tropes = ["love triangle", "second lead syndrome"];
    assert_eq!(plan[1].tropes, genre_tropes);
    assert_eq!(driver.call_count(), 0);
}

#[test]
fn test_plan_single_block() {
    let out = TempDir::new().unwrap();
    let orchestrator = orchestrator(Arc::new(MockDriver::new_success("text")), &out);

    let request = GenerationRequest::new("office_romance").with_episode("1-2");
    let plan = orchestrator.plan(&request).unwrap();

    assert_eq!(plan.len(), 1);
    assert_eq!(plan[0].description, "Chaebol heir meets intern");
    assert_eq!(plan[0].tropes, ["contract relationship"]);
}

#[tokio::test]
async fn test_unknown_genre_makes_no_calls() {
    let out = TempDir::new().unwrap();
    let driver = Arc::new(MockDriver::new_success("text"));
    let orchestrator = orchestrator(driver.clone(), &out);

    let err = orchestrator
        .generate(&GenerationRequest::new("space_opera"))
        .await
        .unwrap_err();

    assert_eq!(
        err.kind,
        GenerationErrorKind::UnknownGenre("space_opera".to_string())
    );
    assert!(err.kind.is_client_error());
    assert_eq!(err.kind.to_string(), "Genre 'space_opera' not found");
    assert_eq!(driver.call_count(), 0);
}

#[tokio::test]
async fn test_genre_without_episodes() {
    let out = TempDir::new().unwrap();
    let driver = Arc::new(MockDriver::new_success("text"));
    let err = orchestrator(driver.clone(), &out)
        .generate(&GenerationRequest::new("thriller"))
        .await
        .unwrap_err();

    let expected = "No episodes defined for genre thriller";
    assert_eq!(err.kind.to_string(), expected);
    assert_eq!(driver.call_count(), 0);
}

#[tokio::test]
async fn test_unknown_episode_makes_no_calls() {
    let out = TempDir::new().unwrap();
    let driver = Arc::new(MockDriver::new_success("text"));
    let err = orchestrator(driver.clone(), &out)
        .generate(&GenerationRequest::new("office_romance").with_episode("99-100"))
        .await
        .unwrap_err();

    assert_eq!(err.kind.to_string(), "Episode block 99-100 not found");
    assert!(err.kind.is_client_error());
    assert_eq!(driver.call_count(), 0);
}

#[tokio::test]
async fn test_all_blocks_in_numeric_order() -> anyhow::Result<()> {
    let out = TempDir::new()?;
    let driver = Arc::new(MockDriver::new_success("  generated beats  "));
    let result = orchestrator(driver.clone(), &out)
        .generate(&GenerationRequest::new("office_romance"))
        .await?;

    let keys: Vec<_> = result.sections.iter().map(|s| &s.episode).collect();
    assert_eq!(keys, ["1-2", "3-4", "10-12", "x-y"]);
    assert_eq!(driver.call_count(), 4);
    for section in &result.sections {
        assert_eq!(section.generated, "generated beats");
    }

    // Block tropes win; blocks without tropes use the genre defaults.
    assert_eq!(result.sections[0].tropes, ["contract relationship"]);
    assert_eq!(
        result.sections[1].tropes,
        ["love triangle", "second lead syndrome"]
    );
    assert_eq!(result.sections[2].description, "Wedding crisis");

    let requests = driver.requests();
    assert!(requests[0].prompt().contains("Episode Range: 1-2\n"));
    assert!(requests[0].prompt().contains("Genre: office romance\n"));
    assert!(requests[0].prompt().contains("STORYBOARD"));
    for request in &requests {
        assert_eq!(request.model(), "gpt-3.5-turbo");
    }
    Ok(())
}

#[tokio::test]
async fn test_single_episode_and_persisted_file() -> anyhow::Result<()> {
    let out = TempDir::new()?;
    let driver = Arc::new(MockDriver::new_success("INT. OFFICE - DAY"));
    let orchestrator = orchestrator(driver.clone(), &out);
    let request = GenerationRequest::new("office_romance")
        .with_mode(Mode::Script)
        .with_episode("3-4");

    let result = orchestrator.generate(&request).await?;

    assert_eq!(result.sections.len(), 1);
    assert_eq!(driver.call_count(), 1);
    assert!(driver.requests()[0].prompt().contains("INT./EXT."));

    let name = result.file.file_name().unwrap().to_string_lossy();
    assert!(name.starts_with("office_romance_script_"));
    assert!(name.ends_with(".json"));
    assert_eq!(result.file.parent().unwrap(), out.path());

    let text = std::fs::read_to_string(&result.file)?;
    let saved: Vec<EpisodeSection> = serde_json::from_str(&text)?;
    assert_eq!(saved, result.sections);
    Ok(())
}

#[tokio::test]
async fn test_examples_included_only_when_requested() -> anyhow::Result<()> {
    let out = TempDir::new()?;
    let driver = Arc::new(MockDriver::new_success("ok"));
    let orchestrator = orchestrator(driver.clone(), &out);

    let request = GenerationRequest::new("office_romance").with_episode("1-2");
    let with_examples = request.clone().with_examples(true);
    orchestrator.generate(&request).await?;
    orchestrator.generate(&with_examples).await?;

    let requests = driver.requests();
    assert!(requests[0].prompt().contains("Examples (optional): \n"));
    let prompt = requests[1].prompt();
    assert!(prompt.contains("Examples (optional): A poor girl... | A cold CEO...\n"));
    Ok(())
}

#[tokio::test]
async fn test_gateway_failure_aborts_and_saves_nothing() {
    let out = TempDir::new().unwrap();
    let driver = Arc::new(MockDriver::with_sequence(
        vec![MockResponse::Text("first block".to_string())],
        MockResponse::Error(GatewayErrorKind::Http("timeout".to_string())),
    ));

    let err = orchestrator(driver.clone(), &out)
        .generate(&GenerationRequest::new("office_romance"))
        .await
        .unwrap_err();

    match &err.kind {
        GenerationErrorKind::GatewayFailure { episode, message } => {
            assert_eq!(episode, "3-4");
            assert!(message.contains("timeout"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!err.kind.is_client_error());
    // One success, then both attempts for the second block.
    assert_eq!(driver.call_count(), 3);
    assert_eq!(std::fs::read_dir(out.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_missing_api_key_is_a_server_error() {
    let out = TempDir::new().unwrap();
    let orchestrator = GenerationOrchestrator::new(
        fixture_store(),
        LlmGateway::unconfigured(),
        ResultWriter::new(out.path()),
        "gpt-3.5-turbo",
    );

    let err = orchestrator
        .generate(&GenerationRequest::new("office_romance"))
        .await
        .unwrap_err();

    assert!(!err.kind.is_client_error());
    assert!(err.kind.to_string().contains("OPENAI_API_KEY not set"));
}
