//! Tests for the start scene check.

use fabula_core::{ImportErrorLine, Scene, StoryMetadata};
use fabula_verify::{StartSceneVerifier, VerificationPipeline, Verifier};

fn story(ids: &[&str]) -> StoryMetadata {
    ids.iter()
        .enumerate()
        .fold(StoryMetadata::new("test", "en-US"), |story, (i, id)| {
            story.with_scene(Scene::new(*id).with_line(i as u32 + 1))
        })
}

fn missing_start() -> ImportErrorLine {
    ImportErrorLine::new(0, "MissingScene", "Cannot find the required scene 'start'.")
}

#[tokio::test]
async fn test_story_with_start_passes() {
    let errors = StartSceneVerifier::new()
        .verify(&story(&["Start", "Middle"]))
        .await
        .unwrap();
    assert!(errors.is_empty());
}

#[tokio::test]
async fn test_story_without_start_reports_one_line() {
    let errors = StartSceneVerifier::new()
        .verify(&story(&["Intro", "Middle"]))
        .await
        .unwrap();
    assert_eq!(errors, vec![missing_start()]);
}

#[tokio::test]
async fn test_start_id_is_trimmed_and_case_insensitive() {
    let verifier = StartSceneVerifier::new();
    for id in [" start ", "START", "sTaRt\t"] {
        let errors = verifier.verify(&story(&["Intro", id])).await.unwrap();
        assert!(errors.is_empty(), "'{}' should count as the start scene", id);
    }
}

#[tokio::test]
async fn test_empty_story_is_missing_start() {
    let errors = StartSceneVerifier::new().verify(&story(&[])).await.unwrap();
    assert_eq!(errors, vec![missing_start()]);
}

#[tokio::test]
async fn test_similar_ids_do_not_count() {
    let errors = StartSceneVerifier::new()
        .verify(&story(&["started", "re-start", "st art"]))
        .await
        .unwrap();
    assert_eq!(errors.len(), 1);
}

#[tokio::test]
async fn test_verify_does_not_mutate_story() {
    let input = story(&["Intro", "Middle"]);
    let before = input.clone();
    StartSceneVerifier::new().verify(&input).await.unwrap();
    assert_eq!(input, before);
}

#[tokio::test]
async fn test_declared_built_ins_do_not_affect_check() {
    let verifier = StartSceneVerifier::new();

    let with_start = story(&["Start", "Middle"]).with_built_in_scenes(Vec::new());
    assert!(verifier.verify(&with_start).await.unwrap().is_empty());

    let without_start = story(&["Intro", "Middle"]).with_built_in_scenes(vec!["help".to_string()]);
    assert_eq!(
        verifier.verify(&without_start).await.unwrap(),
        vec![missing_start()]
    );
}

#[tokio::test]
async fn test_json_story_without_built_ins_flows_through_pipeline() {
    let story: StoryMetadata = serde_json::from_str(
        r#"{"name":"s","builtInScenes":[],"scenes":[{"id":"Intro"},{"id":"Middle"}]}"#,
    )
    .unwrap();

    let report = VerificationPipeline::standard().run(&story).await.unwrap();
    assert_eq!(report.errors(), &vec![missing_start()]);
}
