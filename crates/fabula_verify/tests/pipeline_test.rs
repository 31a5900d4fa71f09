//! Tests for verifier composition.

use async_trait::async_trait;
use fabula_core::{ImportErrorLine, Scene, SceneStep, StoryMetadata};
use fabula_error::{FabulaResult, VerifyError, VerifyErrorKind};
use fabula_verify::{StartSceneVerifier, VerificationPipeline, Verifier};
use std::time::Duration;

/// Reports one fixed line after an optional delay.
struct Fixed {
    name: &'static str,
    delay_ms: u64,
}

#[async_trait]
impl Verifier for Fixed {
    fn name(&self) -> &str {
        self.name
    }

    async fn verify(&self, _story: &StoryMetadata) -> FabulaResult<Vec<ImportErrorLine>> {
        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        Ok(vec![ImportErrorLine::unattributed(self.name, "fixed")])
    }
}

struct Faulty;

#[async_trait]
impl Verifier for Faulty {
    fn name(&self) -> &str {
        "faulty"
    }

    async fn verify(&self, _story: &StoryMetadata) -> FabulaResult<Vec<ImportErrorLine>> {
        Err(VerifyError::new(VerifyErrorKind::InvalidStory("broken metadata".into())).into())
    }
}

/// Fails after an optional delay.
struct SlowFault {
    name: &'static str,
    delay_ms: u64,
}

#[async_trait]
impl Verifier for SlowFault {
    fn name(&self) -> &str {
        self.name
    }

    async fn verify(&self, _story: &StoryMetadata) -> FabulaResult<Vec<ImportErrorLine>> {
        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        let message = format!("{} failed", self.name);
        Err(VerifyError::new(VerifyErrorKind::InvalidStory(message)).into())
    }
}

fn weekday_story() -> StoryMetadata {
    StoryMetadata::new("weekday", "en-US")
        .with_scene(Scene::new("Start").with_line(1).with_step(SceneStep::GoTo {
            target: "middle".to_string(),
            line: 2,
        }))
        .with_scene(Scene::new("Middle").with_line(3).with_step(SceneStep::End))
}

#[tokio::test]
async fn test_standard_pipeline_accepts_valid_story() {
    let report = VerificationPipeline::standard()
        .run(&weekday_story())
        .await
        .unwrap();
    assert!(report.is_publishable());
}

#[tokio::test]
async fn test_standard_pipeline_order() {
    let pipeline = VerificationPipeline::standard();
    assert_eq!(
        pipeline.verifier_names(),
        vec![
            "start_scene",
            "duplicate_scene",
            "dangling_reference",
            "unreachable_scene"
        ]
    );
}

#[tokio::test]
async fn test_results_follow_registration_order() {
    // The first verifier finishes last.
    let pipeline = VerificationPipeline::new()
        .with_verifier(Fixed { name: "slow", delay_ms: 50 })
        .with_verifier(Fixed { name: "fast", delay_ms: 0 })
        .with_verifier(Fixed { name: "medium", delay_ms: 10 });

    let report = pipeline.run(&weekday_story()).await.unwrap();
    let names: Vec<&str> = report.errors().iter().map(|e| e.error_name().as_str()).collect();
    assert_eq!(names, vec!["slow", "fast", "medium"]);
}

#[tokio::test]
async fn test_fault_aborts_run() {
    let pipeline = VerificationPipeline::new()
        .with_verifier(StartSceneVerifier::new())
        .with_verifier(Faulty);

    let err = pipeline.run(&StoryMetadata::new("any", "en-US")).await.unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Verifier 'faulty' faulted"), "{}", message);
    assert!(message.contains("broken metadata"), "{}", message);
}

#[tokio::test]
async fn test_earliest_registered_fault_is_reported() {
    // The first fault finishes last.
    let pipeline = VerificationPipeline::new()
        .with_verifier(Fixed { name: "clean", delay_ms: 0 })
        .with_verifier(SlowFault { name: "first", delay_ms: 50 })
        .with_verifier(SlowFault { name: "second", delay_ms: 0 });

    for _ in 0..3 {
        let err = pipeline.run(&weekday_story()).await.unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Verifier 'first' faulted"), "{}", message);
        assert!(!message.contains("'second'"), "{}", message);
    }
}

#[tokio::test]
async fn test_missing_start_flows_through_pipeline() {
    let story = StoryMetadata::new("intro", "en-US")
        .with_scene(Scene::new("Intro").with_line(1))
        .with_scene(Scene::new("Middle").with_line(2));

    let report = VerificationPipeline::new()
        .with_verifier(StartSceneVerifier::new())
        .run(&story)
        .await
        .unwrap();

    assert_eq!(
        report.errors(),
        &vec![ImportErrorLine::unattributed(
            "MissingScene",
            "Cannot find the required scene 'start'."
        )]
    );
}

#[tokio::test]
async fn test_instruction_check_appends_verifier() {
    let story = StoryMetadata::new("verbs", "en-US").with_scene(
        Scene::new("start").with_line(1).with_step(SceneStep::Instruction {
            verb: "fly".to_string(),
            args: Vec::new(),
            line: 2,
        }),
    );

    let pipeline = VerificationPipeline::standard().with_instruction_check(["pick_random_weekday"]);
    assert_eq!(pipeline.len(), 5);

    let report = pipeline.run(&story).await.unwrap();
    assert_eq!(
        report.error_names().into_iter().collect::<Vec<_>>(),
        vec!["UnknownInstruction"]
    );
}

#[tokio::test]
async fn test_empty_pipeline_reports_nothing() {
    let pipeline = VerificationPipeline::new();
    assert!(pipeline.is_empty());
    let report = pipeline.run(&StoryMetadata::new("", "")).await.unwrap();
    assert!(report.is_publishable());
}
