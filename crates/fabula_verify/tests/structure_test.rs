//! Tests for duplicate, dangling, unreachable and unknown instruction checks.

use fabula_core::{Scene, SceneStep, StoryMetadata};
use fabula_verify::{
    DanglingReferenceVerifier, DuplicateSceneVerifier, UnknownInstructionVerifier,
    UnreachableSceneVerifier, Verifier,
};

fn go(target: &str, line: u32) -> SceneStep {
    SceneStep::GoTo {
        target: target.to_string(),
        line,
    }
}

fn instruction(verb: &str, line: u32) -> SceneStep {
    SceneStep::Instruction {
        verb: verb.to_string(),
        args: Vec::new(),
        line,
    }
}

fn lines(errors: &[fabula_core::ImportErrorLine]) -> Vec<u32> {
    errors.iter().map(|e| *e.line_number()).collect()
}

#[tokio::test]
async fn test_duplicate_scene_reported_at_redefinition() {
    let story = StoryMetadata::new("dup", "en-US")
        .with_scene(Scene::new("start").with_line(1))
        .with_scene(Scene::new("middle").with_line(4))
        .with_scene(Scene::new(" Middle ").with_line(8));

    let errors = DuplicateSceneVerifier::new().verify(&story).await.unwrap();

    assert_eq!(lines(&errors), vec![8]);
    assert_eq!(errors[0].error_name(), "DuplicateScene");
    assert!(errors[0].error_message().contains("line 4"));
}

#[tokio::test]
async fn test_unique_scenes_have_no_duplicates() {
    let story = StoryMetadata::new("ok", "en-US")
        .with_scene(Scene::new("start"))
        .with_scene(Scene::new("end"));
    assert!(DuplicateSceneVerifier::new().verify(&story).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_dangling_reference_reported_at_transition_line() {
    let story = StoryMetadata::new("dangling", "en-US")
        .with_scene(
            Scene::new("start")
                .with_line(1)
                .with_step(go("Middle", 2))
                .with_step(go("nowhere", 3)),
        )
        .with_scene(Scene::new("middle").with_line(5));

    let errors = DanglingReferenceVerifier::new().verify(&story).await.unwrap();

    assert_eq!(lines(&errors), vec![3]);
    assert_eq!(errors[0].error_name(), "MissingSceneReference");
    assert!(errors[0].error_message().contains("'nowhere'"));
}

#[tokio::test]
async fn test_unreachable_scenes_in_scan_order() {
    let story = StoryMetadata::new("graph", "en-US")
        .with_scene(Scene::new("start").with_line(1).with_step(go("a", 2)))
        .with_scene(Scene::new("orphan").with_line(3).with_step(go("island", 4)))
        .with_scene(Scene::new("a").with_line(5).with_step(go("start", 6)))
        .with_scene(Scene::new("island").with_line(7));

    let errors = UnreachableSceneVerifier::new().verify(&story).await.unwrap();

    assert_eq!(lines(&errors), vec![3, 7]);
    assert!(errors.iter().all(|e| e.error_name() == "UnreachableScene"));
}

#[tokio::test]
async fn test_built_in_scenes_are_roots() {
    let story = StoryMetadata::new("globals", "en-US")
        .with_scene(Scene::new("start").with_line(1))
        .with_scene(Scene::new("Help").with_line(2).with_step(go("faq", 3)))
        .with_scene(Scene::new("faq").with_line(4));

    let errors = UnreachableSceneVerifier::new().verify(&story).await.unwrap();
    assert!(errors.is_empty());
}

#[tokio::test]
async fn test_reachability_skipped_without_start() {
    let story = StoryMetadata::new("no start", "en-US")
        .with_scene(Scene::new("intro"))
        .with_scene(Scene::new("middle"));
    assert!(UnreachableSceneVerifier::new().verify(&story).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_instruction_reported() {
    let story = StoryMetadata::new("verbs", "en-US").with_scene(
        Scene::new("start")
            .with_line(1)
            .with_step(instruction("pick_random_weekday", 2))
            .with_step(instruction("launch_rocket", 3)),
    );

    let verifier = UnknownInstructionVerifier::new(["pick_random_weekday", "reset_session"]);
    let errors = verifier.verify(&story).await.unwrap();

    assert_eq!(lines(&errors), vec![3]);
    assert_eq!(errors[0].error_name(), "UnknownInstruction");
    assert_eq!(verifier.known_verbs().len(), 2);
}
