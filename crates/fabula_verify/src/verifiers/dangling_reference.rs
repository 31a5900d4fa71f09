//! Transitions to undefined scenes.

use crate::Verifier;
use async_trait::async_trait;
use fabula_core::{ImportErrorLine, StoryMetadata, normalize_scene_id};
use fabula_error::FabulaResult;
use std::collections::HashSet;

/// Reports `go` transitions whose target scene is not defined in the story.
#[derive(Debug, Clone, Copy, Default)]
pub struct DanglingReferenceVerifier;

impl DanglingReferenceVerifier {
    /// Error name reported for an undefined transition target.
    pub const ERROR_NAME: &'static str = "MissingSceneReference";

    /// Create the verifier.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Verifier for DanglingReferenceVerifier {
    fn name(&self) -> &str {
        "dangling_reference"
    }

    async fn verify(&self, story: &StoryMetadata) -> FabulaResult<Vec<ImportErrorLine>> {
        let defined: HashSet<String> = story
            .scenes()
            .iter()
            .map(|scene| scene.normalized_id())
            .collect();

        let mut errors = Vec::new();
        for scene in story.scenes() {
            for (target, line) in scene.transitions() {
                if !defined.contains(&normalize_scene_id(target)) {
                    errors.push(ImportErrorLine::new(
                        line,
                        Self::ERROR_NAME,
                        format!(
                            "Scene '{}' goes to unknown scene '{}'.",
                            scene.id().trim(),
                            target.trim()
                        ),
                    ));
                }
            }
        }

        Ok(errors)
    }
}
