//! Duplicate scene identifier check.

use crate::Verifier;
use async_trait::async_trait;
use fabula_core::{ImportErrorLine, StoryMetadata};
use fabula_error::FabulaResult;
use std::collections::HashMap;

/// Reports every scene whose normalized identifier was already defined.
///
/// The first definition is accepted; each later one is reported at its own
/// header line.
#[derive(Debug, Clone, Copy, Default)]
pub struct DuplicateSceneVerifier;

impl DuplicateSceneVerifier {
    /// Error name reported for a redefined scene.
    pub const ERROR_NAME: &'static str = "DuplicateScene";

    /// Create the verifier.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Verifier for DuplicateSceneVerifier {
    fn name(&self) -> &str {
        "duplicate_scene"
    }

    async fn verify(&self, story: &StoryMetadata) -> FabulaResult<Vec<ImportErrorLine>> {
        let mut first_seen: HashMap<String, u32> = HashMap::new();
        let mut errors = Vec::new();

        for scene in story.scenes() {
            let id = scene.normalized_id();
            match first_seen.get(&id) {
                Some(&first_line) if first_line > 0 => errors.push(ImportErrorLine::new(
                    *scene.line(),
                    Self::ERROR_NAME,
                    format!(
                        "Scene '{}' is already defined on line {}.",
                        scene.id().trim(),
                        first_line
                    ),
                )),
                Some(_) => errors.push(ImportErrorLine::new(
                    *scene.line(),
                    Self::ERROR_NAME,
                    format!("Scene '{}' is already defined.", scene.id().trim()),
                )),
                None => {
                    first_seen.insert(id, *scene.line());
                }
            }
        }

        Ok(errors)
    }
}
