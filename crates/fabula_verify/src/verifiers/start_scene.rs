//! Start scene existence check.

use crate::Verifier;
use async_trait::async_trait;
use fabula_core::{BuiltInScene, ImportErrorLine, StoryMetadata};
use fabula_error::FabulaResult;
use tracing::instrument;

/// Reports a story that does not define the `start` scene.
///
/// Scene identifiers are compared after trimming and lower-casing, so
/// `" Start "` and `"START"` both satisfy the check. The story's declared
/// built-in scene list plays no part.
#[derive(Debug, Clone, Copy, Default)]
pub struct StartSceneVerifier;

impl StartSceneVerifier {
    /// Error name reported for the missing scene.
    pub const ERROR_NAME: &'static str = "MissingScene";

    /// Create the verifier.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Verifier for StartSceneVerifier {
    fn name(&self) -> &str {
        "start_scene"
    }

    #[instrument(skip_all, fields(story = %story.name()))]
    async fn verify(&self, story: &StoryMetadata) -> FabulaResult<Vec<ImportErrorLine>> {
        let start = BuiltInScene::Start.id();

        if story.scenes().iter().any(|scene| scene.matches_id(start)) {
            return Ok(Vec::new());
        }

        Ok(vec![ImportErrorLine::unattributed(
            Self::ERROR_NAME,
            format!("Cannot find the required scene '{}'.", start),
        )])
    }
}
