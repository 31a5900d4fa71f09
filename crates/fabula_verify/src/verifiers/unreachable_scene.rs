//! Reachability analysis over scene transitions.

use crate::Verifier;
use async_trait::async_trait;
use fabula_core::{BuiltInScene, ImportErrorLine, StoryMetadata, normalize_scene_id};
use fabula_error::FabulaResult;
use std::collections::{HashMap, HashSet, VecDeque};
use tracing::debug;

/// Reports scenes that no path of transitions reaches.
///
/// The walk starts at `start` and at every declared built-in scene the story
/// defines, since the engine may enter those without a transition. Stories
/// without a start scene are skipped; [`StartSceneVerifier`](crate::StartSceneVerifier)
/// already reports them.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnreachableSceneVerifier;

impl UnreachableSceneVerifier {
    /// Error name reported for an unreachable scene.
    pub const ERROR_NAME: &'static str = "UnreachableScene";

    /// Create the verifier.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Verifier for UnreachableSceneVerifier {
    fn name(&self) -> &str {
        "unreachable_scene"
    }

    async fn verify(&self, story: &StoryMetadata) -> FabulaResult<Vec<ImportErrorLine>> {
        let start = BuiltInScene::Start.id();
        if story.find_scene(start).is_none() {
            debug!("No start scene, skipping reachability");
            return Ok(Vec::new());
        }

        // Redefinitions of a scene id contribute their edges to the same node.
        let mut edges: HashMap<String, Vec<String>> = HashMap::new();
        for scene in story.scenes() {
            edges
                .entry(scene.normalized_id())
                .or_default()
                .extend(scene.transitions().map(|(target, _)| normalize_scene_id(target)));
        }

        let mut reached: HashSet<String> = HashSet::new();
        let mut queue: VecDeque<String> = edges
            .keys()
            .filter(|id| id.as_str() == start || story.is_built_in(id))
            .cloned()
            .collect();

        while let Some(id) = queue.pop_front() {
            if !reached.insert(id.clone()) {
                continue;
            }
            if let Some(targets) = edges.get(&id) {
                queue.extend(
                    targets
                        .iter()
                        .filter(|target| !reached.contains(*target))
                        .cloned(),
                );
            }
        }

        let errors = story
            .scenes()
            .iter()
            .filter(|scene| !reached.contains(&scene.normalized_id()))
            .map(|scene| {
                ImportErrorLine::new(
                    *scene.line(),
                    Self::ERROR_NAME,
                    format!(
                        "Scene '{}' cannot be reached from '{}'.",
                        scene.id().trim(),
                        start
                    ),
                )
            })
            .collect();

        Ok(errors)
    }
}
