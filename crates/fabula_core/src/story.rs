//! Compiled story metadata.

use crate::{BuiltInScene, Scene, normalize_scene_id};
use serde::{Deserialize, Serialize};

/// The compiled representation of a story.
///
/// Produced once per compilation by an importer and read, never mutated, by the
/// verification pipeline.
///
/// # Examples
///
/// ```
/// use fabula_core::{Scene, StoryMetadata};
///
/// let story = StoryMetadata::new("weekday", "en-US")
///     .with_scene(Scene::new("Start"))
///     .with_scene(Scene::new("Middle"));
///
/// assert_eq!(story.scenes().len(), 2);
/// assert!(story.find_scene(" start ").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct StoryMetadata {
    /// Story name
    #[serde(default)]
    name: String,
    /// Locale the story is written for, e.g. `en-US`
    #[serde(default)]
    locale: String,
    /// Reserved scene names known to the compiler that produced this story
    #[serde(default = "BuiltInScene::all_ids")]
    built_in_scenes: Vec<String>,
    /// Scenes in source order
    #[serde(default)]
    scenes: Vec<Scene>,
}

impl StoryMetadata {
    /// Creates an empty story declaring the standard built-in scenes.
    pub fn new(name: impl Into<String>, locale: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            locale: locale.into(),
            built_in_scenes: BuiltInScene::all_ids(),
            scenes: Vec::new(),
        }
    }

    /// Appends a scene.
    pub fn with_scene(mut self, scene: Scene) -> Self {
        self.scenes.push(scene);
        self
    }

    /// Appends a scene in place.
    pub fn push_scene(&mut self, scene: Scene) {
        self.scenes.push(scene);
    }

    /// Replaces the declared built-in scene names.
    pub fn with_built_in_scenes(mut self, names: Vec<String>) -> Self {
        self.built_in_scenes = names;
        self
    }

    /// Sets the locale when none was declared.
    pub fn set_default_locale(&mut self, locale: &str) {
        if self.locale.trim().is_empty() {
            self.locale = locale.to_string();
        }
    }

    /// First scene whose identifier matches `id` case- and whitespace-insensitively.
    pub fn find_scene(&self, id: &str) -> Option<&Scene> {
        self.scenes.iter().find(|scene| scene.matches_id(id))
    }

    /// Whether `id` names a built-in scene declared by this story.
    pub fn is_built_in(&self, id: &str) -> bool {
        let normalized = normalize_scene_id(id);
        self.built_in_scenes
            .iter()
            .any(|name| normalize_scene_id(name) == normalized)
    }
}
