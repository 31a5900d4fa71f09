//! TOML story document importer.
//!
//! ```toml
//! [story]
//! name = "weekday"
//! locale = "en-US"
//!
//! [[scene]]
//! id = "start"
//! steps = ["say Welcome.", "do pick_random_weekday", "go middle"]
//!
//! [[scene]]
//! id = "middle"
//! steps = ["say Today feels like {random_weekday}.", "end"]
//! ```
//!
//! Steps use the story script step syntax. TOML sources carry no line
//! information, so every position is recorded as 0.

use super::script::parse_step;
use async_trait::async_trait;
use fabula_core::{Scene, StoryMetadata};
use fabula_error::{FabulaResult, StoryError, StoryErrorKind};
use fabula_interface::{Extension, ImporterExtension};
use serde::Deserialize;
use tracing::{debug, instrument};

/// Intermediate structure for the `[story]` section.
#[derive(Debug, Clone, Default, Deserialize)]
struct TomlStoryHeader {
    #[serde(default)]
    name: String,
    #[serde(default)]
    locale: Option<String>,
}

/// Intermediate structure for one `[[scene]]` table.
#[derive(Debug, Clone, Deserialize)]
struct TomlScene {
    id: String,
    #[serde(default)]
    steps: Vec<String>,
}

/// Intermediate structure for a whole document.
#[derive(Debug, Clone, Deserialize)]
struct TomlStoryFile {
    #[serde(default)]
    story: TomlStoryHeader,
    #[serde(default)]
    scene: Vec<TomlScene>,
}

/// Importer for `.toml` story documents.
///
/// Documents without a `locale` inherit the locale the importer was built with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TomlImporterExtension {
    default_locale: String,
}

impl TomlImporterExtension {
    /// Creates the importer with the skill locale as fallback.
    pub fn new(default_locale: &str) -> Self {
        Self {
            default_locale: default_locale.to_string(),
        }
    }

    #[instrument(skip_all, fields(bytes = source.len()))]
    fn parse(&self, source: &str) -> FabulaResult<StoryMetadata> {
        let file: TomlStoryFile = toml::from_str(source)
            .map_err(|e| StoryError::new(StoryErrorKind::TomlParse(e.to_string())))?;

        let locale = file
            .story
            .locale
            .unwrap_or_else(|| self.default_locale.clone());
        let mut story = StoryMetadata::new(file.story.name, locale);

        for toml_scene in file.scene {
            let mut scene = Scene::new(toml_scene.id.clone());
            for step in &toml_scene.steps {
                let step = parse_step(step, 0).map_err(|e| {
                    StoryError::new(StoryErrorKind::TomlParse(format!(
                        "Scene '{}': {}",
                        toml_scene.id, e.kind
                    )))
                })?;
                scene.push_step(step);
            }
            story.push_scene(scene);
        }

        debug!(scenes = story.scenes().len(), "Parsed TOML story");
        Ok(story)
    }
}

impl Extension for TomlImporterExtension {
    fn name(&self) -> &str {
        "toml_importer"
    }

    fn as_importer(&self) -> Option<&dyn ImporterExtension> {
        Some(self)
    }
}

#[async_trait]
impl ImporterExtension for TomlImporterExtension {
    fn format(&self) -> &str {
        "toml story"
    }

    fn file_extensions(&self) -> &[&'static str] {
        &["toml"]
    }

    async fn import(&self, source: &str) -> FabulaResult<StoryMetadata> {
        self.parse(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fabula_core::SceneStep;

    #[test]
    fn test_parses_document() {
        let source = r#"
            [story]
            name = "weekday"

            [[scene]]
            id = "start"
            steps = ["say Welcome.", "do pick_random_weekday", "go middle"]

            [[scene]]
            id = "middle"
            steps = ["end"]
        "#;

        let story = TomlImporterExtension::new("fr-FR").parse(source).unwrap();
        assert_eq!(story.name(), "weekday");
        assert_eq!(story.locale(), "fr-FR");
        assert_eq!(story.scenes().len(), 2);
        assert_eq!(
            story.scenes()[0].transitions().collect::<Vec<_>>(),
            vec![("middle", 0)]
        );
        assert_eq!(story.scenes()[1].steps(), &vec![SceneStep::End]);
    }

    #[test]
    fn test_declared_locale_wins() {
        let source = "[story]\nlocale = \"en-AU\"\n";
        let story = TomlImporterExtension::new("fr-FR").parse(source).unwrap();
        assert_eq!(story.locale(), "en-AU");
        assert!(story.scenes().is_empty());
    }

    #[test]
    fn test_bad_step_names_scene() {
        let source = "[[scene]]\nid = \"start\"\nsteps = [\"jump high\"]\n";
        let err = TomlImporterExtension::new("en-US").parse(source).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("start"));
        assert!(message.contains("jump"));
    }

    #[test]
    fn test_invalid_toml() {
        let err = TomlImporterExtension::new("en-US")
            .parse("[[scene]\nid = ")
            .unwrap_err();
        assert!(err.to_string().contains("TOML"));
    }
}
