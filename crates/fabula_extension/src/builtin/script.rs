//! Line-based story script importer.
//!
//! ```text
//! # Weekday game
//! !name weekday
//! !locale en-US
//!
//! @start
//! say Welcome to the weekday game.
//! do pick_random_weekday
//! go middle
//!
//! @middle
//! say Today feels like {random_weekday}.
//! end
//! ```
//!
//! `!name` and `!locale` directives must precede the first scene. `@id` opens
//! a scene; `say`, `do`, `go` and `end` append steps to it.

use async_trait::async_trait;
use fabula_core::{Scene, SceneStep, StoryMetadata};
use fabula_error::{FabulaResult, StoryError, StoryErrorKind};
use fabula_interface::{Extension, ImporterExtension};
use tracing::{debug, instrument};

/// Importer for `.story` scripts.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptImporterExtension;

impl ScriptImporterExtension {
    /// Creates the extension.
    pub fn new() -> Self {
        Self
    }
}

impl Extension for ScriptImporterExtension {
    fn name(&self) -> &str {
        "story_script_importer"
    }

    fn as_importer(&self) -> Option<&dyn ImporterExtension> {
        Some(self)
    }
}

#[async_trait]
impl ImporterExtension for ScriptImporterExtension {
    fn format(&self) -> &str {
        "story script"
    }

    fn file_extensions(&self) -> &[&'static str] {
        &["story"]
    }

    async fn import(&self, source: &str) -> FabulaResult<StoryMetadata> {
        parse_script(source)
    }
}

fn syntax_error(line: u32, message: impl Into<String>) -> StoryError {
    StoryError::new(StoryErrorKind::Syntax {
        line,
        message: message.into(),
    })
}

/// Parses one step line (`say …`, `do …`, `go …`, `end`).
///
/// `line` is recorded on steps that carry a source position.
pub(crate) fn parse_step(text: &str, line: u32) -> Result<SceneStep, StoryError> {
    let text = text.trim();
    let (keyword, operand) = text
        .split_once(char::is_whitespace)
        .map(|(keyword, rest)| (keyword, rest.trim()))
        .unwrap_or((text, ""));

    match keyword {
        "say" => {
            if operand.is_empty() {
                return Err(syntax_error(line, "'say' needs text"));
            }
            Ok(SceneStep::Say {
                text: operand.to_string(),
            })
        }
        "do" => {
            let mut words = operand.split_whitespace();
            let verb = words
                .next()
                .ok_or_else(|| syntax_error(line, "'do' needs a verb"))?;
            Ok(SceneStep::Instruction {
                verb: verb.to_string(),
                args: words.map(str::to_string).collect(),
                line,
            })
        }
        "go" => {
            if operand.is_empty() {
                return Err(syntax_error(line, "'go' needs a target scene"));
            }
            if operand.contains(char::is_whitespace) {
                return Err(syntax_error(
                    line,
                    format!("'go' takes a single scene identifier, got '{}'", operand),
                ));
            }
            Ok(SceneStep::GoTo {
                target: operand.to_string(),
                line,
            })
        }
        "end" => {
            if !operand.is_empty() {
                return Err(syntax_error(line, "'end' takes no operand"));
            }
            Ok(SceneStep::End)
        }
        other => Err(syntax_error(line, format!("unknown keyword '{}'", other))),
    }
}

/// Compiles a story script into story metadata.
///
/// # Errors
///
/// Returns [`StoryErrorKind::Syntax`] with the offending 1-based line.
#[instrument(skip_all, fields(bytes = source.len()))]
pub fn parse_script(source: &str) -> FabulaResult<StoryMetadata> {
    let mut name = String::new();
    let mut locale = String::new();
    let mut scenes: Vec<Scene> = Vec::new();

    for (index, raw) in source.lines().enumerate() {
        let line = u32::try_from(index + 1).unwrap_or(u32::MAX);
        let text = raw.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }

        if let Some(directive) = text.strip_prefix('!') {
            if !scenes.is_empty() {
                return Err(syntax_error(line, "directives must precede the first scene").into());
            }
            let (key, value) = directive
                .split_once(char::is_whitespace)
                .map(|(key, value)| (key, value.trim()))
                .unwrap_or((directive, ""));
            if value.is_empty() {
                let message = format!("directive '!{}' needs a value", key);
                return Err(syntax_error(line, message).into());
            }
            match key {
                "name" => name = value.to_string(),
                "locale" => locale = value.to_string(),
                other => {
                    let message = format!("unknown directive '!{}'", other);
                    return Err(syntax_error(line, message).into());
                }
            }
            continue;
        }

        if let Some(id) = text.strip_prefix('@') {
            let id = id.trim();
            if id.is_empty() {
                return Err(syntax_error(line, "scene header needs an identifier").into());
            }
            scenes.push(Scene::new(id).with_line(line));
            continue;
        }

        let step = parse_step(text, line)?;
        let scene = scenes
            .last_mut()
            .ok_or_else(|| syntax_error(line, "step outside of a scene"))?;
        scene.push_step(step);
    }

    debug!(scenes = scenes.len(), "Parsed story script");
    let mut story = StoryMetadata::new(name, locale);
    for scene in scenes {
        story.push_scene(scene);
    }
    Ok(story)
}
