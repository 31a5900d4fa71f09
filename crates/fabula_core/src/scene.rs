//! Scene nodes of a compiled story.

use serde::{Deserialize, Serialize};

/// Normalizes a scene identifier for comparison: trimmed and lower-cased.
///
/// # Examples
///
/// ```
/// use fabula_core::normalize_scene_id;
///
/// assert_eq!(normalize_scene_id("  Start "), "start");
/// ```
pub fn normalize_scene_id(id: &str) -> String {
    id.trim().to_lowercase()
}

/// One step of a scene's content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SceneStep {
    /// Text spoken to the user
    Say {
        /// Spoken text, may contain `{variable}` placeholders
        text: String,
    },
    /// Invocation of a script verb handled by an instruction extension
    Instruction {
        /// Verb name
        verb: String,
        /// Positional arguments
        #[serde(default)]
        args: Vec<String>,
        /// 1-based source line, 0 when unknown
        #[serde(default)]
        line: u32,
    },
    /// Transition to another scene
    GoTo {
        /// Target scene identifier as written by the author
        target: String,
        /// 1-based source line, 0 when unknown
        #[serde(default)]
        line: u32,
    },
    /// Ends the session
    End,
}

/// A named node in the story graph.
///
/// Scenes reference each other through [`SceneStep::GoTo`] steps; the
/// verifiers treat the rest of the content as opaque.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Scene {
    /// Identifier as written by the author
    id: String,
    /// 1-based line of the scene header, 0 when unknown
    #[serde(default)]
    line: u32,
    /// Ordered scene content
    #[serde(default)]
    steps: Vec<SceneStep>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            line: 0,
            steps: Vec::new(),
        }
    }

    /// Sets the source line of the scene header.
    pub fn with_line(mut self, line: u32) -> Self {
        self.line = line;
        self
    }

    /// Appends a step.
    pub fn with_step(mut self, step: SceneStep) -> Self {
        self.steps.push(step);
        self
    }

    /// Appends a step in place.
    pub fn push_step(&mut self, step: SceneStep) {
        self.steps.push(step);
    }

    /// Identifier trimmed and lower-cased.
    pub fn normalized_id(&self) -> String {
        normalize_scene_id(&self.id)
    }

    /// Whether this scene's identifier matches `id` case- and whitespace-insensitively.
    pub fn matches_id(&self, id: &str) -> bool {
        self.normalized_id() == normalize_scene_id(id)
    }

    /// Outgoing transitions as `(target, line)` pairs, in step order.
    pub fn transitions(&self) -> impl Iterator<Item = (&str, u32)> {
        self.steps.iter().filter_map(|step| match step {
            SceneStep::GoTo { target, line } => Some((target.as_str(), *line)),
            _ => None,
        })
    }

    /// Instruction verbs used by this scene as `(verb, line)` pairs, in step order.
    pub fn instructions(&self) -> impl Iterator<Item = (&str, u32)> {
        self.steps.iter().filter_map(|step| match step {
            SceneStep::Instruction { verb, line, .. } => Some((verb.as_str(), *line)),
            _ => None,
        })
    }
}
