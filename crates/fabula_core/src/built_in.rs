//! Reserved scene identifiers.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Scene identifiers reserved by the story engine.
///
/// `start` must be defined by every story. `resume` and `help` are global
/// entry points the engine may jump to without an explicit transition.
///
/// # Examples
///
/// ```
/// use fabula_core::BuiltInScene;
///
/// assert_eq!(BuiltInScene::Start.id(), "start");
/// assert_eq!(BuiltInScene::from_id(" HELP "), Some(BuiltInScene::Help));
/// assert_eq!(BuiltInScene::required().count(), 1);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum BuiltInScene {
    /// Entry scene of every story
    #[display("start")]
    Start,
    /// Scene entered when a suspended session comes back
    #[display("resume")]
    Resume,
    /// Scene entered when the user asks for help
    #[display("help")]
    Help,
}

impl BuiltInScene {
    /// Normalized identifier of this scene.
    pub fn id(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Resume => "resume",
            Self::Help => "help",
        }
    }

    /// Whether every story must define this scene.
    pub fn is_required(self) -> bool {
        matches!(self, Self::Start)
    }

    /// Looks up a built-in scene, ignoring case and surrounding whitespace.
    pub fn from_id(id: &str) -> Option<Self> {
        let normalized = crate::normalize_scene_id(id);
        Self::iter().find(|scene| scene.id() == normalized)
    }

    /// Built-in scenes every story must define.
    pub fn required() -> impl Iterator<Item = Self> {
        Self::iter().filter(|scene| scene.is_required())
    }

    /// Identifiers of every reserved scene, in declaration order.
    pub fn all_ids() -> Vec<String> {
        Self::iter().map(|scene| scene.id().to_string()).collect()
    }
}
