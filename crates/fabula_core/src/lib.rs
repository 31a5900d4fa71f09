//! Core data types for the Fabula skill authoring toolkit.
//!
//! This crate provides the compiled story model shared by the importers, the
//! extension registry and the verification pipeline.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod built_in;
mod import_error;
mod scene;
mod state;
mod story;

pub use built_in::BuiltInScene;
pub use import_error::ImportErrorLine;
pub use scene::{Scene, SceneStep, normalize_scene_id};
pub use state::StoryState;
pub use story::StoryMetadata;
