//! Fabula - story toolkit for voice skills
//!
//! Fabula turns a declarative story script into compiled scene metadata,
//! checks it for structural defects before a skill is published, and hosts the
//! extensions the story engine calls while a skill runs.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use fabula::{FabulaConfig, SkillWorkbench, init_tracing};
//!
//! #[tokio::main]
//! async fn main() -> fabula::FabulaResult<()> {
//!     let config = FabulaConfig::load()?;
//!     init_tracing(config.logging().level(), *config.logging().json())?;
//!
//!     let workbench = SkillWorkbench::from_config(&config)?;
//!     let (story, report) = workbench.import_file("weekday.story").await?;
//!     for line in report.errors() {
//!         println!("{}: {}", story.name(), line);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `fabula_error` - Error types
//! - `fabula_core` - Story model (scenes, steps, built-in scenes, defect lines)
//! - `fabula_interface` - Extension capability contracts
//! - `fabula_extension` - Extension registry and built-in extensions
//! - `fabula_verify` - Verifiers and the verification pipeline
//!
//! This crate re-exports everything for convenience and adds configuration
//! loading, logging setup and [`SkillWorkbench`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod observability;
mod workbench;

pub use config::{FabulaConfig, LoggingConfig, StoryConfig};
pub use observability::init_tracing;
pub use workbench::SkillWorkbench;

pub use fabula_core::{
    BuiltInScene, ImportErrorLine, Scene, SceneStep, StoryMetadata, StoryState,
    normalize_scene_id,
};
pub use fabula_error::{
    ConfigError, ConfigErrorKind, ExtensionError, ExtensionErrorKind, FabulaError,
    FabulaErrorKind, FabulaResult, StoryError, StoryErrorKind, VerifyError, VerifyErrorKind,
};
pub use fabula_extension::{
    ExtensionFactory, ExtensionRegistry, JsonImporterExtension, RandomWeekdayExtension,
    ScriptImporterExtension, SessionExtension, TomlImporterExtension, WEEKDAY_NAMES,
    default_extensions, parse_script,
};
pub use fabula_interface::{
    Capability, ConfigAccessor, DriverExtension, Extension, ExtensionLoaderParameter,
    ImporterExtension, InstructionExtension, InstructionExtensionParameter, MapConfig,
    TurnContext,
};
pub use fabula_verify::{
    DanglingReferenceVerifier, DuplicateSceneVerifier, StartSceneVerifier,
    UnknownInstructionVerifier, UnreachableSceneVerifier, VerificationPipeline,
    VerificationReport, Verifier,
};
