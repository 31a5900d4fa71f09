//! Extension registry for Fabula.
//!
//! This crate assembles the fixed, ordered set of extensions a skill runs with
//! and exposes them to the story engine and the importer by capability.
//!
//! # Features
//!
//! - **Registration table**: extensions are built from an explicit list of
//!   [`ExtensionFactory`] values, never discovered at runtime
//! - **Capability views**: [`ExtensionRegistry::drivers`],
//!   [`ExtensionRegistry::instructions`] and [`ExtensionRegistry::importers`]
//!   in registration order
//! - **Built-ins**: weekday picker, session driver, and story script, TOML and
//!   JSON importers
//!
//! # Example
//!
//! ```rust,ignore
//! use fabula_extension::ExtensionRegistry;
//! use fabula_interface::{ExtensionLoaderParameter, MapConfig};
//! use std::sync::Arc;
//!
//! let param = ExtensionLoaderParameter::new("en-US", Arc::new(MapConfig::new()));
//! let registry = ExtensionRegistry::new(&param)?;
//! let story = registry.import("weekday.story", &source).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builtin;
mod factory;
mod registry;

pub use builtin::{
    JsonImporterExtension, RandomWeekdayExtension, ScriptImporterExtension, SessionExtension,
    TomlImporterExtension, WEEKDAY_NAMES, parse_script,
};
pub use factory::{ExtensionFactory, default_extensions};
pub use registry::ExtensionRegistry;
