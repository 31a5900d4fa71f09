//! Capability contracts for Fabula extensions.
//!
//! An extension is a single object that may implement any subset of three
//! unrelated capability families:
//!
//! - [`DriverExtension`] hooks into turn execution of the story engine
//! - [`InstructionExtension`] adds script verbs that mutate story state
//! - [`ImporterExtension`] adds a story source format to the compiler
//!
//! Callers hold an extension as `Arc<dyn Extension>` and ask for the facet
//! they need through [`Extension::as_driver`], [`Extension::as_instruction`]
//! or [`Extension::as_importer`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod capability;
mod config_access;
mod extension;
mod loader;

pub use capability::Capability;
pub use config_access::{ConfigAccessor, MapConfig};
pub use extension::{
    DriverExtension, Extension, ImporterExtension, InstructionExtension,
    InstructionExtensionParameter, TurnContext,
};
pub use loader::ExtensionLoaderParameter;
