//! Error types for the Fabula toolkit.
//!
//! This crate provides the foundation error types used throughout the Fabula workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! Structural defects found in a story are *not* errors in this sense. Verifiers
//! report those as `ImportErrorLine` values; the types here cover construction
//! failures, malformed sources and programming faults.
//!
//! # Examples
//!
//! ```
//! use fabula_error::{ConfigError, FabulaResult};
//!
//! fn read_locale() -> FabulaResult<String> {
//!     Err(ConfigError::invalid_value("story.locale", "not set"))?
//! }
//!
//! assert!(read_locale().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod extension;
mod story;
mod verify;

pub use config::{ConfigError, ConfigErrorKind};
pub use error::{FabulaError, FabulaErrorKind, FabulaResult};
pub use extension::{ExtensionError, ExtensionErrorKind};
pub use story::{StoryError, StoryErrorKind};
pub use verify::{VerifyError, VerifyErrorKind};
