//! Configuration error types.
//!
//! Covers loading the layered `fabula.toml` files and reading individual keys
//! through a configuration accessor.

/// Specific configuration failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ConfigErrorKind {
    /// A configuration source could not be read or merged
    #[display("Failed to build configuration: {}", _0)]
    Build(String),
    /// The merged configuration does not match the expected sections
    #[display("Failed to parse configuration: {}", _0)]
    Parse(String),
    /// A key holds a value of the wrong type or range
    #[display("Invalid value for '{}': {}", key, message)]
    InvalidValue {
        /// Dotted configuration key
        key: String,
        /// What is wrong with the value
        message: String,
    },
    /// A log filter directive is malformed
    #[display("Invalid log filter '{}': {}", filter, message)]
    InvalidFilter {
        /// Filter directive as given
        filter: String,
        /// Parser message
        message: String,
    },
}

/// Configuration error with source location.
///
/// # Examples
///
/// ```
/// use fabula_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::InvalidValue {
///     key: "extensions.session.max_turns".into(),
///     message: "must be positive".into(),
/// });
/// assert!(format!("{}", err).contains("extensions.session.max_turns"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    /// The specific failure
    pub kind: ConfigErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for [`ConfigErrorKind::InvalidValue`].
    #[track_caller]
    pub fn invalid_value(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ConfigErrorKind::InvalidValue {
            key: key.into(),
            message: message.into(),
        })
    }
}
