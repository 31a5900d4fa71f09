//! Top-level error wrapper types.

use crate::{ConfigError, ExtensionError, StoryError, VerifyError};

/// Every error condition a Fabula operation can surface.
///
/// # Examples
///
/// ```
/// use fabula_error::{FabulaError, ConfigError};
///
/// let config_err = ConfigError::invalid_value("story.locale", "missing");
/// let err: FabulaError = config_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum FabulaErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Extension construction or invocation error
    #[from(ExtensionError)]
    Extension(ExtensionError),
    /// Story source error
    #[from(StoryError)]
    Story(StoryError),
    /// Verification fault
    #[from(VerifyError)]
    Verify(VerifyError),
}

/// Fabula error with kind discrimination.
///
/// # Examples
///
/// ```
/// use fabula_error::{FabulaError, FabulaErrorKind, FabulaResult, ConfigError};
///
/// fn might_fail() -> FabulaResult<()> {
///     Err(ConfigError::invalid_value("logging.level", "missing"))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(matches!(err.kind(), FabulaErrorKind::Config(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Fabula Error: {}", _0)]
pub struct FabulaError(Box<FabulaErrorKind>);

impl FabulaError {
    /// Create a new error from a kind.
    pub fn new(kind: FabulaErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &FabulaErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to FabulaErrorKind
impl<T> From<T> for FabulaError
where
    T: Into<FabulaErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Fabula operations.
pub type FabulaResult<T> = std::result::Result<T, FabulaError>;
