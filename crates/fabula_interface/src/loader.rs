//! Construction-time parameters for the extension registry.

use crate::ConfigAccessor;
use std::sync::Arc;

/// Configuration handed to every extension factory while a registry is built.
///
/// Factories take the slice they need (nothing, the locale, or the locale and
/// the accessor). The parameter itself is not retained by the registry.
#[derive(Debug, Clone, derive_getters::Getters)]
pub struct ExtensionLoaderParameter {
    /// Locale of the skill, e.g. `en-US`
    locale: String,
    /// Accessor into external configuration
    config: Arc<dyn ConfigAccessor>,
}

impl ExtensionLoaderParameter {
    /// Creates a loader parameter.
    pub fn new(locale: impl Into<String>, config: Arc<dyn ConfigAccessor>) -> Self {
        Self {
            locale: locale.into(),
            config,
        }
    }
}
