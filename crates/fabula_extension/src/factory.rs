//! Registration table for extensions.

use crate::{
    JsonImporterExtension, RandomWeekdayExtension, ScriptImporterExtension, SessionExtension,
    TomlImporterExtension,
};
use fabula_error::{ExtensionError, ExtensionErrorKind, FabulaResult};
use fabula_interface::{Extension, ExtensionLoaderParameter};
use std::fmt;
use std::sync::Arc;

type BuildFn =
    Box<dyn Fn(&ExtensionLoaderParameter) -> FabulaResult<Arc<dyn Extension>> + Send + Sync>;

/// A named constructor for one extension.
///
/// Each factory takes only the slice of the loader parameter its extension
/// needs.
pub struct ExtensionFactory {
    name: String,
    build: BuildFn,
}

impl ExtensionFactory {
    /// Create a factory from a constructor closure.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let factory = ExtensionFactory::new("session", |param| {
    ///     SessionExtension::new(param.locale(), param.config().as_ref())
    /// });
    /// ```
    pub fn new<E, F>(name: impl Into<String>, build: F) -> Self
    where
        E: Extension + 'static,
        F: Fn(&ExtensionLoaderParameter) -> FabulaResult<E> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            build: Box::new(move |param| {
                build(param).map(|extension| Arc::new(extension) as Arc<dyn Extension>)
            }),
        }
    }

    /// Factory name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Runs the constructor.
    ///
    /// # Errors
    ///
    /// Returns [`ExtensionErrorKind::Construction`] wrapping whatever the
    /// constructor reported.
    pub fn build(&self, param: &ExtensionLoaderParameter) -> FabulaResult<Arc<dyn Extension>> {
        (self.build)(param).map_err(|e| {
            ExtensionError::new(ExtensionErrorKind::Construction {
                extension: self.name.clone(),
                message: e.to_string(),
            })
            .into()
        })
    }
}

impl fmt::Debug for ExtensionFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtensionFactory")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// The built-in extensions, in registration order.
///
/// Drivers and instructions are consulted in this order when more than one
/// extension applies.
pub fn default_extensions() -> Vec<ExtensionFactory> {
    vec![
        ExtensionFactory::new("random_weekday", |_| Ok(RandomWeekdayExtension::new())),
        ExtensionFactory::new("session", |param| {
            SessionExtension::new(param.locale(), param.config().as_ref())
        }),
        ExtensionFactory::new("story_script_importer", |_| {
            Ok(ScriptImporterExtension::new())
        }),
        ExtensionFactory::new("toml_importer", |param| {
            Ok(TomlImporterExtension::new(param.locale()))
        }),
        ExtensionFactory::new("json_importer", |_| Ok(JsonImporterExtension::new())),
    ]
}
