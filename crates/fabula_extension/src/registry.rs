//! The extension registry.

use crate::{ExtensionFactory, default_extensions};
use fabula_core::StoryMetadata;
use fabula_error::{ExtensionError, ExtensionErrorKind, FabulaResult, StoryError, StoryErrorKind};
use fabula_interface::{
    DriverExtension, Extension, ExtensionLoaderParameter, ImporterExtension, InstructionExtension,
    InstructionExtensionParameter, TurnContext,
};
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Fixed, ordered set of extensions available to a skill.
///
/// The registry is built once and never changes afterwards. It is safe to share
/// between concurrent story executions.
///
/// # Example
///
/// ```rust,ignore
/// use fabula_extension::ExtensionRegistry;
///
/// let registry = ExtensionRegistry::new(&param)?;
/// for driver in registry.drivers() {
///     driver.on_turn_start(&mut context).await?;
/// }
/// ```
pub struct ExtensionRegistry {
    locale: String,
    extensions: Vec<Arc<dyn Extension>>,
}

impl ExtensionRegistry {
    /// Build a registry from the built-in registration table.
    ///
    /// # Errors
    ///
    /// Returns an error if any built-in extension fails to construct.
    pub fn new(param: &ExtensionLoaderParameter) -> FabulaResult<Self> {
        Self::from_factories(param, default_extensions())
    }

    /// Build a registry from an explicit registration table.
    ///
    /// Factories run in order. Construction stops at the first failure; a
    /// registry is never partially built.
    ///
    /// # Errors
    ///
    /// Returns an error if a factory fails or two extensions share a name.
    #[instrument(skip_all, fields(locale = %param.locale()))]
    pub fn from_factories(
        param: &ExtensionLoaderParameter,
        factories: impl IntoIterator<Item = ExtensionFactory>,
    ) -> FabulaResult<Self> {
        let mut extensions: Vec<Arc<dyn Extension>> = Vec::new();
        let mut names = HashSet::new();

        for factory in factories {
            let extension = factory.build(param)?;
            if !names.insert(extension.name().to_string()) {
                return Err(ExtensionError::new(ExtensionErrorKind::DuplicateExtension(
                    extension.name().to_string(),
                ))
                .into());
            }
            debug!(
                factory = factory.name(),
                extension = extension.name(),
                capabilities = ?extension.capabilities(),
                "Registered extension"
            );
            extensions.push(extension);
        }

        info!(count = extensions.len(), "Extension registry ready");
        Ok(Self {
            locale: param.locale().clone(),
            extensions,
        })
    }

    /// Every registered extension, in registration order.
    pub fn get_extensions(&self) -> &[Arc<dyn Extension>] {
        &self.extensions
    }

    /// Locale the registry was built for.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Get the number of registered extensions.
    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    /// Looks up an extension by name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Extension>> {
        self.extensions.iter().find(|extension| extension.name() == name)
    }

    /// Driver facets, in registration order.
    pub fn drivers(&self) -> impl Iterator<Item = &dyn DriverExtension> + '_ {
        self.extensions.iter().filter_map(|extension| extension.as_driver())
    }

    /// Instruction facets, in registration order.
    pub fn instructions(&self) -> impl Iterator<Item = &dyn InstructionExtension> + '_ {
        self.extensions
            .iter()
            .filter_map(|extension| extension.as_instruction())
    }

    /// Importer facets, in registration order.
    pub fn importers(&self) -> impl Iterator<Item = &dyn ImporterExtension> + '_ {
        self.extensions
            .iter()
            .filter_map(|extension| extension.as_importer())
    }

    /// Every verb handled by some instruction extension.
    pub fn instruction_verbs(&self) -> BTreeSet<String> {
        self.instructions()
            .flat_map(|instruction| instruction.verbs().iter())
            .map(|verb| verb.to_string())
            .collect()
    }

    /// First instruction extension, in registration order, handling `verb`.
    pub fn find_instruction(&self, verb: &str) -> Option<&dyn InstructionExtension> {
        self.instructions().find(|instruction| instruction.handles(verb))
    }

    /// First importer, in registration order, accepting `source_name`.
    pub fn importer_for(&self, source_name: &str) -> Option<&dyn ImporterExtension> {
        self.importers().find(|importer| importer.can_import(source_name))
    }

    /// Runs every driver's turn-start hook in registration order.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first hook error.
    #[instrument(skip_all, fields(scene = %context.scene_id, turn = context.turn))]
    pub async fn run_turn_start(&self, context: &mut TurnContext<'_>) -> FabulaResult<()> {
        for extension in &self.extensions {
            if let Some(driver) = extension.as_driver() {
                driver.on_turn_start(context).await?;
                debug!(extension = extension.name(), "Turn start hook ran");
            }
        }
        Ok(())
    }

    /// Runs every driver's turn-end hook in registration order.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first hook error.
    #[instrument(skip_all, fields(scene = %context.scene_id, turn = context.turn))]
    pub async fn run_turn_end(&self, context: &mut TurnContext<'_>) -> FabulaResult<()> {
        for extension in &self.extensions {
            if let Some(driver) = extension.as_driver() {
                driver.on_turn_end(context).await?;
                debug!(extension = extension.name(), "Turn end hook ran");
            }
        }
        Ok(())
    }

    /// Dispatches `verb` to the first instruction extension handling it.
    ///
    /// # Errors
    ///
    /// Returns [`ExtensionErrorKind::UnknownVerb`] if no extension handles the
    /// verb, or the extension's own error.
    #[instrument(skip(self, param))]
    pub async fn invoke_instruction(
        &self,
        verb: &str,
        param: &mut InstructionExtensionParameter<'_>,
    ) -> FabulaResult<()> {
        let instruction = self.find_instruction(verb).ok_or_else(|| {
            ExtensionError::new(ExtensionErrorKind::UnknownVerb(verb.to_string()))
        })?;
        instruction.invoke(verb, param).await
    }

    /// Imports a story source with the first importer accepting its name.
    ///
    /// Stories that declare no locale inherit the registry locale.
    ///
    /// # Errors
    ///
    /// Returns [`StoryErrorKind::UnsupportedSource`] if no importer accepts
    /// the name, or the importer's own error.
    #[instrument(skip(self, source), fields(bytes = source.len()))]
    pub async fn import(&self, source_name: &str, source: &str) -> FabulaResult<StoryMetadata> {
        let importer = self.importer_for(source_name).ok_or_else(|| {
            StoryError::new(StoryErrorKind::UnsupportedSource(source_name.to_string()))
        })?;
        debug!(format = importer.format(), "Importing story source");

        let mut story = importer.import(source).await?;
        story.set_default_locale(&self.locale);
        Ok(story)
    }
}

impl fmt::Debug for ExtensionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.extensions.iter().map(|e| e.name()).collect();
        f.debug_struct("ExtensionRegistry")
            .field("locale", &self.locale)
            .field("extensions", &names)
            .finish()
    }
}
