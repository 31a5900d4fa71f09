//! Extension trait and its capability facets.

use crate::Capability;
use async_trait::async_trait;
use fabula_core::{StoryMetadata, StoryState};
use fabula_error::FabulaResult;
use std::path::Path;
use strum::IntoEnumIterator;

/// A registered plugin.
///
/// Each facet accessor returns `Some` when the plugin implements that
/// capability. A plugin implementing none is legal but inert.
///
/// # Example
///
/// ```rust,ignore
/// use fabula_interface::{Extension, InstructionExtension};
///
/// struct Coin;
///
/// impl Extension for Coin {
///     fn name(&self) -> &str {
///         "coin"
///     }
///
///     fn as_instruction(&self) -> Option<&dyn InstructionExtension> {
///         Some(self)
///     }
/// }
/// ```
pub trait Extension: Send + Sync {
    /// Stable, unique name used for logging and duplicate detection.
    fn name(&self) -> &str;

    /// Driver facet.
    fn as_driver(&self) -> Option<&dyn DriverExtension> {
        None
    }

    /// Instruction facet.
    fn as_instruction(&self) -> Option<&dyn InstructionExtension> {
        None
    }

    /// Importer facet.
    fn as_importer(&self) -> Option<&dyn ImporterExtension> {
        None
    }

    /// Whether this extension implements `capability`.
    fn implements(&self, capability: Capability) -> bool {
        match capability {
            Capability::Driver => self.as_driver().is_some(),
            Capability::Instruction => self.as_instruction().is_some(),
            Capability::Importer => self.as_importer().is_some(),
        }
    }

    /// Every capability this extension implements, in declaration order.
    fn capabilities(&self) -> Vec<Capability> {
        Capability::iter()
            .filter(|capability| self.implements(*capability))
            .collect()
    }
}

/// Per-turn context passed to driver hooks.
#[derive(Debug)]
pub struct TurnContext<'a> {
    /// Identifier of the scene being executed
    pub scene_id: &'a str,
    /// 1-based turn number within the session
    pub turn: u32,
    /// Story variables owned by this turn
    pub state: &'a mut StoryState,
}

/// Hooks invoked by the story engine around each turn.
///
/// Both hooks default to doing nothing.
#[async_trait]
pub trait DriverExtension: Send + Sync {
    /// Called before the scene of a turn is executed.
    async fn on_turn_start(&self, _context: &mut TurnContext<'_>) -> FabulaResult<()> {
        Ok(())
    }

    /// Called after the scene of a turn has been executed.
    async fn on_turn_end(&self, _context: &mut TurnContext<'_>) -> FabulaResult<()> {
        Ok(())
    }
}

/// Arguments for one instruction invocation.
#[derive(Debug)]
pub struct InstructionExtensionParameter<'a> {
    /// Story variables owned by the current turn
    pub state: &'a mut StoryState,
    /// Positional arguments written after the verb
    pub args: &'a [String],
}

impl<'a> InstructionExtensionParameter<'a> {
    /// Creates a parameter with no arguments.
    pub fn new(state: &'a mut StoryState) -> Self {
        Self { state, args: &[] }
    }

    /// Creates a parameter with positional arguments.
    pub fn with_args(state: &'a mut StoryState, args: &'a [String]) -> Self {
        Self { state, args }
    }
}

/// Custom script verbs.
///
/// An invocation produces no value. Its only observable effect is the
/// mutation of `param.state`.
#[async_trait]
pub trait InstructionExtension: Send + Sync {
    /// Verbs this extension handles.
    fn verbs(&self) -> &[&'static str];

    /// Whether `verb` is handled by this extension.
    fn handles(&self, verb: &str) -> bool {
        self.verbs().iter().any(|known| *known == verb)
    }

    /// Executes `verb` against the story state.
    ///
    /// # Errors
    ///
    /// Returns an error if the verb is not handled by this extension or its
    /// arguments are invalid.
    async fn invoke(
        &self,
        verb: &str,
        param: &mut InstructionExtensionParameter<'_>,
    ) -> FabulaResult<()>;
}

/// Additional story source formats.
#[async_trait]
pub trait ImporterExtension: Send + Sync {
    /// Human-readable format name.
    fn format(&self) -> &str;

    /// File extensions (without the dot) recognised by this importer.
    fn file_extensions(&self) -> &[&'static str];

    /// Whether a source with this name can be imported.
    fn can_import(&self, source_name: &str) -> bool {
        Path::new(source_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                self.file_extensions()
                    .iter()
                    .any(|known| known.eq_ignore_ascii_case(ext))
            })
            .unwrap_or(false)
    }

    /// Compiles source text into story metadata.
    ///
    /// # Errors
    ///
    /// Returns an error if the source is malformed.
    async fn import(&self, source: &str) -> FabulaResult<StoryMetadata>;
}
