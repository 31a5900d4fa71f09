//! Random weekday instruction.

use async_trait::async_trait;
use fabula_error::{ExtensionError, ExtensionErrorKind, FabulaResult};
use fabula_interface::{Extension, InstructionExtension, InstructionExtensionParameter};
use rand::seq::SliceRandom;
use tracing::debug;

/// Canonical weekday names written by [`RandomWeekdayExtension`].
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Instruction `pick_random_weekday`: stores a uniformly random weekday name
/// under `random_weekday`.
///
/// The verb takes no arguments and writes no other key.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomWeekdayExtension;

impl RandomWeekdayExtension {
    /// Script verb.
    pub const VERB: &'static str = "pick_random_weekday";
    /// Story variable written by the verb.
    pub const STATE_KEY: &'static str = "random_weekday";

    /// Creates the extension.
    pub fn new() -> Self {
        Self
    }
}

fn pick_weekday() -> &'static str {
    WEEKDAY_NAMES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(WEEKDAY_NAMES[0])
}

impl Extension for RandomWeekdayExtension {
    fn name(&self) -> &str {
        "random_weekday"
    }

    fn as_instruction(&self) -> Option<&dyn InstructionExtension> {
        Some(self)
    }
}

#[async_trait]
impl InstructionExtension for RandomWeekdayExtension {
    fn verbs(&self) -> &[&'static str] {
        &[Self::VERB]
    }

    async fn invoke(
        &self,
        verb: &str,
        param: &mut InstructionExtensionParameter<'_>,
    ) -> FabulaResult<()> {
        if verb != Self::VERB {
            return Err(
                ExtensionError::new(ExtensionErrorKind::UnknownVerb(verb.to_string())).into(),
            );
        }
        if !param.args.is_empty() {
            return Err(ExtensionError::new(ExtensionErrorKind::InvalidArgument {
                verb: verb.to_string(),
                message: format!("expected no arguments, got {}", param.args.len()),
            })
            .into());
        }

        let day = pick_weekday();
        debug!(day, "Picked random weekday");
        param.state.set(Self::STATE_KEY, day);
        Ok(())
    }
}
