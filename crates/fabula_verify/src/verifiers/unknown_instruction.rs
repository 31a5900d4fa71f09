//! Instruction verbs no registered extension handles.

use crate::Verifier;
use async_trait::async_trait;
use fabula_core::{ImportErrorLine, StoryMetadata};
use fabula_error::FabulaResult;
use std::collections::BTreeSet;

/// Reports instructions whose verb is not in the known verb set.
///
/// The verb set usually comes from `ExtensionRegistry::instruction_verbs`.
/// Verbs are matched exactly.
#[derive(Debug, Clone, Default)]
pub struct UnknownInstructionVerifier {
    known_verbs: BTreeSet<String>,
}

impl UnknownInstructionVerifier {
    /// Error name reported for an unhandled verb.
    pub const ERROR_NAME: &'static str = "UnknownInstruction";

    /// Create a verifier accepting `verbs`.
    pub fn new<I, S>(verbs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            known_verbs: verbs.into_iter().map(Into::into).collect(),
        }
    }

    /// Verbs this verifier accepts.
    pub fn known_verbs(&self) -> &BTreeSet<String> {
        &self.known_verbs
    }
}

#[async_trait]
impl Verifier for UnknownInstructionVerifier {
    fn name(&self) -> &str {
        "unknown_instruction"
    }

    async fn verify(&self, story: &StoryMetadata) -> FabulaResult<Vec<ImportErrorLine>> {
        let mut errors = Vec::new();
        for scene in story.scenes() {
            for (verb, line) in scene.instructions() {
                if !self.known_verbs.contains(verb) {
                    errors.push(ImportErrorLine::new(
                        line,
                        Self::ERROR_NAME,
                        format!(
                            "Scene '{}' uses unknown instruction '{}'.",
                            scene.id().trim(),
                            verb
                        ),
                    ));
                }
            }
        }
        Ok(errors)
    }
}
