//! Composition of verifiers.

use crate::{
    DanglingReferenceVerifier, DuplicateSceneVerifier, StartSceneVerifier,
    UnknownInstructionVerifier, UnreachableSceneVerifier, VerificationReport, Verifier,
};
use fabula_core::{ImportErrorLine, StoryMetadata};
use fabula_error::{FabulaError, FabulaResult, VerifyError, VerifyErrorKind};
use futures::future::join_all;
use std::fmt;
use tracing::{debug, info, instrument, warn};

/// Ordered set of independent verifiers.
///
/// Verifiers run concurrently against the same story. Their reports are
/// concatenated in registration order regardless of completion order. A
/// verifier fault fails the whole run; a partial report is never returned.
/// When several verifiers fault, the earliest registered one is reported.
///
/// # Example
///
/// ```rust,ignore
/// use fabula_verify::{StartSceneVerifier, VerificationPipeline};
///
/// let pipeline = VerificationPipeline::new().with_verifier(StartSceneVerifier::new());
/// let report = pipeline.run(&story).await?;
/// ```
#[derive(Default)]
pub struct VerificationPipeline {
    verifiers: Vec<Box<dyn Verifier>>,
}

impl VerificationPipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pipeline with the built-in structural checks: start scene, duplicate
    /// scenes, dangling references, unreachable scenes.
    pub fn standard() -> Self {
        Self::new()
            .with_verifier(StartSceneVerifier::new())
            .with_verifier(DuplicateSceneVerifier::new())
            .with_verifier(DanglingReferenceVerifier::new())
            .with_verifier(UnreachableSceneVerifier::new())
    }

    /// Appends an [`UnknownInstructionVerifier`] accepting `verbs`.
    pub fn with_instruction_check<I, S>(self, verbs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_verifier(UnknownInstructionVerifier::new(verbs))
    }

    /// Appends a verifier.
    pub fn with_verifier(mut self, verifier: impl Verifier + 'static) -> Self {
        self.register(Box::new(verifier));
        self
    }

    /// Appends a boxed verifier.
    pub fn register(&mut self, verifier: Box<dyn Verifier>) {
        self.verifiers.push(verifier);
    }

    /// Get the number of registered verifiers.
    pub fn len(&self) -> usize {
        self.verifiers.len()
    }

    /// Check if the pipeline is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.verifiers.is_empty()
    }

    /// Names of the registered verifiers, in registration order.
    pub fn verifier_names(&self) -> Vec<&str> {
        self.verifiers.iter().map(|verifier| verifier.name()).collect()
    }

    /// Runs every verifier and aggregates their reports.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyErrorKind::VerifierFault`] naming the first verifier,
    /// in registration order, that failed.
    #[instrument(
        skip_all,
        fields(
            story = %story.name(),
            scenes = story.scenes().len(),
            verifiers = self.verifiers.len()
        )
    )]
    pub async fn run(&self, story: &StoryMetadata) -> FabulaResult<VerificationReport> {
        let runs = self.verifiers.iter().map(|verifier| async move {
            let result = verifier.verify(story).await;
            match &result {
                Ok(lines) => {
                    debug!(verifier = verifier.name(), errors = lines.len(), "Verifier finished")
                }
                Err(e) => warn!(verifier = verifier.name(), error = %e, "Verifier faulted"),
            }
            result
        });

        let mut errors: Vec<ImportErrorLine> = Vec::new();
        for (verifier, result) in self.verifiers.iter().zip(join_all(runs).await) {
            let lines = result.map_err(|e| {
                FabulaError::from(VerifyError::new(VerifyErrorKind::VerifierFault {
                    verifier: verifier.name().to_string(),
                    message: e.to_string(),
                }))
            })?;
            errors.extend(lines);
        }

        info!(errors = errors.len(), "Verification finished");
        Ok(VerificationReport::new(errors))
    }
}

impl fmt::Debug for VerificationPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerificationPipeline")
            .field("verifiers", &self.verifier_names())
            .finish()
    }
}
