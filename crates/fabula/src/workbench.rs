//! Import, verify and publish gate for a single skill.

use crate::FabulaConfig;
use fabula_core::StoryMetadata;
use fabula_error::{FabulaResult, StoryError, StoryErrorKind};
use fabula_extension::ExtensionRegistry;
use fabula_interface::ExtensionLoaderParameter;
use fabula_verify::{VerificationPipeline, VerificationReport, Verifier};
use std::path::Path;
use tracing::{info, instrument, warn};

/// Extension registry paired with the verification pipeline it implies.
///
/// The pipeline is the standard structural checks followed by an unknown
/// instruction check against the verbs the registry's extensions declare.
///
/// # Example
///
/// ```rust,ignore
/// let workbench = SkillWorkbench::from_config(&FabulaConfig::load()?)?;
/// if workbench.check_publishable("weekday.story", &source).await? {
///     publish(&source);
/// }
/// ```
#[derive(Debug, derive_getters::Getters)]
pub struct SkillWorkbench {
    /// Extensions the skill runs with
    registry: ExtensionRegistry,
    /// Checks applied before publishing
    pipeline: VerificationPipeline,
}

impl SkillWorkbench {
    /// Build a workbench from the default extension table.
    ///
    /// # Errors
    ///
    /// Returns an error if any extension fails to construct.
    pub fn new(param: &ExtensionLoaderParameter) -> FabulaResult<Self> {
        Ok(Self::with_registry(ExtensionRegistry::new(param)?))
    }

    /// Build a workbench from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any extension fails to construct.
    pub fn from_config(config: &FabulaConfig) -> FabulaResult<Self> {
        Self::new(&config.loader_parameter())
    }

    /// Wrap an existing registry.
    pub fn with_registry(registry: ExtensionRegistry) -> Self {
        let pipeline =
            VerificationPipeline::standard().with_instruction_check(registry.instruction_verbs());
        Self { registry, pipeline }
    }

    /// Append a verifier to the pipeline.
    pub fn with_verifier(mut self, verifier: impl Verifier + 'static) -> Self {
        self.pipeline = self.pipeline.with_verifier(verifier);
        self
    }

    /// Compile a story source with the matching importer.
    ///
    /// # Errors
    ///
    /// Returns an error if no importer accepts `source_name` or the source is malformed.
    pub async fn import(&self, source_name: &str, source: &str) -> FabulaResult<StoryMetadata> {
        self.registry.import(source_name, source).await
    }

    /// Verify compiled story metadata.
    ///
    /// # Errors
    ///
    /// Returns an error only if a verifier faults.
    pub async fn verify(&self, story: &StoryMetadata) -> FabulaResult<VerificationReport> {
        self.pipeline.run(story).await
    }

    /// Compile and verify a story source.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be imported or a verifier faults.
    #[instrument(skip(self, source))]
    pub async fn import_and_verify(
        &self,
        source_name: &str,
        source: &str,
    ) -> FabulaResult<(StoryMetadata, VerificationReport)> {
        let story = self.import(source_name, source).await?;
        let report = self.verify(&story).await?;

        if report.is_publishable() {
            info!(story = %story.name(), scenes = story.scenes().len(), "Story verified");
        } else {
            warn!(
                story = %story.name(),
                errors = report.len(),
                names = ?report.error_names(),
                "Story has structural defects"
            );
        }

        Ok((story, report))
    }

    /// Read, compile and verify a story file.
    ///
    /// # Errors
    ///
    /// Returns [`StoryErrorKind::FileRead`] if the file cannot be read, or any
    /// error of [`SkillWorkbench::import_and_verify`].
    pub async fn import_file(
        &self,
        path: impl AsRef<Path>,
    ) -> FabulaResult<(StoryMetadata, VerificationReport)> {
        let path = path.as_ref();
        let source = tokio::fs::read_to_string(path).await.map_err(|e| {
            StoryError::new(StoryErrorKind::FileRead(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })?;

        self.import_and_verify(&path.to_string_lossy(), &source).await
    }

    /// Whether a story source compiles and passes every check.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be imported or a verifier faults.
    pub async fn check_publishable(&self, source_name: &str, source: &str) -> FabulaResult<bool> {
        let (_, report) = self.import_and_verify(source_name, source).await?;
        Ok(report.is_publishable())
    }
}
