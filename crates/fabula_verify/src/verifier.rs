//! The verifier contract.

use async_trait::async_trait;
use fabula_core::{ImportErrorLine, StoryMetadata};
use fabula_error::FabulaResult;

/// An analysis pass over compiled story metadata.
///
/// Verifiers never mutate the story and never depend on another verifier
/// having run. Structural defects are returned as [`ImportErrorLine`]s in scan
/// order over `story.scenes()`.
///
/// # Example
///
/// ```rust,ignore
/// use fabula_verify::Verifier;
/// use async_trait::async_trait;
///
/// struct NonEmpty;
///
/// #[async_trait]
/// impl Verifier for NonEmpty {
///     fn name(&self) -> &str {
///         "non_empty"
///     }
///
///     async fn verify(&self, story: &StoryMetadata) -> FabulaResult<Vec<ImportErrorLine>> {
///         if story.scenes().is_empty() {
///             let line = ImportErrorLine::unattributed("EmptyStory", "The story has no scenes.");
///             return Ok(vec![line]);
///         }
///         Ok(Vec::new())
///     }
/// }
/// ```
#[async_trait]
pub trait Verifier: Send + Sync {
    /// Human-readable name used in logs and fault messages.
    fn name(&self) -> &str;

    /// Checks the story.
    ///
    /// # Errors
    ///
    /// Returns an error only for programming errors, such as metadata that
    /// violates the compiler contract. Story defects are never errors.
    async fn verify(&self, story: &StoryMetadata) -> FabulaResult<Vec<ImportErrorLine>>;
}
