//! Importer for compiled story metadata serialized as JSON.

use async_trait::async_trait;
use fabula_core::StoryMetadata;
use fabula_error::{FabulaResult, StoryError, StoryErrorKind};
use fabula_interface::{Extension, ImporterExtension};

/// Importer for `.json` story metadata, as produced by other compilers.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonImporterExtension;

impl JsonImporterExtension {
    /// Creates the extension.
    pub fn new() -> Self {
        Self
    }
}

impl Extension for JsonImporterExtension {
    fn name(&self) -> &str {
        "json_importer"
    }

    fn as_importer(&self) -> Option<&dyn ImporterExtension> {
        Some(self)
    }
}

#[async_trait]
impl ImporterExtension for JsonImporterExtension {
    fn format(&self) -> &str {
        "json metadata"
    }

    fn file_extensions(&self) -> &[&'static str] {
        &["json"]
    }

    async fn import(&self, source: &str) -> FabulaResult<StoryMetadata> {
        let story = serde_json::from_str(source)
            .map_err(|e| StoryError::new(StoryErrorKind::JsonParse(e.to_string())))?;
        Ok(story)
    }
}
