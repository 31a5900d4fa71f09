//! Structured defect reports produced by verifiers.

use serde::{Deserialize, Serialize};

/// A single structural defect found in a story.
///
/// `line_number` is 0 when the defect cannot be attributed to a source line.
/// Callers group or localize by `error_name`; the message is for humans.
///
/// # Examples
///
/// ```
/// use fabula_core::ImportErrorLine;
///
/// let line =
///     ImportErrorLine::unattributed("MissingScene", "Cannot find the required scene 'start'.");
/// assert_eq!(*line.line_number(), 0);
/// assert_eq!(line.error_name(), "MissingScene");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_more::Display,
)]
#[serde(rename_all = "camelCase")]
#[display("{error_name} (line {line_number}): {error_message}")]
pub struct ImportErrorLine {
    /// 1-based source line, or 0 when not line-attributable
    line_number: u32,
    /// Symbolic error category
    error_name: String,
    /// Human-readable description
    error_message: String,
}

impl ImportErrorLine {
    /// Creates a defect report attributed to a source line.
    pub fn new(
        line_number: u32,
        error_name: impl Into<String>,
        error_message: impl Into<String>,
    ) -> Self {
        Self {
            line_number,
            error_name: error_name.into(),
            error_message: error_message.into(),
        }
    }

    /// Creates a defect report with no source line.
    pub fn unattributed(error_name: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self::new(0, error_name, error_message)
    }
}
