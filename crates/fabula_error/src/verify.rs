//! Verification fault types.
//!
//! A verifier only returns one of these for programming errors. Defects in the
//! story itself are reported as `ImportErrorLine` values instead.

/// Specific fault conditions raised by the verification pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum VerifyErrorKind {
    /// A verifier failed to run to completion
    #[display("Verifier '{}' faulted: {}", verifier, message)]
    VerifierFault {
        /// Verifier name
        verifier: String,
        /// Error message
        message: String,
    },
    /// The story handed to the pipeline violates a precondition
    #[display("Invalid story input: {}", _0)]
    InvalidStory(String),
}

/// Error type for verification faults.
///
/// # Examples
///
/// ```
/// use fabula_error::{VerifyError, VerifyErrorKind};
///
/// let err = VerifyError::new(VerifyErrorKind::InvalidStory("no locale".into()));
/// assert!(format!("{}", err).contains("no locale"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Verify Error: {} at line {} in {}", kind, line, file)]
pub struct VerifyError {
    /// The specific fault condition
    pub kind: VerifyErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl VerifyError {
    /// Create a new VerifyError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: VerifyErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
