//! Extension registry error types.

/// Specific error conditions for extension construction and invocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ExtensionErrorKind {
    /// An extension constructor failed while the registry was being built
    #[display("Failed to construct extension '{}': {}", extension, message)]
    Construction {
        /// Name of the extension factory
        extension: String,
        /// Error message
        message: String,
    },
    /// Two extensions were registered under the same name
    #[display("Extension '{}' is already registered", _0)]
    DuplicateExtension(String),
    /// No registered instruction handles the verb
    #[display("No instruction extension handles verb '{}'", _0)]
    UnknownVerb(String),
    /// An instruction was invoked with arguments it cannot accept
    #[display("Invalid arguments for verb '{}': {}", verb, message)]
    InvalidArgument {
        /// Instruction verb
        verb: String,
        /// Error message
        message: String,
    },
    /// A story variable an extension maintains holds an unexpected value
    #[display("Story variable '{}' is invalid: {}", key, message)]
    InvalidState {
        /// Story variable name
        key: String,
        /// Error message
        message: String,
    },
}

/// Error type for extension operations.
///
/// # Examples
///
/// ```
/// use fabula_error::{ExtensionError, ExtensionErrorKind};
///
/// let err = ExtensionError::new(ExtensionErrorKind::UnknownVerb("shuffle".into()));
/// assert!(format!("{}", err).contains("shuffle"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Extension Error: {} at line {} in {}", kind, line, file)]
pub struct ExtensionError {
    /// The specific error condition
    pub kind: ExtensionErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ExtensionError {
    /// Create a new ExtensionError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ExtensionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
