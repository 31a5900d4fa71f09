//! Story source error types.

/// Specific error conditions while reading or importing a story source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StoryErrorKind {
    /// Failed to read story source file
    #[display("Failed to read story source: {}", _0)]
    FileRead(String),
    /// Story script line could not be parsed
    #[display("Syntax error on line {}: {}", line, message)]
    Syntax {
        /// 1-based source line
        line: u32,
        /// Error message
        message: String,
    },
    /// Failed to parse TOML content
    #[display("Failed to parse TOML: {}", _0)]
    TomlParse(String),
    /// Failed to parse JSON content
    #[display("Failed to parse JSON: {}", _0)]
    JsonParse(String),
    /// No importer accepts the source
    #[display("No importer accepts source '{}'", _0)]
    UnsupportedSource(String),
}

/// Error type for story import operations.
///
/// # Examples
///
/// ```
/// use fabula_error::{StoryError, StoryErrorKind};
///
/// let err = StoryError::new(StoryErrorKind::Syntax {
///     line: 3,
///     message: "unknown keyword 'sya'".into(),
/// });
/// assert!(format!("{}", err).contains("line 3"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Story Error: {} at line {} in {}", kind, line, file)]
pub struct StoryError {
    /// The specific error condition
    pub kind: StoryErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl StoryError {
    /// Create a new StoryError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StoryErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
