//! Errors raised by the generation facade.

/// Failure conditions for facade operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StudioErrorKind {
    /// Response text is not valid JSON
    #[display("Malformed JSON in model response: {}", _0)]
    MalformedJson(String),
    /// Response is valid JSON but does not match the requested schema
    #[display("Model response violates schema: {}", _0)]
    SchemaViolation(String),
    /// Storyboard could not be parsed; carries the user-facing message
    #[display("{}", _0)]
    StoryboardParse(String),
    /// The service answered but produced nothing usable
    #[display("Empty result from {}", _0)]
    EmptyResult(String),
    /// A generation request could not be assembled
    #[display("Failed to build request: {}", _0)]
    RequestBuild(String),
    /// Status change that the generation lifecycle does not allow
    #[display("Invalid status transition from {} to {}", from, to)]
    InvalidTransition {
        /// Current status
        from: String,
        /// Requested status
        to: String,
    },
}

/// Facade error with location tracking.
///
/// # Examples
///
/// ```
/// use inkwell_error::{StudioError, StudioErrorKind};
///
/// let err = StudioError::new(StudioErrorKind::EmptyResult("cover".to_string()));
/// assert!(format!("{}", err).contains("Empty result from cover"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Studio Error: {} at line {} in {}", kind, line, file)]
pub struct StudioError {
    /// The kind of error that occurred
    pub kind: StudioErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StudioError {
    /// Create a new StudioError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StudioErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StudioErrorKind {
        &self.kind
    }
}
