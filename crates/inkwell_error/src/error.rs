//! Top-level error wrapper types.

use crate::{
    ConfigError, GeminiError, GeminiErrorKind, JsonError, RetryableError, StorageError, StudioError,
    StudioErrorKind,
};

/// Every error condition an Inkwell crate can produce.
///
/// # Examples
///
/// ```
/// use inkwell_error::{GeminiError, GeminiErrorKind, InkwellError};
///
/// let gemini_err = GeminiError::new(GeminiErrorKind::Transport("connection reset".to_string()));
/// let err: InkwellError = gemini_err.into();
/// assert!(format!("{}", err).contains("connection reset"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum InkwellErrorKind {
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Gemini provider error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Generation facade error
    #[from(StudioError)]
    Studio(StudioError),
    /// Project or image file error
    #[from(StorageError)]
    Storage(StorageError),
}

/// Inkwell error with kind discrimination.
///
/// # Examples
///
/// ```
/// use inkwell_error::{InkwellError, InkwellResult, ConfigError};
///
/// fn might_fail() -> InkwellResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Inkwell Error: {}", _0)]
pub struct InkwellError(Box<InkwellErrorKind>);

impl InkwellError {
    /// Create a new error from a kind.
    pub fn new(kind: InkwellErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &InkwellErrorKind {
        &self.0
    }

    /// Get the studio error kind, if this is a facade error.
    pub fn studio_kind(&self) -> Option<&StudioErrorKind> {
        match self.kind() {
            InkwellErrorKind::Studio(err) => Some(err.kind()),
            _ => None,
        }
    }

    /// Get the Gemini error kind, if this is a provider error.
    pub fn gemini_kind(&self) -> Option<&GeminiErrorKind> {
        match self.kind() {
            InkwellErrorKind::Gemini(err) => Some(&err.kind),
            _ => None,
        }
    }
}

// Generic From implementation for any type that converts to InkwellErrorKind
impl<T> From<T> for InkwellError
where
    T: Into<InkwellErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

impl RetryableError for InkwellError {
    fn is_retryable(&self) -> bool {
        match self.kind() {
            InkwellErrorKind::Gemini(err) => err.is_retryable(),
            _ => false,
        }
    }

    fn retry_strategy_params(&self) -> (u64, usize, u64) {
        match self.kind() {
            InkwellErrorKind::Gemini(err) => err.retry_strategy_params(),
            _ => (2000, 5, 60),
        }
    }
}

/// Result type for Inkwell operations.
///
/// # Examples
///
/// ```
/// use inkwell_error::{InkwellResult, JsonError};
///
/// fn load_page() -> InkwellResult<String> {
///     Err(JsonError::new("expected an array"))?
/// }
/// ```
pub type InkwellResult<T> = std::result::Result<T, InkwellError>;
