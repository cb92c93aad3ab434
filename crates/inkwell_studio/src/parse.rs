//! Parsing schema-constrained JSON out of model responses.
//!
//! Model responses sometimes wrap JSON in a markdown code block even when a
//! response schema is set. Parsing accepts the raw text or a response that
//! is one whole code block, checks that it is JSON at all, then checks it
//! against the expected shape. Each stage has its own outcome so callers can
//! tell a garbled response from a well-formed one with the wrong fields.

use inkwell_error::{InkwellResult, StudioError, StudioErrorKind};
use serde::de::DeserializeOwned;

/// Outcome of parsing a structured model response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedResponse<T> {
    /// Parsed and matched the expected shape
    Valid(T),
    /// Not valid JSON; carries the parser message
    MalformedJson(String),
    /// Valid JSON with the wrong shape; carries the deserializer message
    SchemaViolation(String),
}

/// What to do with a response that did not parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ParsePolicy {
    /// Substitute an empty value and log a warning
    Degrade,
    /// Return the parse failure as an error
    Fail,
}

impl<T> ParsedResponse<T> {
    /// Whether the response parsed into the expected shape.
    pub fn is_valid(&self) -> bool {
        matches!(self, ParsedResponse::Valid(_))
    }

    /// Convert into a result, turning parse failures into studio errors.
    #[track_caller]
    pub fn into_result(self) -> InkwellResult<T> {
        match self {
            ParsedResponse::Valid(value) => Ok(value),
            ParsedResponse::MalformedJson(message) => {
                Err(StudioError::new(StudioErrorKind::MalformedJson(message)).into())
            }
            ParsedResponse::SchemaViolation(message) => {
                Err(StudioError::new(StudioErrorKind::SchemaViolation(message)).into())
            }
        }
    }

    /// Resolve the outcome under a policy.
    ///
    /// # Examples
    ///
    /// ```
    /// use inkwell_studio::{ParsePolicy, parse_structured};
    ///
    /// let outcome = parse_structured::<Vec<u32>>("not json");
    /// assert_eq!(outcome.clone().resolve(ParsePolicy::Degrade).unwrap(), Vec::<u32>::new());
    /// assert!(outcome.resolve(ParsePolicy::Fail).is_err());
    /// ```
    #[track_caller]
    pub fn resolve(self, policy: ParsePolicy) -> InkwellResult<T>
    where
        T: Default,
    {
        match (self, policy) {
            (ParsedResponse::Valid(value), _) => Ok(value),
            (invalid, ParsePolicy::Fail) => invalid.into_result(),
            (ParsedResponse::MalformedJson(message), ParsePolicy::Degrade) => {
                tracing::warn!(error = %message, "Malformed JSON in model response, using empty value");
                Ok(T::default())
            }
            (ParsedResponse::SchemaViolation(message), ParsePolicy::Degrade) => {
                tracing::warn!(error = %message, "Model response violates schema, using empty value");
                Ok(T::default())
            }
        }
    }
}

/// Parse a model response into `T`.
///
/// The trimmed response is parsed as-is first. Only when that fails, and the
/// whole response is a single markdown code block, is the block's content
/// parsed instead. JSON surrounded by prose is reported as malformed rather
/// than salvaged.
///
/// # Examples
///
/// ```
/// use inkwell_studio::{ParsedResponse, parse_structured};
///
/// let fenced = "```json\n[1, 2, 3]\n```";
/// assert_eq!(parse_structured::<Vec<u32>>(fenced), ParsedResponse::Valid(vec![1, 2, 3]));
///
/// assert!(matches!(parse_structured::<Vec<u32>>("Here: [1, 2, 3]"), ParsedResponse::MalformedJson(_)));
/// assert!(matches!(parse_structured::<Vec<u32>>("[1, 2"), ParsedResponse::MalformedJson(_)));
/// assert!(matches!(parse_structured::<Vec<u32>>("{\"a\": 1}"), ParsedResponse::SchemaViolation(_)));
/// ```
pub fn parse_structured<T: DeserializeOwned>(response: &str) -> ParsedResponse<T> {
    let trimmed = response.trim();

    let value: serde_json::Value = match serde_json::from_str(trimmed) {
        Ok(value) => value,
        Err(e) => match strip_code_fence(trimmed) {
            Some(body) => match serde_json::from_str(body) {
                Ok(value) => value,
                Err(e) => return ParsedResponse::MalformedJson(e.to_string()),
            },
            None => return ParsedResponse::MalformedJson(e.to_string()),
        },
    };

    match serde_json::from_value(value) {
        Ok(parsed) => ParsedResponse::Valid(parsed),
        Err(e) => ParsedResponse::SchemaViolation(e.to_string()),
    }
}

/// Content of a response that is exactly one markdown code block.
///
/// The opening fence may carry a language tag such as `json`. Returns `None`
/// when anything precedes the opening fence or follows the closing one.
///
/// # Examples
///
/// ```
/// use inkwell_studio::strip_code_fence;
///
/// assert_eq!(strip_code_fence("```json\n{\"a\": 1}\n```"), Some("{\"a\": 1}"));
/// assert_eq!(strip_code_fence("```\n[1]\n```"), Some("[1]"));
/// assert_eq!(strip_code_fence("Sure!\n```json\n[1]\n```"), None);
/// assert_eq!(strip_code_fence("```json\n[1]"), None);
/// ```
pub fn strip_code_fence(response: &str) -> Option<&str> {
    let inner = response
        .trim()
        .strip_prefix("```")?
        .strip_suffix("```")?;

    let body = match inner.split_once('\n') {
        Some((tag, rest)) if tag.trim().chars().all(|c| c.is_ascii_alphanumeric()) => rest,
        _ => inner,
    };
    Some(body.trim())
}
