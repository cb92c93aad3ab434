//! Input types for generation requests.

use crate::MediaSource;
use serde::{Deserialize, Serialize};

/// Supported request parts.
///
/// Parts are sent in order, so a text label followed by an image reads to the
/// model as a caption for that image.
///
/// # Examples
///
/// ```
/// use inkwell_core::{Input, MediaSource};
///
/// let label = Input::Text("ENVIRONMENT CONTEXT:".to_string());
/// let image = Input::Image {
///     mime: Some("image/png".to_string()),
///     source: MediaSource::Base64("iVBORw0KGgo".to_string()),
/// };
/// assert!(label.as_text().is_some());
/// assert!(image.as_text().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Input {
    /// Plain text input.
    Text(String),

    /// Image input used as a visual reference.
    Image {
        /// MIME type, e.g., "image/png"
        mime: Option<String>,
        /// Media source (base64 or raw bytes)
        source: MediaSource,
    },
}

impl Input {
    /// Text content, if this is a text part.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Input::Text(text) => Some(text),
            Input::Image { .. } => None,
        }
    }

    /// Build a PNG reference image from a base64 payload.
    pub fn png(base64: impl Into<String>) -> Self {
        Input::Image {
            mime: Some("image/png".to_string()),
            source: MediaSource::Base64(base64.into()),
        }
    }
}
