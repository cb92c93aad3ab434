//! Output types from generation responses.

use serde::{Deserialize, Serialize};

/// Supported output parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Output {
    /// Plain text output (including JSON constrained by a response schema).
    Text(String),

    /// Generated image output.
    Image {
        /// MIME type of the image
        mime: Option<String>,
        /// Base64-encoded image data, exactly as the service returned it
        data: String,
    },
}
