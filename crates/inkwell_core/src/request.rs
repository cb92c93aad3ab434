//! Request and response types for generation calls.

use crate::{Input, Output};
use serde::{Deserialize, Serialize};

/// Shape hint for generated images.
///
/// # Examples
///
/// ```
/// use inkwell_core::AspectRatio;
///
/// assert_eq!(AspectRatio::Widescreen.as_str(), "16:9");
/// assert_eq!(AspectRatio::Portrait.to_string(), "3:4");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum AspectRatio {
    /// 1:1, used for character model sheets
    #[display("1:1")]
    #[serde(rename = "1:1")]
    Square,
    /// 16:9, used for environment plates
    #[display("16:9")]
    #[serde(rename = "16:9")]
    Widescreen,
    /// 3:4, used for covers and pages
    #[display("3:4")]
    #[serde(rename = "3:4")]
    Portrait,
}

impl AspectRatio {
    /// Wire representation understood by the image models.
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Widescreen => "16:9",
            AspectRatio::Portrait => "3:4",
        }
    }
}

/// Generic generation request (multimodal-safe).
///
/// A request with a `response_schema` asks for schema-constrained JSON text;
/// a request with an `aspect_ratio` asks for an image.
///
/// # Examples
///
/// ```
/// use inkwell_core::{AspectRatio, GenerateRequest, Input};
///
/// let request = GenerateRequest::builder()
///     .model("gemini-2.5-flash-image")
///     .contents(vec![Input::Text("CHARACTER MODEL SHEET: Kai.".to_string())])
///     .aspect_ratio(AspectRatio::Square)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.contents.len(), 1);
/// assert!(request.response_schema.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, derive_builder::Builder)]
#[builder(default)]
pub struct GenerateRequest {
    /// Model identifier to use (driver default when `None`)
    #[builder(setter(into, strip_option))]
    pub model: Option<String>,
    /// Ordered request parts
    pub contents: Vec<Input>,
    /// JSON schema the response text must follow
    #[builder(setter(strip_option))]
    pub response_schema: Option<serde_json::Value>,
    /// Requested image shape
    #[builder(setter(strip_option))]
    pub aspect_ratio: Option<AspectRatio>,
}

impl GenerateRequest {
    /// Creates a new request builder.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }

    /// Number of image parts attached to this request.
    pub fn image_count(&self) -> usize {
        self.contents
            .iter()
            .filter(|input| matches!(input, Input::Image { .. }))
            .count()
    }

    /// All text parts joined with newlines.
    pub fn prompt_text(&self) -> String {
        self.contents
            .iter()
            .filter_map(Input::as_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// The unified response object.
///
/// # Examples
///
/// ```
/// use inkwell_core::{GenerateResponse, Output};
///
/// let response = GenerateResponse {
///     outputs: vec![
///         Output::Text("Here you go".to_string()),
///         Output::Image { mime: Some("image/png".to_string()), data: "iVBOR".to_string() },
///     ],
/// };
///
/// assert_eq!(response.text(), "Here you go");
/// assert_eq!(response.first_image(), Some("iVBOR"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GenerateResponse {
    /// The generated outputs from the model
    pub outputs: Vec<Output>,
}

impl GenerateResponse {
    /// Concatenated text of every text output.
    pub fn text(&self) -> String {
        self.outputs
            .iter()
            .filter_map(|output| match output {
                Output::Text(text) => Some(text.as_str()),
                Output::Image { .. } => None,
            })
            .collect()
    }

    /// Base64 payload of the first image output, if any.
    pub fn first_image(&self) -> Option<&str> {
        self.outputs.iter().find_map(|output| match output {
            Output::Image { data, .. } => Some(data.as_str()),
            Output::Text(_) => None,
        })
    }
}
