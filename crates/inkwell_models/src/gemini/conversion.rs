//! Type conversions between Inkwell and Gemini wire types.

use base64::Engine;
use inkwell_core::{GenerateRequest, GenerateResponse, Input, MediaSource, Output, data_uri};

use super::dto::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, ImageConfig,
    InlineData, InlineDataPart, Part, TextPart,
};

/// Converts an Inkwell request into a single-turn Gemini request body.
///
/// A response schema switches the response MIME type to JSON; an aspect
/// ratio adds an image config.
///
/// # Examples
///
/// ```
/// use inkwell_core::{AspectRatio, GenerateRequest, Input};
/// use inkwell_models::to_gemini_request;
///
/// let request = GenerateRequest::builder()
///     .contents(vec![Input::Text("ENVIRONMENT PLATE: Dock.".to_string())])
///     .aspect_ratio(AspectRatio::Widescreen)
///     .build()
///     .unwrap();
///
/// let body = serde_json::to_value(to_gemini_request(&request)).unwrap();
/// assert_eq!(body["generationConfig"]["imageConfig"]["aspectRatio"], "16:9");
/// ```
pub fn to_gemini_request(request: &GenerateRequest) -> GenerateContentRequest {
    let parts = request.contents.iter().map(input_to_part).collect();

    let generation_config = if request.response_schema.is_some() || request.aspect_ratio.is_some()
    {
        Some(GenerationConfig {
            response_mime_type: request
                .response_schema
                .as_ref()
                .map(|_| "application/json".to_string()),
            response_schema: request.response_schema.clone(),
            image_config: request.aspect_ratio.map(|ratio| ImageConfig {
                aspect_ratio: ratio.as_str().to_string(),
            }),
        })
    } else {
        None
    };

    GenerateContentRequest {
        contents: vec![Content {
            role: Some("user".to_string()),
            parts,
        }],
        generation_config,
    }
}

fn input_to_part(input: &Input) -> Part {
    match input {
        Input::Text(text) => Part::Text(TextPart { text: text.clone() }),
        Input::Image { mime, source } => {
            let data = match source {
                MediaSource::Base64(data) => data.clone(),
                MediaSource::Binary(bytes) => base64::engine::general_purpose::STANDARD.encode(bytes),
            };
            Part::InlineData(InlineDataPart {
                inline_data: InlineData {
                    mime_type: mime.clone().unwrap_or_else(|| data_uri::PNG_MIME.to_string()),
                    data,
                },
            })
        }
    }
}

/// Converts a Gemini response into Inkwell outputs.
///
/// Only the first candidate is read. Text parts become [`Output::Text`] and
/// inline data becomes [`Output::Image`]; other part kinds are skipped. A
/// response with no candidates yields an empty output list.
///
/// # Examples
///
/// ```
/// use inkwell_models::{from_gemini_response, GenerateContentResponse};
///
/// let body: GenerateContentResponse = serde_json::from_str(
///     r#"{"candidates":[{"content":{"parts":[{"inlineData":{"mimeType":"image/png","data":"iVBOR"}}]}}]}"#,
/// ).unwrap();
///
/// assert_eq!(from_gemini_response(body).first_image(), Some("iVBOR"));
/// ```
pub fn from_gemini_response(response: GenerateContentResponse) -> GenerateResponse {
    let outputs = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| match part {
                    Part::Text(TextPart { text }) => Some(Output::Text(text)),
                    Part::InlineData(InlineDataPart { inline_data }) => Some(Output::Image {
                        mime: Some(inline_data.mime_type),
                        data: inline_data.data,
                    }),
                    Part::Other(_) => None,
                })
                .collect()
        })
        .unwrap_or_default();

    GenerateResponse { outputs }
}
