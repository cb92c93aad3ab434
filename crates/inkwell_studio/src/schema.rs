//! Response schemas sent with structured text requests.
//!
//! Schemas use the Gemini OpenAPI subset, whose type names are upper case.

use inkwell_core::PageLayout;
use serde_json::{Value, json};
use strum::IntoEnumIterator;

/// Schema for asset extraction: an object with required `characters` and
/// `locations` arrays.
///
/// # Examples
///
/// ```
/// let schema = inkwell_studio::extraction_schema();
/// assert_eq!(schema["required"], serde_json::json!(["characters", "locations"]));
/// ```
pub fn extraction_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "characters": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING" },
                        "description": { "type": "STRING" },
                        "visualPrompt": { "type": "STRING" },
                        "visualAnchor": { "type": "STRING" }
                    },
                    "required": ["name", "description", "visualPrompt", "visualAnchor"]
                }
            },
            "locations": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING" },
                        "description": { "type": "STRING" }
                    },
                    "required": ["name", "description"]
                }
            }
        },
        "required": ["characters", "locations"]
    })
}

/// Schema for storyboard generation: an array of page objects.
///
/// The `layoutType` enum is generated from [`PageLayout`], so the schema and
/// the parser accept exactly the same tags.
pub fn storyboard_schema() -> Value {
    let layouts: Vec<String> = PageLayout::iter().map(|layout| layout.to_string()).collect();

    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "pageNumber": { "type": "INTEGER" },
                "layoutType": { "type": "STRING", "enum": layouts },
                "layoutDescription": { "type": "STRING" },
                "narrativeText": { "type": "STRING" },
                "visualPrompt": { "type": "STRING" },
                "charactersInPage": { "type": "ARRAY", "items": { "type": "STRING" } },
                "locationId": { "type": "STRING" }
            },
            "required": [
                "pageNumber",
                "layoutType",
                "layoutDescription",
                "narrativeText",
                "visualPrompt",
                "charactersInPage",
                "locationId"
            ]
        }
    })
}
