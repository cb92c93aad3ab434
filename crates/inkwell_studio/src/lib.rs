//! The Inkwell generation facade.
//!
//! This crate owns everything between a manga project and the generation
//! service: instruction templates, response schemas, parsing of structured
//! responses, and [`MangaStudio`], which sequences them into the six
//! generation operations.
//!
//! # Parse policies
//!
//! Structured responses parse into a [`ParsedResponse`] that separates
//! malformed JSON from schema violations. A [`ParsePolicy`] decides whether a
//! failure degrades to an empty value or surfaces as an error. Asset
//! extraction degrades by default; storyboard creation fails by default.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod assets;
mod parse;
mod prompts;
mod schema;
mod studio;
mod validation;

pub use assets::ExtractedAssets;
pub use parse::{ParsePolicy, ParsedResponse, parse_structured, strip_code_fence};
pub use prompts::{
    ENVIRONMENT_REFERENCE_LABEL, PROTAGONIST_REFERENCE_LABEL, UNNAMED_PROTAGONIST,
    UNSPECIFIED_ANCHOR, character_reference_label, cover_prompt, extraction_prompt,
    location_plate_prompt, page_prompt, portrait_prompt, storyboard_prompt,
};
pub use schema::{extraction_schema, storyboard_schema};
pub use studio::{MangaStudio, STORYBOARD_PARSE_MESSAGE};
pub use validation::{ReferenceIssue, validate_storyboard};
