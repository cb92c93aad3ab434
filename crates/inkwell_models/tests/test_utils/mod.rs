//! Test utilities for inkwell_models tests.
//!
//! This module provides mock implementations and test helpers.

pub mod mock_gemini;

#[allow(unused_imports)]
pub use mock_gemini::{MockGeminiClient, MockResponse};

use inkwell_core::{GenerateRequest, Input};

/// Helper to create a text-only test request.
#[allow(dead_code)]
pub fn create_test_request(prompt: &str) -> GenerateRequest {
    GenerateRequest::builder()
        .contents(vec![Input::Text(prompt.to_string())])
        .build()
        .expect("Failed to build test request")
}
