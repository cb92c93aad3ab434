//! Provider integrations for Inkwell.
//!
//! This crate provides the Gemini REST client and the retry executor that
//! wraps every call to the generation service.
//!
//! # Example
//!
//! ```no_run
//! use inkwell_config::{InkwellConfig, RetryPolicy};
//! use inkwell_core::{GenerateRequest, Input};
//! use inkwell_interface::InkwellDriver;
//! use inkwell_models::{GeminiClient, RetryingDriver};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = InkwellConfig::load()?;
//! let client = RetryingDriver::new(GeminiClient::new(&config.gemini)?, RetryPolicy::default());
//!
//! let request = GenerateRequest::builder()
//!     .contents(vec![Input::Text("Hello".to_string())])
//!     .build()?;
//! let response = client.generate(&request).await?;
//! println!("{}", response.text());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;
mod retry;

pub use gemini::{
    Candidate, Content, GeminiClient, GenerateContentRequest, GenerateContentResponse,
    GenerationConfig, ImageConfig, InlineData, InlineDataPart, Part, PromptFeedback, TextPart,
    UsageMetadata, from_gemini_response, to_gemini_request,
};
pub use retry::{RetryingDriver, backoff_schedule, with_retry};
