//! Google Gemini `generateContent` integration.

mod client;
mod conversion;
mod dto;

pub use client::GeminiClient;
pub use conversion::{from_gemini_response, to_gemini_request};
pub use dto::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    ImageConfig, InlineData, InlineDataPart, Part, PromptFeedback, TextPart, UsageMetadata,
};
