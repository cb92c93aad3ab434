//! Trait definitions for generation backends.

use async_trait::async_trait;
use inkwell_core::{GenerateRequest, GenerateResponse};
use inkwell_error::InkwellResult;

/// Core trait that all generation backends must implement.
///
/// One call is one request/response exchange with the external service. The
/// request decides whether the answer is schema-constrained text or an image.
#[async_trait]
pub trait InkwellDriver: Send + Sync {
    /// Generate model output given a multimodal request.
    async fn generate(&self, req: &GenerateRequest) -> InkwellResult<GenerateResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model used for text requests that name none.
    ///
    /// Drivers may send image requests that name no model to a different
    /// model; this is the one reported for logging and display.
    fn model_name(&self) -> &str;
}
