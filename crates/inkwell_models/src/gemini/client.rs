//! Google Gemini REST client.
//!
//! One [`GeminiClient`] owns one pooled `reqwest::Client` and the API key read
//! at construction. Every call is a single `generateContent` exchange; retry
//! lives one layer up in [`crate::RetryingDriver`].
//!
//! # Model selection
//!
//! A request that names a model is sent to that model. Otherwise image
//! requests (those with an aspect ratio) go to the configured image model and
//! everything else to the text model.
//!
//! # Example
//!
//! ```no_run
//! use inkwell_config::InkwellConfig;
//! use inkwell_core::{AspectRatio, GenerateRequest, Input};
//! use inkwell_interface::InkwellDriver;
//! use inkwell_models::GeminiClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = InkwellConfig::load()?;
//! let client = GeminiClient::new(&config.gemini)?;
//!
//! let request = GenerateRequest::builder()
//!     .contents(vec![Input::Text("ENVIRONMENT PLATE: Harbor at dusk.".to_string())])
//!     .aspect_ratio(AspectRatio::Widescreen)
//!     .build()?;
//! let response = client.generate(&request).await?;
//! assert!(response.first_image().is_some());
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use std::env;
use std::time::Duration;
use tracing::{debug, error, instrument, warn};

use inkwell_config::GeminiConfig;
use inkwell_core::{GenerateRequest, GenerateResponse};
use inkwell_error::{GeminiError, GeminiErrorKind, InkwellResult};
use inkwell_interface::InkwellDriver;

use super::conversion::{from_gemini_response, to_gemini_request};
use super::dto::GenerateContentResponse;

/// Environment variable holding the API key.
const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Header carrying the API key.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Client for the Gemini `generateContent` endpoint.
#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    config: GeminiConfig,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.config.base_url)
            .field("text_model", &self.config.text_model)
            .field("image_model", &self.config.image_model)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a client using the `GEMINI_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiErrorKind::MissingApiKey`] when the variable is unset or
    /// empty.
    #[instrument(skip(config), fields(base_url = %config.base_url))]
    pub fn new(config: &GeminiConfig) -> InkwellResult<Self> {
        let api_key = env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| GeminiError::new(GeminiErrorKind::MissingApiKey))?;
        Self::with_api_key(api_key, config)
    }

    /// Create a client with an explicit API key.
    pub fn with_api_key(api_key: impl Into<String>, config: &GeminiConfig) -> InkwellResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(|e| {
            error!(error = %e, "Failed to build HTTP client");
            GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string()))
        })?;

        debug!(
            text_model = %config.text_model,
            image_model = %config.image_model,
            "Created Gemini client"
        );

        Ok(Self {
            client,
            api_key: api_key.into(),
            config: config.clone(),
        })
    }

    /// Connection settings this client was built with.
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Resolve the model a request should be sent to.
    pub fn model_for<'a>(&'a self, request: &'a GenerateRequest) -> &'a str {
        match (&request.model, request.aspect_ratio) {
            (Some(model), _) => model,
            (None, Some(_)) => &self.config.image_model,
            (None, None) => &self.config.text_model,
        }
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            model
        )
    }
}

#[async_trait]
impl InkwellDriver for GeminiClient {
    #[instrument(
        skip(self, req),
        fields(
            model = %self.model_for(req),
            images = req.image_count(),
            schema = req.response_schema.is_some(),
        )
    )]
    async fn generate(&self, req: &GenerateRequest) -> InkwellResult<GenerateResponse> {
        let url = self.endpoint(self.model_for(req));
        let body = to_gemini_request(req);
        debug!(url = %url, "Sending generateContent request");

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Request failed");
                GeminiError::new(GeminiErrorKind::Transport(e.to_string()))
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            error!(error = %e, "Failed to read response body");
            GeminiError::new(GeminiErrorKind::Transport(e.to_string()))
        })?;

        if !status.is_success() {
            error!(status = status.as_u16(), "Gemini returned error");
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message: text,
            })
            .into());
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&text).map_err(|e| {
            error!(error = %e, "Failed to parse response");
            GeminiError::new(GeminiErrorKind::InvalidResponse(e.to_string()))
        })?;

        if let Some(reason) = parsed
            .prompt_feedback
            .as_ref()
            .and_then(|feedback| feedback.block_reason.as_deref())
        {
            warn!(block_reason = reason, "Prompt was blocked");
        }
        if let Some(usage) = &parsed.usage_metadata {
            debug!(
                prompt_tokens = ?usage.prompt_token_count,
                output_tokens = ?usage.candidates_token_count,
                "Token usage"
            );
        }

        let response = from_gemini_response(parsed);
        debug!(outputs = response.outputs.len(), "generateContent successful");
        Ok(response)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    /// The text model; image requests without a model use
    /// [`GeminiConfig::image_model`] instead, see [`GeminiClient::model_for`].
    fn model_name(&self) -> &str {
        &self.config.text_model
    }
}
