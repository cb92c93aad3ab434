//! Mock Gemini client for testing.

use async_trait::async_trait;
use inkwell_core::{GenerateRequest, GenerateResponse, Output};
use inkwell_error::{GeminiError, GeminiErrorKind, InkwellError, InkwellResult};
use inkwell_interface::InkwellDriver;
use std::sync::{Arc, Mutex};

/// A single scripted response (success or error).
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(String),
    Error(GeminiErrorKind),
}

/// Mock Gemini client that replays a script of responses.
///
/// Once the script runs out, the last entry repeats.
pub struct MockGeminiClient {
    script: Vec<MockResponse>,
    call_count: Arc<Mutex<usize>>,
}

impl MockGeminiClient {
    /// Create a mock client that always succeeds with the given text.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self::new_sequence(vec![MockResponse::Success(text.into())])
    }

    /// Create a mock client that always fails with the given error.
    pub fn new_error(error: GeminiErrorKind) -> Self {
        Self::new_sequence(vec![MockResponse::Error(error)])
    }

    /// Create a mock client that fails N times, then succeeds.
    pub fn new_fail_then_succeed(
        fail_count: usize,
        error: GeminiErrorKind,
        success_text: impl Into<String>,
    ) -> Self {
        let mut script = vec![MockResponse::Error(error); fail_count];
        script.push(MockResponse::Success(success_text.into()));
        Self::new_sequence(script)
    }

    /// Create a mock client with a sequence of responses.
    pub fn new_sequence(script: Vec<MockResponse>) -> Self {
        Self {
            script,
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Get the number of times generate() was called.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

#[async_trait]
impl InkwellDriver for MockGeminiClient {
    async fn generate(&self, _req: &GenerateRequest) -> InkwellResult<GenerateResponse> {
        let index = {
            let mut count = self.call_count.lock().unwrap();
            let current = *count;
            *count += 1;
            current
        };

        match self.script.get(index).or(self.script.last()) {
            Some(MockResponse::Success(text)) => Ok(GenerateResponse {
                outputs: vec![Output::Text(text.clone())],
            }),
            Some(MockResponse::Error(kind)) => Err(InkwellError::from(GeminiError::new(kind.clone()))),
            None => Ok(GenerateResponse::default()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock-gemini"
    }

    fn model_name(&self) -> &str {
        "mock-gemini"
    }
}
