//! Scripted driver for testing.

use async_trait::async_trait;
use inkwell_core::{GenerateRequest, GenerateResponse, Output};
use inkwell_error::{GeminiError, GeminiErrorKind, InkwellError, InkwellResult};
use inkwell_interface::InkwellDriver;
use std::collections::VecDeque;
use std::sync::Mutex;

/// One scripted reply.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Text output
    Text(String),
    /// Inline image output with the given base64 payload
    Image(String),
    /// Response with no outputs at all
    Empty,
    /// Provider error
    Error(GeminiErrorKind),
}

/// Driver that replays scripted replies and records every request.
///
/// Running past the end of the script returns an empty response.
pub struct MockDriver {
    script: Mutex<VecDeque<MockReply>>,
    requests: Mutex<Vec<GenerateRequest>>,
}

impl MockDriver {
    pub fn new(replies: Vec<MockReply>) -> Self {
        Self {
            script: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Every request received, in order.
    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The most recent request.
    pub fn last_request(&self) -> GenerateRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }

    /// Get the number of times generate() was called.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl InkwellDriver for MockDriver {
    async fn generate(&self, req: &GenerateRequest) -> InkwellResult<GenerateResponse> {
        self.requests.lock().unwrap().push(req.clone());
        let reply = self.script.lock().unwrap().pop_front();

        match reply {
            Some(MockReply::Text(text)) => Ok(GenerateResponse {
                outputs: vec![Output::Text(text)],
            }),
            Some(MockReply::Image(data)) => Ok(GenerateResponse {
                outputs: vec![Output::Image {
                    mime: Some("image/png".to_string()),
                    data,
                }],
            }),
            Some(MockReply::Empty) | None => Ok(GenerateResponse::default()),
            Some(MockReply::Error(kind)) => Err(InkwellError::from(GeminiError::new(kind))),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}
