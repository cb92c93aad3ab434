//! Driver that answers each request based on its prompt.

use async_trait::async_trait;
use inkwell::{
    GeminiError, GeminiErrorKind, GenerateRequest, GenerateResponse, InkwellDriver, InkwellError,
    InkwellResult, Output,
};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Reply chosen for one request.
#[derive(Debug, Clone)]
pub enum Reply {
    /// Text output
    Text(String),
    /// Inline image output with the given base64 payload
    Image(String),
    /// Response with no outputs
    Empty,
    /// Provider error
    Error(GeminiErrorKind),
}

type Route = Box<dyn Fn(&str) -> Reply + Send + Sync>;

/// Routes each request's prompt text through a closure.
///
/// Every call sleeps briefly so concurrent calls overlap; the peak number of
/// calls in flight is recorded.
pub struct RoutingDriver {
    route: Route,
    prompts: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

impl RoutingDriver {
    pub fn new(route: impl Fn(&str) -> Reply + Send + Sync + 'static) -> Self {
        Self {
            route: Box::new(route),
            prompts: Mutex::new(Vec::new()),
            in_flight: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
        }
    }

    /// Driver that answers every request with the same image.
    #[allow(dead_code)]
    pub fn images(payload: &str) -> Self {
        let payload = payload.to_string();
        Self::new(move |_| Reply::Image(payload.clone()))
    }

    /// Prompt text of every request, in order.
    #[allow(dead_code)]
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    /// Number of requests received.
    #[allow(dead_code)]
    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    /// Most calls that were in flight at the same time.
    #[allow(dead_code)]
    pub fn peak_in_flight(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl InkwellDriver for RoutingDriver {
    async fn generate(&self, req: &GenerateRequest) -> InkwellResult<GenerateResponse> {
        let prompt = req.prompt_text();
        self.prompts.lock().unwrap().push(prompt.clone());

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(10)).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        match (self.route)(&prompt) {
            Reply::Text(text) => Ok(GenerateResponse {
                outputs: vec![Output::Text(text)],
            }),
            Reply::Image(data) => Ok(GenerateResponse {
                outputs: vec![Output::Image {
                    mime: Some("image/png".to_string()),
                    data,
                }],
            }),
            Reply::Empty => Ok(GenerateResponse::default()),
            Reply::Error(kind) => Err(InkwellError::from(GeminiError::new(kind))),
        }
    }

    fn provider_name(&self) -> &'static str {
        "routing"
    }

    fn model_name(&self) -> &str {
        "routing-model"
    }
}
