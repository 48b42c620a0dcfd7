// # Scripted Transport
//
// In-memory implementation of HttpTransport for tests.
//
// Responses are queued up front and handed out in order, one per request.
// Every request is recorded so tests can assert on URLs, headers and bodies.
// Running out of scripted responses is a transport error, which makes an
// unexpected extra request fail loudly.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::traits::{HttpRequest, HttpResponse, HttpTransport};
use crate::{Error, Result};

/// Transport that replays queued responses
///
/// # Example
///
/// ```rust,ignore
/// use dldns_core::testing::ScriptedTransport;
///
/// let transport = ScriptedTransport::new();
/// transport.push_response(200, "203.0.113.7");
///
/// let resolver = IpEchoResolver::new(Arc::new(transport));
/// ```
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<HttpResponse>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    /// Create a transport with an empty script
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response
    pub fn push_response(&self, status: u16, body: impl Into<String>) -> &Self {
        self.lock_responses()
            .push_back(Ok(HttpResponse::new(status, body)));
        self
    }

    /// Queue a 200 response with a JSON body
    pub fn push_json(&self, body: &serde_json::Value) -> &Self {
        self.push_response(200, body.to_string())
    }

    /// Queue a transport failure
    pub fn push_error(&self, error: Error) -> &Self {
        self.lock_responses().push_back(Err(error));
        self
    }

    /// All requests received so far, in order
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.lock_requests().clone()
    }

    /// Number of requests received so far
    pub fn request_count(&self) -> usize {
        self.lock_requests().len()
    }

    /// URLs of the requests received so far
    pub fn urls(&self) -> Vec<String> {
        self.lock_requests()
            .iter()
            .map(|request| request.url.clone())
            .collect()
    }

    /// Number of scripted responses not yet consumed
    pub fn remaining(&self) -> usize {
        self.lock_responses().len()
    }

    fn lock_responses(&self) -> std::sync::MutexGuard<'_, VecDeque<Result<HttpResponse>>> {
        self.responses
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn lock_requests(&self) -> std::sync::MutexGuard<'_, Vec<HttpRequest>> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        let url = request.url.clone();
        self.lock_requests().push(request);

        self.lock_responses().pop_front().unwrap_or_else(|| {
            Err(Error::transport(format!(
                "no scripted response left for {}",
                url
            )))
        })
    }
}
