// # HTTP Transport Trait
//
// Defines the single seam between the API client and the network.
//
// ## Implementations
//
// - reqwest-backed: `dldns-http` crate
// - Scripted, in-memory: `dldns_core::testing` (feature `test-util`)
//
// ## Usage
//
// ```rust,ignore
// use dldns_core::traits::{HttpRequest, HttpTransport, Method};
//
// let response = transport
//     .execute(HttpRequest::new(Method::Get, "http://ipecho.net/plain"))
//     .await?;
// println!("{} {}", response.status, response.body);
// ```

use async_trait::async_trait;

/// HTTP methods used by the tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// Upper-case method name
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully built request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// Request method
    pub method: Method,
    /// Absolute URL, query string included
    pub url: String,
    /// Header name/value pairs, in insertion order
    pub headers: Vec<(String, String)>,
    /// Optional request body (already serialized)
    pub body: Option<String>,
}

impl HttpRequest {
    /// Create a request without headers or body
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Append a header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set the body
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Look up a header value (case-insensitive name match)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// A response as seen by the client: status and body text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Body text (may be empty)
    pub body: String,
}

impl HttpResponse {
    /// Create a response
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True when the status is exactly 200
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Trait for HTTP transports
///
/// A transport sends exactly one request per call and reports every HTTP
/// response, whatever its status. Interpreting the status is the caller's job.
///
/// # Rules
///
/// - No retries and no caching
/// - Network, timeout and body-read failures become `Error::Transport`
/// - Header values (the credential among them) must not be logged
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send a request and return the response
    ///
    /// # Returns
    ///
    /// - `Ok(HttpResponse)`: any HTTP response, including 4xx/5xx
    /// - `Err(Error::Transport)`: the request did not complete
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, crate::Error>;
}
