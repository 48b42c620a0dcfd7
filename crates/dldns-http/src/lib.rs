// # reqwest HTTP Transport
//
// This crate provides the production `HttpTransport` for the dldns tools.
//
// ## Behavior
//
// - One request per `execute` call, sent as built by the caller
// - Every HTTP response is returned as-is, whatever its status
// - Connection failures, timeouts and unreadable bodies become
//   `Error::Transport`
// - Header values never appear in logs (they carry the credential)

use async_trait::async_trait;
use dldns_core::traits::{HttpRequest, HttpResponse, HttpTransport, Method};
use dldns_core::{Error, HttpConfig, Result};
use std::time::Duration;

/// Default HTTP timeout for requests (30 seconds)
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP transport backed by `reqwest`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    timeout: Duration,
}

impl ReqwestTransport {
    /// Create a transport with the default 30 second timeout
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_HTTP_TIMEOUT)
    }

    /// Create a transport with a custom timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, timeout })
    }

    /// Create a transport from configuration
    pub fn from_config(config: &HttpConfig) -> Result<Self> {
        Self::with_timeout(Duration::from_secs(config.timeout_secs))
    }

    /// Configured request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

fn to_reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}

fn map_send_error(method: Method, url: &str, err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::transport(format!("{} {} timed out: {}", method, url, err))
    } else if err.is_connect() {
        Error::transport(format!("{} {} could not connect: {}", method, url, err))
    } else {
        Error::transport(format!("{} {} failed: {}", method, url, err))
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = request;

        tracing::debug!("{} {}", method, url);

        let mut builder = self.client.request(to_reqwest_method(method), &url);
        for (name, value) in &headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| map_send_error(method, &url, e))?;

        let status = response.status().as_u16();
        tracing::debug!("{} {} -> {}", method, url, status);

        let body = response
            .text()
            .await
            .map_err(|e| Error::transport(format!("Failed to read response body: {}", e)))?;

        Ok(HttpResponse { status, body })
    }
}
