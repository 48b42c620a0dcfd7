// # IP Echo Resolver
//
// This crate discovers the caller's external address by asking an echo
// service (ipecho.net by default) for it.
//
// ## Behavior
//
// - One GET per lookup, no caching, no retry
// - The body is returned untouched; no parsing or validation
// - Transport failures and non-200 answers are `Error::Transport`

use async_trait::async_trait;
use dldns_core::traits::{HttpRequest, HttpTransport, IpResolver, Method};
use dldns_core::{Error, IpEchoConfig, Result};
use std::sync::Arc;

/// Default echo endpoint, answers with the caller's address in plain text
pub const DEFAULT_IP_ECHO_URL: &str = dldns_core::config::DEFAULT_IP_ECHO_URL;

/// Resolver backed by a plain-text echo endpoint
#[derive(Clone)]
pub struct IpEchoResolver {
    /// URL to fetch the address from
    url: String,

    /// HTTP transport
    transport: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for IpEchoResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IpEchoResolver")
            .field("url", &self.url)
            .finish()
    }
}

impl IpEchoResolver {
    /// Create a resolver for the default endpoint
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self::with_url(DEFAULT_IP_ECHO_URL, transport)
    }

    /// Create a resolver for a custom endpoint
    pub fn with_url(url: impl Into<String>, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            url: url.into(),
            transport,
        }
    }

    /// Create a resolver from configuration
    pub fn from_config(config: &IpEchoConfig, transport: Arc<dyn HttpTransport>) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_url(config.url.clone(), transport))
    }

    /// Endpoint in use
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl IpResolver for IpEchoResolver {
    async fn external_ip(&self) -> Result<String> {
        tracing::debug!("Resolving external IP via {}", self.url);

        let response = self
            .transport
            .execute(HttpRequest::new(Method::Get, self.url.clone()))
            .await?;

        if !response.is_ok() {
            return Err(Error::transport(format!(
                "IP echo service {} answered HTTP {}",
                self.url, response.status
            )));
        }

        tracing::info!("External IP resolved: {}", response.body);
        Ok(response.body)
    }

    fn resolver_name(&self) -> &'static str {
        "ipecho"
    }
}
