//! Configuration types for the dldns tools
//!
//! These structures are plain values. Loading them from the environment is
//! the binaries' job; library code only ever receives a finished config.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Default provider API host
pub const DEFAULT_API_HOST: &str = "api.linode.com";

/// Default IP echo endpoint
pub const DEFAULT_IP_ECHO_URL: &str = "http://ipecho.net/plain";

/// Default HTTP timeout in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DldnsConfig {
    /// Provider API settings
    pub api: ApiConfig,

    /// IP echo settings
    #[serde(default)]
    pub ip_echo: IpEchoConfig,

    /// HTTP transport settings
    #[serde(default)]
    pub http: HttpConfig,
}

impl DldnsConfig {
    /// Create a configuration with defaults and the given token
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                token: Some(token.into()),
                ..ApiConfig::default()
            },
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        self.api.validate()?;
        self.ip_echo.validate()?;
        self.http.validate()?;
        Ok(())
    }
}

/// Provider API configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Personal access token
    /// ⚠️ NEVER log this value
    #[serde(default, skip_serializing)]
    pub token: Option<String>,

    /// API host, without scheme
    #[serde(default = "default_api_host")]
    pub host: String,

    /// How pages after the first are fetched
    #[serde(default)]
    pub page_walk: PageWalk,
}

// Custom Debug implementation that hides the token
impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("token", &self.token.as_ref().map(|_| "<REDACTED>"))
            .field("host", &self.host)
            .field("page_walk", &self.page_walk)
            .finish()
    }
}

impl ApiConfig {
    /// Validate the API configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.token.as_deref().is_none_or(|t| t.trim().is_empty()) {
            return Err(crate::Error::config(
                "Personal access token is empty. Generate one in Linode Cloud under My Settings - API Tokens",
            ));
        }
        if self.host.trim().is_empty() {
            return Err(crate::Error::config("API host cannot be empty"));
        }
        if self.host.contains("://") || self.host.contains('/') {
            return Err(crate::Error::config(format!(
                "API host must be a bare host name, got: {}",
                self.host
            )));
        }
        Ok(())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            token: None,
            host: default_api_host(),
            page_walk: PageWalk::default(),
        }
    }
}

/// Strategy for fetching the remaining pages of a collection
///
/// Both strategies start by requesting page 1 to learn the page count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageWalk {
    /// Walk pages `1..=pages` after the probe, requesting page 1 a second time.
    /// The probe's records are discarded so nothing is duplicated.
    #[default]
    RefetchFirst,
    /// Keep the probe's records and walk pages `2..=pages`
    ReuseFirst,
}

impl PageWalk {
    /// Configuration name of the strategy
    pub fn as_str(&self) -> &'static str {
        match self {
            PageWalk::RefetchFirst => "refetch-first",
            PageWalk::ReuseFirst => "reuse-first",
        }
    }
}

impl FromStr for PageWalk {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "refetch-first" => Ok(PageWalk::RefetchFirst),
            "reuse-first" => Ok(PageWalk::ReuseFirst),
            other => Err(crate::Error::config(format!(
                "Unknown page walk '{}'. Valid values: refetch-first, reuse-first",
                other
            ))),
        }
    }
}

/// IP echo configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpEchoConfig {
    /// URL returning the caller's address as plain text
    #[serde(default = "default_ip_echo_url")]
    pub url: String,
}

impl IpEchoConfig {
    /// Validate the IP echo configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.url.is_empty() {
            return Err(crate::Error::config("IP echo URL cannot be empty"));
        }
        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            return Err(crate::Error::config(format!(
                "IP echo URL must use HTTP or HTTPS scheme. Got: {}",
                self.url
            )));
        }
        Ok(())
    }
}

impl Default for IpEchoConfig {
    fn default() -> Self {
        Self {
            url: default_ip_echo_url(),
        }
    }
}

/// HTTP transport configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds
    #[serde(default = "default_http_timeout_secs")]
    pub timeout_secs: u64,
}

impl HttpConfig {
    /// Validate the HTTP configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        if !(1..=300).contains(&self.timeout_secs) {
            return Err(crate::Error::config(format!(
                "HTTP timeout must be between 1 and 300 seconds. Got: {}",
                self.timeout_secs
            )));
        }
        Ok(())
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_http_timeout_secs(),
        }
    }
}

fn default_api_host() -> String {
    DEFAULT_API_HOST.to_string()
}

fn default_ip_echo_url() -> String {
    DEFAULT_IP_ECHO_URL.to_string()
}

fn default_http_timeout_secs() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECS
}
