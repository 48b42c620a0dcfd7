//! Environment configuration
//!
//! All configuration comes from environment variables, optionally seeded
//! from a `.env` file in the working directory:
//!
//! - `LINODE_PAT`: Linode personal access token (required)
//! - `DLDNS_API_HOST`: API host (default `api.linode.com`)
//! - `DLDNS_PAGE_WALK`: `refetch-first` or `reuse-first` (default `refetch-first`)
//! - `DLDNS_IP_ECHO_URL`: echo endpoint (default `http://ipecho.net/plain`)
//! - `DLDNS_HTTP_TIMEOUT_SECS`: request timeout, 1 to 300 (default 30)
//! - `DLDNS_LOG_LEVEL`: trace, debug, info, warn or error (default warn)

use anyhow::Result;
use dldns_core::{ApiConfig, DldnsConfig, HttpConfig, IpEchoConfig, PageWalk};
use std::env;
use tracing::Level;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Library configuration handed to the client, resolver and transport
    pub dldns: DldnsConfig,
    /// Log level name
    pub log_level: String,
}

/// Seed the environment from `.env` in the working directory
///
/// A missing file is fine. A file that cannot be read or parsed is a
/// configuration error.
pub fn load_dotenv() -> Result<()> {
    dotenv_outcome(dotenvy::dotenv().map(|_| ()))
}

fn dotenv_outcome(result: std::result::Result<(), dotenvy::Error>) -> Result<()> {
    match result {
        Ok(()) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => anyhow::bail!("Failed to load .env: {}", e),
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let page_walk = match lookup("DLDNS_PAGE_WALK") {
            Some(name) => name.parse::<PageWalk>()?,
            None => PageWalk::default(),
        };

        let timeout_secs = match lookup("DLDNS_HTTP_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                anyhow::anyhow!("DLDNS_HTTP_TIMEOUT_SECS must be a number of seconds. Got: {}", raw)
            })?,
            None => dldns_core::config::DEFAULT_HTTP_TIMEOUT_SECS,
        };

        let mut api = ApiConfig {
            token: lookup("LINODE_PAT"),
            page_walk,
            ..ApiConfig::default()
        };
        if let Some(host) = lookup("DLDNS_API_HOST") {
            api.host = host;
        }

        let mut ip_echo = IpEchoConfig::default();
        if let Some(url) = lookup("DLDNS_IP_ECHO_URL") {
            ip_echo.url = url;
        }

        Ok(Self {
            dldns: DldnsConfig {
                api,
                ip_echo,
                http: HttpConfig { timeout_secs },
            },
            log_level: lookup("DLDNS_LOG_LEVEL").unwrap_or_else(|| "warn".to_string()),
        })
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.dldns.api.token.is_none() {
            anyhow::bail!(
                "LINODE_PAT is required. \
                Set it via: export LINODE_PAT=your_token (or add it to .env)"
            );
        }

        self.dldns.validate()?;

        // Check for obvious placeholder tokens (common mistake)
        let token_lower = self
            .dldns
            .api
            .token
            .as_deref()
            .unwrap_or_default()
            .to_lowercase();
        if token_lower.contains("your_token") || token_lower.contains("replace_me") {
            anyhow::bail!(
                "LINODE_PAT appears to be a placeholder. \
                Use an actual personal access token from Linode Cloud."
            );
        }

        if self.tracing_level().is_none() {
            anyhow::bail!(
                "DLDNS_LOG_LEVEL '{}' is not valid. \
                Valid levels: trace, debug, info, warn, error",
                self.log_level
            );
        }

        Ok(())
    }

    /// Log level as a tracing level, if the name is valid
    pub fn tracing_level(&self) -> Option<Level> {
        match self.log_level.trim().to_lowercase().as_str() {
            "trace" => Some(Level::TRACE),
            "debug" => Some(Level::DEBUG),
            "info" => Some(Level::INFO),
            "warn" => Some(Level::WARN),
            "error" => Some(Level::ERROR),
            _ => None,
        }
    }
}
