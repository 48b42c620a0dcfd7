// # IP Resolver Trait
//
// Defines the interface for discovering the caller's externally visible
// address.
//
// ## Implementations
//
// - ipecho.net plain-text endpoint: `dldns-ip-echo` crate

use async_trait::async_trait;

/// Trait for external IP discovery
///
/// One call, one lookup. The returned string is whatever the service sent;
/// no parsing or validation is applied.
#[async_trait]
pub trait IpResolver: Send + Sync {
    /// Look up the caller's external address
    async fn external_ip(&self) -> Result<String, crate::Error>;

    /// Name of the resolver (for logging)
    fn resolver_name(&self) -> &'static str;
}
