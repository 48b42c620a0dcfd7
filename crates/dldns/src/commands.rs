//! The three commands
//!
//! Each command validates its arguments before touching the network.

use crate::args::Arguments;
use dldns_core::record::project;
use dldns_core::traits::IpResolver;
use dldns_core::{Record, Result};
use dldns_provider_linode::LinodeClient;
use serde_json::Value;

/// Columns shown by `list-domains`
pub const DOMAIN_COLUMNS: &[&str] = &["id", "domain"];

/// List every domain as `{id, domain}`
pub async fn list_domains(client: &LinodeClient) -> Result<Vec<Record>> {
    let domains = client.list_domains().await?;

    Ok(domains
        .iter()
        .map(|domain| project(domain, DOMAIN_COLUMNS))
        .collect())
}

/// List every record of the domain named by `domain_id`
pub async fn list_records(client: &LinodeClient, args: &Arguments) -> Result<Vec<Record>> {
    let domain_id = args.require("domain_id")?;
    client.list_records(domain_id).await
}

/// Arguments of `update-record`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRecord {
    /// Domain holding the record
    pub domain_id: String,
    /// Record to update
    pub record_id: String,
    /// New target; resolved externally when absent
    pub target_ip: Option<String>,
}

impl UpdateRecord {
    /// Read the arguments, failing on the first missing required one
    pub fn from_args(args: &Arguments) -> Result<Self> {
        Ok(Self {
            domain_id: args.require("domain_id")?.to_string(),
            record_id: args.require("record_id")?.to_string(),
            target_ip: args.get("target_ip").map(str::to_string),
        })
    }
}

/// Point a record at `target_ip`, or at the caller's external IP
///
/// The resolver is consulted at most once, and only when no target was
/// given.
pub async fn update_record(
    client: &LinodeClient,
    resolver: &dyn IpResolver,
    request: &UpdateRecord,
) -> Result<Value> {
    let target = match &request.target_ip {
        Some(ip) => ip.clone(),
        None => {
            tracing::debug!(
                "No target_ip given, asking {}",
                resolver.resolver_name()
            );
            resolver.external_ip().await?
        }
    };

    client
        .update_record_target(&request.domain_id, &request.record_id, &target)
        .await
}
