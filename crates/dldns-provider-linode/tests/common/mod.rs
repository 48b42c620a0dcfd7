//! Shared fixtures for the Linode client contract tests

#![allow(dead_code)]

use dldns_core::testing::ScriptedTransport;
use dldns_provider_linode::LinodeClient;
use serde_json::{Value, json};
use std::sync::Arc;

pub const TOKEN: &str = "test-pat-0123456789";

/// Build a client over a fresh scripted transport
///
/// The transport is returned alongside so tests can queue responses and
/// inspect the requests afterwards.
pub fn scripted_client() -> (LinodeClient, Arc<ScriptedTransport>) {
    let transport = Arc::new(ScriptedTransport::new());
    let client = LinodeClient::new(TOKEN, transport.clone()).expect("client construction succeeds");
    (client, transport)
}

/// A page response body
pub fn page(data: Value, page: u64, pages: u64) -> Value {
    let results = data.as_array().map_or(0, |a| a.len());
    json!({
        "data": data,
        "page": page,
        "pages": pages,
        "results": results,
    })
}

/// `n` records with ids starting at `first_id`
pub fn records(first_id: u64, n: u64) -> Value {
    Value::Array(
        (first_id..first_id + n)
            .map(|id| json!({ "id": id, "type": "A", "target": format!("10.0.0.{}", id) }))
            .collect(),
    )
}

/// Ids of the aggregated records, in order
pub fn ids(records: &[dldns_core::Record]) -> Vec<u64> {
    records
        .iter()
        .filter_map(|record| record.get("id").and_then(Value::as_u64))
        .collect()
}
