//! Shared fixtures for the command contract tests

#![allow(dead_code)]

use async_trait::async_trait;
use dldns::args::Arguments;
use dldns_core::testing::ScriptedTransport;
use dldns_core::traits::IpResolver;
use dldns_ip_echo::IpEchoResolver;
use dldns_provider_linode::LinodeClient;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const TOKEN: &str = "test-pat-0123456789";
pub const ECHO_URL: &str = "http://ipecho.net/plain";

/// Client and echo resolver sharing one scripted transport
///
/// Requests from both land in the same log, in the order they were sent.
pub fn scripted_tools() -> (LinodeClient, IpEchoResolver, Arc<ScriptedTransport>) {
    let transport = Arc::new(ScriptedTransport::new());
    let client = LinodeClient::new(TOKEN, transport.clone()).expect("client construction succeeds");
    let resolver = IpEchoResolver::new(transport.clone());
    (client, resolver, transport)
}

pub fn args(values: &[&str]) -> Arguments {
    Arguments::parse(values)
}

/// Resolver that counts lookups and always answers the same address
pub struct CountingResolver {
    address: String,
    calls: AtomicUsize,
}

impl CountingResolver {
    pub fn new(address: &str) -> Self {
        Self {
            address: address.to_string(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IpResolver for CountingResolver {
    async fn external_ip(&self) -> dldns_core::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.address.clone())
    }

    fn resolver_name(&self) -> &'static str {
        "counting"
    }
}
