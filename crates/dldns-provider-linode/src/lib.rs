// # Linode API Client
//
// This crate provides the Linode API v4 client used by the dldns tools.
//
// ## Responsibilities
//
// - ✅ Attach the token and JSON headers to every request
// - ✅ Build `https://<host><uri>` URLs, adding `?page=N` for GETs
// - ✅ Aggregate every page of a GET into one ordered list
// - ✅ Encode POST/PUT payloads and decode JSON responses
// - ✅ Map every non-200 status to a typed `Error::Request`
// - ❌ NO retry or backoff (a failure is returned as-is)
// - ❌ NO caching across calls
// - ❌ NO concurrent page fetches
//
// ## Security Requirements
//
// - The token NEVER appears in logs or `Debug` output
// - Construction fails fast if the token is empty
//
// ## API Reference
//
// - Linode API v4: https://techdocs.akamai.com/linode-api/reference/api
// - List Domains: GET `/v4/domains`
// - List Domain Records: GET `/v4/domains/:domainId/records`
// - Update Domain Record: PUT `/v4/domains/:domainId/records/:recordId`

pub mod page;

pub use page::{Page, PageNumber};

use dldns_core::traits::{HttpRequest, HttpResponse, HttpTransport, Method};
use dldns_core::{ApiConfig, Credential, Error, PageWalk, Record, Result};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Default Linode API host
pub const LINODE_API_HOST: &str = dldns_core::config::DEFAULT_API_HOST;

/// Linode API client
///
/// Cheap to share by reference; holds only immutable state. Each public
/// operation sends its requests one after another and returns the first
/// failure it meets.
#[derive(Clone)]
pub struct LinodeClient {
    /// Personal access token
    /// ⚠️ NEVER log this value
    credential: Credential,

    /// API host, without scheme
    host: String,

    /// Strategy for pages after the first
    page_walk: PageWalk,

    /// HTTP transport
    transport: Arc<dyn HttpTransport>,
}

// Custom Debug implementation that hides the token
impl std::fmt::Debug for LinodeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinodeClient")
            .field("credential", &"<REDACTED>")
            .field("host", &self.host)
            .field("page_walk", &self.page_walk)
            .finish()
    }
}

impl LinodeClient {
    /// Create a new client
    ///
    /// # Parameters
    ///
    /// - `token`: Linode personal access token with Domains read/write scope
    /// - `transport`: HTTP transport used for every request
    ///
    /// # Errors
    ///
    /// `Error::Config` if the token is empty. No request is sent.
    pub fn new(token: impl Into<String>, transport: Arc<dyn HttpTransport>) -> Result<Self> {
        Ok(Self::with_credential(Credential::new(token)?, transport))
    }

    /// Create a new client from an already validated credential
    pub fn with_credential(credential: Credential, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            credential,
            host: LINODE_API_HOST.to_string(),
            page_walk: PageWalk::default(),
            transport,
        }
    }

    /// Create a new client from configuration
    ///
    /// An absent token is a configuration error, same as an empty one.
    pub fn from_config(config: &ApiConfig, transport: Arc<dyn HttpTransport>) -> Result<Self> {
        config.validate()?;
        let credential = Credential::from_optional(config.token.as_deref())?;

        Ok(Self::with_credential(credential, transport)
            .with_host(config.host.clone())
            .with_page_walk(config.page_walk))
    }

    /// Override the API host
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Select the pagination strategy
    pub fn with_page_walk(mut self, page_walk: PageWalk) -> Self {
        self.page_walk = page_walk;
        self
    }

    /// API host in use
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Pagination strategy in use
    pub fn page_walk(&self) -> PageWalk {
        self.page_walk
    }

    /// Fetch every page of a collection
    ///
    /// Page 1 is requested first to learn the page count. With more than one
    /// page the rest is fetched according to [`PageWalk`]:
    ///
    /// - `RefetchFirst`: pages `1..=pages` again (page 1 is requested twice,
    ///   `pages + 1` requests in total, records appear once)
    /// - `ReuseFirst`: pages `2..=pages` (`pages` requests in total)
    ///
    /// Any failing page aborts the whole fetch.
    ///
    /// # API Call
    ///
    /// ```http
    /// GET /v4/domains?page=1
    /// Authorization: token <token>
    /// ```
    pub async fn get(&self, uri: &str) -> Result<Vec<Record>> {
        let first = self.get_page(uri, PageNumber::FIRST).await?;

        if !first.is_paginated() {
            tracing::debug!("{}: single page, {} record(s)", uri, first.data.len());
            return Ok(first.data);
        }

        let pages = first.pages;
        tracing::debug!(
            "{}: {} pages reported, walking with {}",
            uri,
            pages,
            self.page_walk.as_str()
        );

        let (mut data, start) = match self.page_walk {
            PageWalk::RefetchFirst => (Vec::new(), 1),
            PageWalk::ReuseFirst => (first.data, 2),
        };

        for n in start..=pages {
            let page = self.get_page(uri, PageNumber::new(n as i64)).await?;
            data.extend(page.data);
        }

        tracing::debug!("{}: aggregated {} record(s)", uri, data.len());
        Ok(data)
    }

    /// Fetch a single page of a collection
    pub async fn get_page(&self, uri: &str, page: PageNumber) -> Result<Page> {
        let url = format!("{}?page={}", self.url(uri), page);
        let response = self.send(self.request(Method::Get, url)).await?;

        Ok(Page::from_body(&response.body)?)
    }

    /// Create a resource
    ///
    /// The payload is sent as JSON; the decoded response body is returned.
    pub async fn post<P>(&self, uri: &str, payload: &P) -> Result<Value>
    where
        P: Serialize + ?Sized,
    {
        self.send_data(Method::Post, uri, payload).await
    }

    /// Update a resource
    ///
    /// The payload is sent as JSON; the decoded response body is returned.
    pub async fn put<P>(&self, uri: &str, payload: &P) -> Result<Value>
    where
        P: Serialize + ?Sized,
    {
        self.send_data(Method::Put, uri, payload).await
    }

    /// Delete a resource
    ///
    /// Returns `true` on success. The response body is ignored.
    pub async fn delete(&self, uri: &str) -> Result<bool> {
        let url = self.url(uri);
        self.send(self.request(Method::Delete, url)).await?;
        Ok(true)
    }

    /// List every domain on the account
    pub async fn list_domains(&self) -> Result<Vec<Record>> {
        self.get("/v4/domains").await
    }

    /// List every record of a domain
    pub async fn list_records(&self, domain_id: &str) -> Result<Vec<Record>> {
        self.get(&records_uri(domain_id)).await
    }

    /// Point a record at a new target address
    ///
    /// # API Call
    ///
    /// ```http
    /// PUT /v4/domains/:domainId/records/:recordId
    /// {
    ///   "target": "1.2.3.4"
    /// }
    /// ```
    pub async fn update_record_target(
        &self,
        domain_id: &str,
        record_id: &str,
        target: &str,
    ) -> Result<Value> {
        tracing::info!(
            "Updating Linode record {} of domain {} -> {}",
            record_id,
            domain_id,
            target
        );

        let payload = serde_json::json!({ "target": target });
        let record = self.put(&record_uri(domain_id, record_id), &payload).await?;

        tracing::info!("Record {} updated", record_id);
        Ok(record)
    }

    async fn send_data<P>(&self, method: Method, uri: &str, payload: &P) -> Result<Value>
    where
        P: Serialize + ?Sized,
    {
        let body = serde_json::to_string(payload)?;
        let request = self.request(method, self.url(uri)).with_body(body);
        let response = self.send(request).await?;

        decode_json(&response.body)
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let method = request.method;
        let url = request.url.clone();

        let response = self.transport.execute(request).await?;

        if !response.is_ok() {
            let err = Error::request(response.status);
            tracing::warn!("{} {} rejected: {}", method, url, err);
            return Err(err);
        }

        Ok(response)
    }

    fn url(&self, uri: &str) -> String {
        format!("https://{}{}", self.host, uri)
    }

    fn request(&self, method: Method, url: String) -> HttpRequest {
        HttpRequest::new(method, url)
            .with_header("Authorization", self.credential.authorization_header())
            .with_header("Accept", "application/json")
            .with_header("Content-type", "application/json")
    }
}

/// Path of a domain's record collection
pub fn records_uri(domain_id: &str) -> String {
    format!("/v4/domains/{}/records", domain_id)
}

/// Path of a single domain record
pub fn record_uri(domain_id: &str, record_id: &str) -> String {
    format!("/v4/domains/{}/records/{}", domain_id, record_id)
}

// An empty body decodes to null rather than failing
fn decode_json(body: &str) -> Result<Value> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(body)?)
}
