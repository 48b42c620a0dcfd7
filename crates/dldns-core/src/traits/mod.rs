//! Core traits for the dldns tools
//!
//! - [`HttpTransport`]: send one HTTP request
//! - [`IpResolver`]: discover the caller's external address

pub mod ip_resolver;
pub mod transport;

pub use ip_resolver::IpResolver;
pub use transport::{HttpRequest, HttpResponse, HttpTransport, Method};
