// # dldns-core
//
// Core library for the dldns dynamic DNS tools.
//
// ## Architecture Overview
//
// This library holds what every other crate in the workspace shares:
// - **HttpTransport**: Trait for sending one HTTP request
// - **IpResolver**: Trait for discovering the caller's external address
// - **Credential**: The provider token, redacted in all diagnostics
// - **Record**: Provider objects as open JSON maps
// - **Error**: The failure taxonomy (config, request status, transport)
//
// ## Design Principles
//
// 1. **Explicit configuration**: Nothing here reads the environment
// 2. **No hidden retries**: Every failure reaches the caller
// 3. **Swappable I/O**: The network sits behind `HttpTransport`

pub mod config;
pub mod credential;
pub mod error;
pub mod record;
pub mod traits;

#[cfg(any(test, feature = "test-util"))]
pub mod testing;

// Re-export core types for convenience
pub use config::{ApiConfig, DldnsConfig, HttpConfig, IpEchoConfig, PageWalk};
pub use credential::Credential;
pub use error::{Error, RequestErrorKind, Result};
pub use record::Record;
pub use traits::{HttpRequest, HttpResponse, HttpTransport, IpResolver, Method};
