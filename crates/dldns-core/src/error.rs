//! Error types for the dldns tools
//!
//! Every fallible operation returns [`Result`]. Callers match on [`Error`] to
//! tell configuration problems, API rejections and transport failures apart.

use thiserror::Error;

/// Result type alias for dldns operations
pub type Result<T> = std::result::Result<T, Error>;

/// Classification of a non-200 API response
///
/// The provider documents a fixed set of status codes; anything outside that
/// set is [`RequestErrorKind::Unclassified`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestErrorKind {
    /// 400: malformed request or missing parameters
    InvalidRequest,
    /// 401: the credential was rejected
    AuthenticationFailed,
    /// 403: authenticated, but not allowed to touch the resource
    PermissionDenied,
    /// 404: the resource does not exist
    NotFound,
    /// 429: rate limit hit
    RateLimited,
    /// 500: provider-side failure
    ServerError,
    /// Any other non-200 status
    Unclassified,
}

impl RequestErrorKind {
    /// Map an HTTP status code to its category
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => Self::InvalidRequest,
            401 => Self::AuthenticationFailed,
            403 => Self::PermissionDenied,
            404 => Self::NotFound,
            429 => Self::RateLimited,
            500 => Self::ServerError,
            _ => Self::Unclassified,
        }
    }

    /// Human-readable message for this category
    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidRequest => "You submitted an invalid request (missing parameters, etc).",
            Self::AuthenticationFailed => "You failed to authenticate for this resource.",
            Self::PermissionDenied => {
                "You are authenticated, but don't have permission to do this."
            }
            Self::NotFound => "The resource you're asking for does not exist.",
            Self::RateLimited => "You've hit some sort of rate limit.",
            Self::ServerError => "Let support know.",
            Self::Unclassified => "You have some sort of error.",
        }
    }
}

impl std::fmt::Display for RequestErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Core error type for the dldns tools
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration errors (missing credential, bad settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// The API answered with a status other than 200
    #[error("Request failed with HTTP {status}: {kind}")]
    Request {
        /// Status code as returned by the provider
        status: u16,
        /// Category derived from the status code
        kind: RequestErrorKind,
    },

    /// Network, timeout or unreadable-response failures
    #[error("Transport error: {0}")]
    Transport(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid input (command-line arguments and the like)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a request failure from a non-200 status code
    pub fn request(status: u16) -> Self {
        Self::Request {
            status,
            kind: RequestErrorKind::from_status(status),
        }
    }

    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Status code carried by a request failure
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Category of a request failure
    pub fn request_kind(&self) -> Option<RequestErrorKind> {
        match self {
            Self::Request { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// True for failures below the HTTP layer (network, malformed body)
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Json(_))
    }
}

/// Helper for converting anyhow::Error to our Error type
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_statuses_map_to_their_kind() {
        let cases = [
            (400, RequestErrorKind::InvalidRequest),
            (401, RequestErrorKind::AuthenticationFailed),
            (403, RequestErrorKind::PermissionDenied),
            (404, RequestErrorKind::NotFound),
            (429, RequestErrorKind::RateLimited),
            (500, RequestErrorKind::ServerError),
        ];

        for (status, expected) in cases {
            let err = Error::request(status);
            assert_eq!(err.status(), Some(status));
            assert_eq!(err.request_kind(), Some(expected));
        }
    }

    #[test]
    fn undocumented_statuses_are_unclassified() {
        for status in [201, 204, 302, 409, 502, 503] {
            assert_eq!(
                RequestErrorKind::from_status(status),
                RequestErrorKind::Unclassified,
                "status {status}"
            );
        }
        assert_eq!(
            RequestErrorKind::Unclassified.message(),
            "You have some sort of error."
        );
    }

    #[test]
    fn display_includes_status_and_message() {
        let err = Error::request(404);
        assert_eq!(
            err.to_string(),
            "Request failed with HTTP 404: The resource you're asking for does not exist."
        );
    }

    #[test]
    fn only_transport_failures_are_transport() {
        assert!(Error::transport("connection refused").is_transport());
        assert!(!Error::request(500).is_transport());
        assert!(!Error::config("missing").is_transport());
        assert_eq!(Error::config("missing").status(), None);
    }
}
