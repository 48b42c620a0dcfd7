//! API credential
//!
//! The token is handed in by the caller, kept for the life of one client and
//! never written to logs or `Debug` output.

use crate::{Error, Result};

/// Opaque personal access token
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a token, rejecting empty or whitespace-only values
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(Error::config(
                "Personal access token is empty. Generate one in Linode Cloud under My Settings - API Tokens",
            ));
        }
        Ok(Self(token))
    }

    /// Wrap a token that may be absent
    pub fn from_optional(token: Option<&str>) -> Result<Self> {
        match token {
            Some(token) => Self::new(token),
            None => Err(Error::config(
                "Personal access token is missing. Set LINODE_PAT or pass a token explicitly",
            )),
        }
    }

    /// The raw token, for building the authorization header only
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Value of the `Authorization` header
    pub fn authorization_header(&self) -> String {
        format!("token {}", self.0)
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(<REDACTED>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_token_is_a_config_error() {
        assert!(matches!(Credential::new(""), Err(Error::Config(_))));
        assert!(matches!(Credential::new(" \t"), Err(Error::Config(_))));
        assert!(matches!(Credential::from_optional(None), Err(Error::Config(_))));
    }

    #[test]
    fn authorization_header_uses_token_scheme() {
        let credential = Credential::new("abc123").unwrap();
        assert_eq!(credential.authorization_header(), "token abc123");
        assert_eq!(credential.expose(), "abc123");
    }

    #[test]
    fn debug_never_shows_the_token() {
        let credential = Credential::new("secret_token_12345").unwrap();
        let debug_str = format!("{:?}", credential);
        assert!(!debug_str.contains("secret_token"));
    }
}
