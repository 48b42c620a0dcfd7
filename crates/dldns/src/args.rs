//! `key=value` argument parsing
//!
//! Each argument is split at its first `=` and the value trimmed. Arguments
//! without `=` or with an empty value are treated as absent. A repeated key
//! keeps its last value.

use dldns_core::{Error, Result};
use std::collections::HashMap;

/// Parsed command-line arguments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments {
    values: HashMap<String, String>,
}

impl Arguments {
    /// Parse arguments (program name excluded)
    pub fn parse<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let values = args
            .into_iter()
            .filter_map(|arg| {
                let (key, value) = arg.as_ref().split_once('=')?;
                let value = value.trim();
                if value.is_empty() {
                    return None;
                }
                Some((key.trim().to_string(), value.to_string()))
            })
            .collect();

        Self { values }
    }

    /// Parse the current process arguments
    pub fn from_env() -> Self {
        Self::parse(std::env::args().skip(1))
    }

    /// Value of an optional argument
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Value of a required argument
    ///
    /// # Errors
    ///
    /// `Error::InvalidInput` naming the key and showing an example.
    pub fn require(&self, key: &str) -> Result<&str> {
        self.get(key).ok_or_else(|| missing(key))
    }
}

fn missing(key: &str) -> Error {
    Error::invalid_input(format!(
        "{key} parameter is missing!\nE.g. {key}=012345678"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_key_value_pairs() {
        let args = Arguments::parse(["domain_id=123", "record_id= 456 "]);
        assert_eq!(args.get("domain_id"), Some("123"));
        assert_eq!(args.get("record_id"), Some("456"));
        assert_eq!(args.get("target_ip"), None);
    }

    #[test]
    fn value_may_contain_equals() {
        let args = Arguments::parse(["note=a=b"]);
        assert_eq!(args.get("note"), Some("a=b"));
    }

    #[test]
    fn bare_and_empty_arguments_count_as_absent() {
        let args = Arguments::parse(["domain_id", "record_id=", "target_ip=  "]);
        assert_eq!(args.get("domain_id"), None);
        assert_eq!(args.get("record_id"), None);
        assert_eq!(args.get("target_ip"), None);
    }

    #[test]
    fn last_value_wins() {
        let args = Arguments::parse(["domain_id=1", "domain_id=2"]);
        assert_eq!(args.get("domain_id"), Some("2"));
    }

    #[test]
    fn missing_required_argument_is_invalid_input() {
        let args = Arguments::parse(Vec::<String>::new());
        let err = args.require("domain_id").unwrap_err();

        match err {
            Error::InvalidInput(msg) => {
                assert_eq!(
                    msg,
                    "domain_id parameter is missing!\nE.g. domain_id=012345678"
                );
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
