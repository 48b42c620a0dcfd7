//! Provider records
//!
//! Domains and DNS records are passed through as open JSON objects. The
//! client never interprets their fields.

use serde_json::{Map, Value};

/// A domain or DNS record as returned by the provider
///
/// Keys keep the order the provider sent them in (`preserve_order`).
pub type Record = Map<String, Value>;

/// Copy the listed keys of `record` into a new record, in the given order
///
/// Missing keys are carried over as `null` so every projected row has the
/// same shape.
pub fn project(record: &Record, keys: &[&str]) -> Record {
    keys.iter()
        .map(|key| {
            let value = record.get(*key).cloned().unwrap_or(Value::Null);
            (key.to_string(), value)
        })
        .collect()
}
