//! Pagination types
//!
//! Linode collections come back one page at a time:
//!
//! ```json
//! { "data": [ ... ], "page": 1, "pages": 3, "results": 250 }
//! ```

use dldns_core::Record;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A page index, never below 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageNumber(u32);

impl PageNumber {
    /// The first page
    pub const FIRST: PageNumber = PageNumber(1);

    /// Coerce any integer to a page number; zero and negatives become 1
    pub fn new(n: i64) -> Self {
        let n = n.clamp(1, u32::MAX as i64);
        PageNumber(n as u32)
    }

    /// Coerce a raw page value; absent or non-numeric input becomes 1
    pub fn parse(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.trim().parse::<i64>().ok())
            .map(Self::new)
            .unwrap_or(Self::FIRST)
    }

    /// The page index
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl From<u32> for PageNumber {
    fn from(n: u32) -> Self {
        Self::new(i64::from(n))
    }
}

impl std::fmt::Display for PageNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One page of a collection
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Page {
    /// Records on this page
    #[serde(default, deserialize_with = "null_as_empty")]
    pub data: Vec<Record>,

    /// Page number reported by the provider
    #[serde(default, deserialize_with = "lenient_count")]
    pub page: u64,

    /// Total page count reported by the provider; 0 when absent
    #[serde(default, deserialize_with = "lenient_count")]
    pub pages: u64,

    /// Total number of records across all pages, when reported
    #[serde(default)]
    pub results: Option<u64>,
}

impl Page {
    /// Decode a page from response text
    pub fn from_body(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// True when more pages follow the first
    pub fn is_paginated(&self) -> bool {
        self.pages > 1
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Record>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Record>>::deserialize(deserializer)?.unwrap_or_default())
}

// Counts arrive as numbers, occasionally as numeric strings; anything
// unreadable counts as 0.
fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let count = match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f > 0.0).map(|f| f as u64))
            .unwrap_or(0),
        Value::String(s) => s.trim().parse::<u64>().unwrap_or(0),
        _ => 0,
    };
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_negative_pages_become_one() {
        assert_eq!(PageNumber::new(0).get(), 1);
        assert_eq!(PageNumber::new(-4).get(), 1);
        assert_eq!(PageNumber::new(3).get(), 3);
        assert_eq!(PageNumber::from(0u32).get(), 1);
    }

    #[test]
    fn absent_or_garbage_page_values_become_one() {
        assert_eq!(PageNumber::parse(None), PageNumber::FIRST);
        assert_eq!(PageNumber::parse(Some("abc")), PageNumber::FIRST);
        assert_eq!(PageNumber::parse(Some("")), PageNumber::FIRST);
        assert_eq!(PageNumber::parse(Some("0")), PageNumber::FIRST);
        assert_eq!(PageNumber::parse(Some("-2")), PageNumber::FIRST);
        assert_eq!(PageNumber::parse(Some(" 5 ")).get(), 5);
    }

    #[test]
    fn huge_page_numbers_saturate() {
        assert_eq!(PageNumber::new(i64::MAX).get(), u32::MAX);
    }

    #[test]
    fn decodes_a_full_page() {
        let page = Page::from_body(
            r#"{"data": [{"id": 1}, {"id": 2}], "page": 1, "pages": 2, "results": 3}"#,
        )
        .unwrap();

        assert_eq!(page.data.len(), 2);
        assert_eq!(page.page, 1);
        assert_eq!(page.pages, 2);
        assert_eq!(page.results, Some(3));
        assert!(page.is_paginated());
    }

    #[test]
    fn missing_fields_fall_back_to_empty() {
        let page = Page::from_body("{}").unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.pages, 0);
        assert!(!page.is_paginated());

        let page = Page::from_body(r#"{"data": null, "pages": null}"#).unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.pages, 0);
    }

    #[test]
    fn string_page_counts_are_accepted() {
        let page = Page::from_body(r#"{"data": [], "pages": "4"}"#).unwrap();
        assert_eq!(page.pages, 4);

        let page = Page::from_body(r#"{"data": [], "pages": "many"}"#).unwrap();
        assert_eq!(page.pages, 0);
    }

    #[test]
    fn non_object_records_are_rejected() {
        assert!(Page::from_body(r#"{"data": [1, 2]}"#).is_err());
    }
}
