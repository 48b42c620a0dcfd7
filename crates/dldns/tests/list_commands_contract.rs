//! Contract Test: list-domains and list-records
//!
//! Constraints verified:
//! - list-domains shows only `id` and `domain`, in that order, across every page
//! - list-records returns every field of every record, in provider order
//! - list-records without `domain_id` fails before any request

mod common;

use common::*;
use dldns::commands::{list_domains, list_records};
use dldns::output::render_table;
use dldns_core::Error;
use serde_json::{Value, json};

fn page(data: Value, page: u64, pages: u64) -> Value {
    json!({ "data": data, "page": page, "pages": pages })
}

#[tokio::test]
async fn domains_are_projected_to_id_and_domain() {
    let (client, _, transport) = scripted_tools();
    transport.push_json(&page(
        json!([
            { "id": 1, "domain": "example.com", "type": "master", "soa_email": "a@example.com" },
            { "id": 2, "domain": "example.org", "type": "master" },
        ]),
        1,
        1,
    ));

    let domains = list_domains(&client).await.unwrap();

    assert_eq!(domains.len(), 2);
    for domain in &domains {
        assert_eq!(
            domain.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["id", "domain"]
        );
    }
    assert_eq!(domains[1]["domain"], "example.org");

    let rendered = render_table(&domains);
    let header = rendered.lines().nth(1).unwrap();
    assert!(header.find("id").unwrap() < header.find("domain").unwrap());
    assert_eq!(
        transport.urls(),
        vec!["https://api.linode.com/v4/domains?page=1"]
    );
}

#[tokio::test]
async fn domains_from_every_page_are_listed() {
    let (client, _, transport) = scripted_tools();
    transport
        .push_json(&page(json!([{ "id": 1, "domain": "a.test" }]), 1, 2))
        .push_json(&page(json!([{ "id": 1, "domain": "a.test" }]), 1, 2))
        .push_json(&page(json!([{ "id": 2, "domain": "b.test" }]), 2, 2));

    let domains = list_domains(&client).await.unwrap();

    assert_eq!(domains.len(), 2);
    let rendered = render_table(&domains);
    assert!(rendered.contains("a.test"));
    assert!(rendered.contains("b.test"));
}

#[tokio::test]
async fn records_keep_every_field() {
    let (client, _, transport) = scripted_tools();
    transport.push_json(&page(
        json!([{ "id": 456, "type": "A", "name": "home", "target": "203.0.113.7", "ttl_sec": 300 }]),
        1,
        1,
    ));

    let records = list_records(&client, &args(&["domain_id=123"])).await.unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(
        records[0].keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["id", "type", "name", "target", "ttl_sec"]
    );
    assert_eq!(records[0]["name"], "home");
    assert_eq!(
        transport.urls(),
        vec!["https://api.linode.com/v4/domains/123/records?page=1"]
    );
}

#[tokio::test]
async fn list_records_requires_domain_id() {
    let (client, _, transport) = scripted_tools();

    let err = list_records(&client, &args(&[])).await.unwrap_err();

    assert!(matches!(err, Error::InvalidInput(_)));
    assert_eq!(transport.request_count(), 0);
}
