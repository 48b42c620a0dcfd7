//! Table rendering

use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use dldns_core::Record;
use serde_json::Value;

/// Render records as a table
///
/// Columns are the union of all keys, in the order they are first seen.
pub fn render_table(records: &[Record]) -> String {
    if records.is_empty() {
        return "No results found.".to_string();
    }

    let mut columns: Vec<&str> = Vec::new();
    for record in records {
        for key in record.keys() {
            if !columns.contains(&key.as_str()) {
                columns.push(key);
            }
        }
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(
        columns
            .iter()
            .map(|column| Cell::new(column).add_attribute(Attribute::Bold)),
    );

    for record in records {
        table.add_row(
            columns
                .iter()
                .map(|column| cell_text(record.get(*column))),
        );
    }

    table.to_string()
}

/// Render a single API response
///
/// Objects become a one-row table; anything else is printed as JSON.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Object(record) => render_table(std::slice::from_ref(record)),
        other => other.to_string(),
    }
}

fn cell_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Null) | None => String::new(),
        Some(v) => v.to_string(),
    }
}
