//! Normalization of successful Payrix responses.

use serde_json::Value;

/// Message returned instead of a body whose `data` collection is empty.
pub const NO_RESULTS_SENTINEL: &str = "No results found for the given criteria";

/// Parse `raw` as JSON, or `None` if it is not JSON.
pub fn try_parse(raw: &str) -> Option<Value> {
    serde_json::from_str(raw).ok()
}

/// Replace an empty result set with [`NO_RESULTS_SENTINEL`].
///
/// Only a JSON object whose `data` key holds an empty array or object counts
/// as empty. Every other body, including non-JSON, is returned unchanged.
pub fn normalize(raw_body: &str) -> String {
    if has_empty_data(raw_body) {
        NO_RESULTS_SENTINEL.to_string()
    } else {
        raw_body.to_string()
    }
}

/// Like [`normalize`], with a sentinel naming the resource, e.g.
/// `No merchants found for the given criteria.`
pub fn normalize_for(raw_body: &str, resource_label: &str) -> String {
    if has_empty_data(raw_body) {
        format!("No {} found for the given criteria.", resource_label)
    } else {
        raw_body.to_string()
    }
}

fn has_empty_data(raw_body: &str) -> bool {
    match try_parse(raw_body) {
        Some(Value::Object(map)) => match map.get("data") {
            Some(Value::Array(items)) => items.is_empty(),
            Some(Value::Object(fields)) => fields.is_empty(),
            _ => false,
        },
        _ => false,
    }
}
