//! Fixtures shared by the integration tests.
#![allow(dead_code)]

use serde_json::{json, Value};
use shieldpage::ConfigRecord;

/// Answers describing a small e-commerce site, used as the base of most tests.
pub fn acme_answers() -> Value {
    json!({
        "businessName": "Acme",
        "websiteUrl": "https://acme.test",
        "email": "a@acme.test",
        "businessType": "ecommerce",
        "collectsEmail": true,
    })
}

/// Builds a record from `acme_answers` with `overrides` applied on top.
pub fn acme_with(overrides: Value) -> ConfigRecord {
    let mut answers = acme_answers();
    if let (Some(base), Some(extra)) = (answers.as_object_mut(), overrides.as_object()) {
        base.extend(extra.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
    serde_json::from_value::<ConfigRecord>(answers)
        .unwrap()
        .with_last_updated("January 1, 2026")
}

/// Position of `needle` in `haystack`, panicking with context when absent.
pub fn position(haystack: &str, needle: &str) -> usize {
    haystack.find(needle).unwrap_or_else(|| panic!("'{needle}' not found in:\n{haystack}"))
}
