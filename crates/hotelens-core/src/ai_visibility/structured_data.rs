//! Schema.org structured data check
//!
//! Looks for JSON-LD blocks and, among them, a top-level object typed as a
//! hotel. Blocks that fail to parse are skipped without comment.

use serde_json::Value as JsonValue;

use super::CheckOutcome;
use crate::parser::HtmlDocument;
use crate::types::{Category, Finding, Issue, Severity};

/// `@type` values that mark a lodging business. A string `@type` matches when
/// it contains one of them; an array element must equal one exactly.
pub const HOTEL_TYPES: &[&str] = &["Hotel", "LodgingBusiness"];

pub const NO_STRUCTURED_DATA_PENALTY: u8 = 20;
pub const NO_HOTEL_SCHEMA_PENALTY: u8 = 15;

pub fn check(doc: &HtmlDocument) -> CheckOutcome {
    let mut outcome = CheckOutcome::clean();
    let blocks = doc.json_ld_blocks();

    if blocks.is_empty() {
        outcome.deduct(
            Issue::new(
                Category::StructuredData,
                Severity::High,
                "No Schema.org structured data found",
                "AI systems cannot easily extract hotel information",
            )
            .with_recommendation("Add Schema.org Hotel markup using JSON-LD format"),
            NO_STRUCTURED_DATA_PENALTY,
        );
        return outcome;
    }

    // First matching block wins
    let has_hotel_schema = blocks.iter().any(|block| {
        serde_json::from_str::<JsonValue>(block)
            .map(|value| is_hotel_entity(&value))
            .unwrap_or(false)
    });

    if has_hotel_schema {
        outcome.find(Finding::new(
            Category::StructuredData,
            "✓ Hotel Schema.org markup found",
        ));
    } else {
        outcome.deduct(
            Issue::new(
                Category::StructuredData,
                Severity::High,
                "No Hotel-specific Schema.org markup found",
                "AI systems may not recognize this as a hotel website",
            )
            .with_recommendation("Add Schema.org Hotel or LodgingBusiness type"),
            NO_HOTEL_SCHEMA_PENALTY,
        );
    }

    outcome
}

/// Whether a parsed block is an object whose `@type` names a hotel.
///
/// Only top-level objects are considered; `@graph` and array documents are not searched.
fn is_hotel_entity(value: &JsonValue) -> bool {
    let Some(schema_type) = value.as_object().and_then(|obj| obj.get("@type")) else {
        return false;
    };

    match schema_type {
        JsonValue::String(s) => names_hotel(s),
        JsonValue::Array(types) => types
            .iter()
            .any(|t| t.as_str().is_some_and(|t| HOTEL_TYPES.contains(&t))),
        _ => false,
    }
}

fn names_hotel(schema_type: &str) -> bool {
    HOTEL_TYPES.iter().any(|t| schema_type.contains(t))
}
