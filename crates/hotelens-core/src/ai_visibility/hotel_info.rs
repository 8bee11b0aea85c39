//! Key hotel information check
//!
//! Keyword presence in the page's rendered text, one keyword set per category.

use super::CheckOutcome;
use crate::parser::HtmlDocument;
use crate::types::{Category, Issue, Severity};

/// Information categories and the keywords that satisfy them, in report order
pub const INFO_KEYWORDS: &[(&str, &[&str])] = &[
    ("address", &["address", "location", "located at"]),
    (
        "amenities",
        &["amenities", "facilities", "features", "pool", "gym", "wifi"],
    ),
    ("contact", &["phone", "email", "contact"]),
    ("rooms", &["room", "suite", "accommodation"]),
];

pub const PENALTY_PER_MISSING: u8 = 5;

pub fn check(doc: &HtmlDocument) -> CheckOutcome {
    let mut outcome = CheckOutcome::clean();
    let missing = missing_categories(&doc.text().to_lowercase());

    if !missing.is_empty() {
        let listed = missing.join(", ");
        outcome.deduct(
            Issue::new(
                Category::Content,
                Severity::Medium,
                format!("Missing key information: {listed}"),
                "AI systems cannot provide complete hotel details",
            )
            .with_recommendation(format!("Add clear sections for: {listed}")),
            PENALTY_PER_MISSING * missing.len() as u8,
        );
    }

    outcome
}

/// Categories with none of their keywords in `text` (already lower-cased)
fn missing_categories(text: &str) -> Vec<&'static str> {
    INFO_KEYWORDS
        .iter()
        .filter(|(_, keywords)| !keywords.iter().any(|k| text.contains(k)))
        .map(|(name, _)| *name)
        .collect()
}
