//! Title and meta description check

use super::CheckOutcome;
use crate::parser::{HtmlDocument, attr, element_text};
use crate::types::{Category, Issue, Severity};

/// Shortest acceptable title, in characters after trimming
pub const MIN_TITLE_CHARS: usize = 10;

/// Shortest acceptable meta description, in characters after trimming
pub const MIN_DESCRIPTION_CHARS: usize = 50;

pub const TITLE_PENALTY: u8 = 10;
pub const DESCRIPTION_PENALTY: u8 = 10;

pub fn check(doc: &HtmlDocument) -> CheckOutcome {
    let mut outcome = CheckOutcome::clean();

    let title = doc.find_first("title").map(|el| element_text(&el));
    if !long_enough(title.as_deref(), MIN_TITLE_CHARS) {
        outcome.deduct(
            Issue::new(
                Category::MetaTags,
                Severity::High,
                "Missing or insufficient title tag",
                "AI systems may not understand page purpose",
            )
            .with_recommendation("Add descriptive title with hotel name and location"),
            TITLE_PENALTY,
        );
    }

    let description = doc
        .find_first_with_attr("meta", "name", "description")
        .and_then(|el| attr(&el, "content"));
    if !long_enough(description, MIN_DESCRIPTION_CHARS) {
        outcome.deduct(
            Issue::new(
                Category::MetaTags,
                Severity::Medium,
                "Missing or insufficient meta description",
                "AI systems lack context about your hotel",
            )
            .with_recommendation("Add meta description (150-160 chars) with key hotel features"),
            DESCRIPTION_PENALTY,
        );
    }

    outcome
}

fn long_enough(value: Option<&str>, min_chars: usize) -> bool {
    value.is_some_and(|v| v.trim().chars().count() >= min_chars)
}
