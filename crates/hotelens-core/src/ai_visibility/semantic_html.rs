//! Semantic HTML usage check

use super::CheckOutcome;
use crate::parser::HtmlDocument;
use crate::types::{Category, Issue, Severity};

/// Structural HTML5 elements that count toward semantic markup
pub const SEMANTIC_TAGS: &[&str] = &["header", "main", "article", "section", "nav", "footer"];

/// Fewer distinct semantic elements than this is reported
pub const MIN_DISTINCT_TAGS: usize = 3;

pub const LIMITED_SEMANTICS_PENALTY: u8 = 5;

pub fn check(doc: &HtmlDocument) -> CheckOutcome {
    let mut outcome = CheckOutcome::clean();

    if semantic_tags_present(doc).len() < MIN_DISTINCT_TAGS {
        outcome.deduct(
            Issue::new(
                Category::HtmlStructure,
                Severity::Low,
                "Limited use of semantic HTML tags",
                "AI systems may have difficulty parsing content structure",
            )
            .with_recommendation("Use semantic HTML5 tags (header, main, article, section)"),
            LIMITED_SEMANTICS_PENALTY,
        );
    }

    outcome
}

/// Semantic tags that appear at least once
pub fn semantic_tags_present(doc: &HtmlDocument) -> Vec<&'static str> {
    SEMANTIC_TAGS
        .iter()
        .copied()
        .filter(|tag| doc.exists(tag))
        .collect()
}
