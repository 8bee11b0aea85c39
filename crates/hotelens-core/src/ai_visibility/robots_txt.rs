//! Robots.txt accessibility check for AI crawlers
//!
//! This is a coarse text heuristic, not a directive parser: a bot counts as
//! blocked when its `user-agent:` line appears and the file contains a
//! `disallow` directive anywhere, whichever group that directive belongs to.

use super::CheckOutcome;
use crate::types::{Category, Issue, Severity};

/// AI crawler user agents, lower-cased
pub const AI_CRAWLERS: &[&str] = &["gptbot", "chatgpt-user", "google-extended", "perplexitybot"];

pub const BLOCKED_PENALTY: u8 = 25;

/// Check fetched robots.txt content. `None` means the file could not be
/// retrieved, which is not an error and costs nothing.
pub fn check(robots_txt: Option<&str>) -> CheckOutcome {
    let mut outcome = CheckOutcome::clean();
    let Some(content) = robots_txt else {
        return outcome;
    };

    let blocked = blocked_crawlers(content);
    if !blocked.is_empty() {
        outcome.deduct(
            Issue::new(
                Category::Accessibility,
                Severity::Critical,
                format!("AI bots blocked in robots.txt: {}", blocked.join(", ")),
                "AI systems cannot crawl your website",
            )
            .with_recommendation("Allow AI bots in robots.txt or remove blocking rules"),
            BLOCKED_PENALTY,
        );
    }

    outcome
}

/// Crawlers from [`AI_CRAWLERS`] the heuristic reports as blocked, in list order
pub fn blocked_crawlers(content: &str) -> Vec<&'static str> {
    let content = content.to_lowercase();
    if !content.contains("disallow") {
        return Vec::new();
    }

    AI_CRAWLERS
        .iter()
        .copied()
        .filter(|bot| content.contains(&format!("user-agent: {bot}")))
        .collect()
}
