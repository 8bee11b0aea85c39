//! Analysis pipeline - runs the check battery and folds outcomes into a report

use crate::ai_visibility::{
    BASE_SCORE, CheckOutcome, hotel_info, images, meta_tags, robots_txt, semantic_html,
    structured_data,
};
use crate::fetch::{FetchError, PageFetcher};
use crate::parser::HtmlDocument;
use crate::types::{Category, Finding, Issue, Report, Severity};
use crate::url_utils::{normalize_url, robots_txt_url};

/// Fetch `url` and analyze it.
///
/// A page that cannot be fetched yields a report holding only the fetch
/// failure; no other check runs and the score stays at 100.
pub async fn analyze<F: PageFetcher>(fetcher: &F, url: &str) -> Report {
    let url = normalize_url(url);

    let html = match fetcher.fetch_page(&url).await {
        Ok(html) => html,
        Err(err) => return fetch_failure_report(url, &err),
    };

    let robots_txt = match robots_txt_url(&url) {
        Some(robots_url) => fetcher.fetch_robots_txt(&robots_url).await,
        None => None,
    };

    analyze_html(&url, &html, robots_txt.as_deref())
}

/// Analyze already-retrieved HTML. `robots_txt` is the robots.txt content,
/// or `None` when it is unavailable or not wanted.
pub fn analyze_html(url: &str, html: &str, robots_txt: Option<&str>) -> Report {
    let doc = HtmlDocument::parse(html);
    analyze_document(&normalize_url(url), &doc, robots_txt)
}

pub fn analyze_document(url: &str, doc: &HtmlDocument, robots_txt: Option<&str>) -> Report {
    let mut scorecard = Scorecard::new();
    for outcome in run_checks(doc, robots_txt) {
        scorecard.absorb(outcome);
    }
    scorecard.into_report(url.to_string())
}

/// Outcomes of every check, in report order
pub fn run_checks(doc: &HtmlDocument, robots_txt: Option<&str>) -> Vec<CheckOutcome> {
    vec![
        structured_data::check(doc),
        meta_tags::check(doc),
        hotel_info::check(doc),
        robots_txt::check(robots_txt),
        semantic_html::check(doc),
        images::check(doc),
    ]
}

/// Report for a page that could not be retrieved
pub fn fetch_failure_report(url: String, err: &FetchError) -> Report {
    let issue = Issue::new(
        Category::Accessibility,
        Severity::Critical,
        format!("Failed to fetch page: {err}"),
        "AI systems cannot access your website",
    );

    Report::new(url, BASE_SCORE, vec![issue], Vec::new())
}

/// Running totals for one analysis
struct Scorecard {
    issues: Vec<Issue>,
    findings: Vec<Finding>,
    penalty: u32,
}

impl Scorecard {
    fn new() -> Self {
        Self {
            issues: Vec::new(),
            findings: Vec::new(),
            penalty: 0,
        }
    }

    fn absorb(&mut self, outcome: CheckOutcome) {
        for deduction in outcome.deductions {
            self.penalty += u32::from(deduction.penalty);
            self.issues.push(deduction.issue);
        }
        self.findings.extend(outcome.findings);
    }

    fn score(&self) -> u8 {
        // Floors at 0; checks never add points
        u32::from(BASE_SCORE).saturating_sub(self.penalty) as u8
    }

    fn into_report(self, url: String) -> Report {
        let score = self.score();
        Report::new(url, score, self.issues, self.findings)
    }
}
