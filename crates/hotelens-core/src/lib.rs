//! # hotelens-core
//!
//! Scores a hotel homepage on how well AI assistants and search crawlers can
//! extract structured information about the property.
//!
//! This library provides:
//! - A parsed-document wrapper with the tree queries the checks need
//! - A fixed battery of independent heuristic checks (structured data, meta
//!   tags, hotel information, robots.txt, semantic HTML, image alt text)
//! - Score, grade and severity aggregation into a serializable [`Report`]
//!
//! ## Features
//!
//! - `default`: Offline analysis of HTML you already have
//! - `http`: [`HttpFetcher`], a reqwest-backed [`PageFetcher`]
//!
//! ## Example
//!
//! ```
//! use hotelens_core::analyze_html;
//!
//! let html = r#"
//!     <script type="application/ld+json">
//!     {"@context": "https://schema.org", "@type": "Hotel", "name": "Example"}
//!     </script>
//! "#;
//!
//! let report = analyze_html("example-hotel.com", html, None);
//! assert_eq!(report.url, "https://example-hotel.com");
//! assert_eq!(report.recommendations.len(), 1);
//! ```

pub mod ai_visibility;
pub mod analyzer;
pub mod fetch;
pub mod parser;
pub mod types;
pub mod url_utils;

// Re-export commonly used types
pub use types::{Category, Finding, Grade, Issue, Report, Severity, Summary};

pub use analyzer::{analyze, analyze_document, analyze_html, fetch_failure_report};
pub use fetch::{FetchError, PageFetcher};
pub use parser::HtmlDocument;
pub use url_utils::{normalize_url, report_file_name};

#[cfg(feature = "http")]
pub use fetch::HttpFetcher;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_creation() {
        let issue = Issue::new(
            Category::HtmlStructure,
            Severity::Low,
            "Limited use of semantic HTML tags",
            "AI systems may have difficulty parsing content structure",
        );

        assert_eq!(issue.category, Category::HtmlStructure);
        assert_eq!(issue.severity, Severity::Low);
        assert!(issue.recommendation.is_none());
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Critical < Severity::High);
        assert!(Severity::High < Severity::Medium);
        assert!(Severity::Medium < Severity::Low);
    }

    #[test]
    fn test_report_round_trips_through_json() {
        let report = analyze_html("https://test-hotel.com", "<html><body></body></html>", None);

        let json = serde_json::to_string_pretty(&report).unwrap();
        let parsed: Report = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, report);
    }

    #[test]
    fn test_single_hotel_block_end_to_end() {
        let html = r#"
            <html>
                <head>
                    <script type="application/ld+json">
                    {"@context": "https://schema.org", "@type": "LodgingBusiness", "name": "Test Lodge"}
                    </script>
                </head>
                <body>Some content</body>
            </html>
        "#;

        let report = analyze_html("https://test-hotel.com", html, None);
        assert!(
            report
                .issues
                .iter()
                .all(|i| i.category != Category::StructuredData)
        );
        assert_eq!(report.recommendations[0].message, "✓ Hotel Schema.org markup found");
    }
}
