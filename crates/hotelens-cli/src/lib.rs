//! Argument handling, text presenter and JSON persistence for the hotelens CLI

use std::fmt::Write as FmtWrite;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use hotelens_core::{Report, report_file_name};

pub const APP_NAME: &str = "hotelens";

/// Grade a hotel website on how well AI systems can understand it
#[derive(Parser, Debug)]
#[command(name = APP_NAME)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Hotel website URL (https:// is added when no scheme is given)
    pub url: Option<String>,

    /// Analyze a local HTML file instead of fetching; URL only labels the report
    #[arg(long, value_name = "PATH")]
    pub html_file: Option<PathBuf>,

    /// Directory for the JSON report
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Do not write the JSON report
    #[arg(long)]
    pub no_save: bool,
}

pub fn usage() -> String {
    format!(
        "Usage: {APP_NAME} <hotel_website_url>\n\nExample:\n  {APP_NAME} https://example-hotel.com"
    )
}

const HEAVY_RULE_WIDTH: usize = 70;

fn push_banner(buf: &mut String, title: &str) {
    let rule = "=".repeat(HEAVY_RULE_WIDTH);
    let _ = writeln!(buf, "\n{rule}");
    let _ = writeln!(buf, "{title}");
    let _ = writeln!(buf, "{rule}");
}

fn push_section_header(buf: &mut String, title: &str) {
    let rule = "-".repeat(HEAVY_RULE_WIDTH);
    let _ = writeln!(buf, "\n{rule}");
    let _ = writeln!(buf, "{title}");
    let _ = writeln!(buf, "{rule}");
}

/// Sentence describing what a score means
pub fn interpretation(score: u8) -> &'static str {
    match score {
        90.. => "Excellent! Your website is well-optimized for AI systems.",
        80..=89 => "Good! Minor improvements will help AI systems better understand your hotel.",
        70..=79 => "Fair. Several improvements needed for better AI visibility.",
        60..=69 => "Poor. Significant improvements needed for AI systems to recommend your hotel.",
        _ => "Critical. Major issues prevent AI systems from understanding your hotel.",
    }
}

/// Render the plain-text report
pub fn render_report(report: &Report) -> String {
    let mut out = String::new();

    push_banner(&mut out, "AI VISIBILITY OPTIMISATION REPORT");
    let _ = writeln!(out, "\nWebsite: {}", report.url);
    let _ = writeln!(
        out,
        "Overall Score: {}/100 (Grade: {})",
        report.score, report.grade
    );

    let summary = &report.summary;
    let _ = writeln!(out, "\nIssues Found: {}", summary.total_issues);
    let _ = writeln!(out, "  Critical: {}", summary.critical);
    let _ = writeln!(out, "  High: {}", summary.high);
    let _ = writeln!(out, "  Medium: {}", summary.medium);
    let _ = writeln!(out, "  Low: {}", summary.low);

    if !report.recommendations.is_empty() {
        push_section_header(&mut out, "POSITIVE FINDINGS:");
        for finding in &report.recommendations {
            let _ = writeln!(out, "\n{}", finding.message);
        }
    }

    if !report.issues.is_empty() {
        push_section_header(&mut out, "ISSUES REQUIRING ATTENTION:");
        for issue in &report.issues {
            let _ = writeln!(
                out,
                "\n[{}] {}",
                issue.severity.as_str().to_uppercase(),
                issue.category
            );
            let _ = writeln!(out, "  Issue: {}", issue.issue);
            let _ = writeln!(out, "  Impact: {}", issue.impact);
            if let Some(fix) = &issue.recommendation {
                let _ = writeln!(out, "  Fix: {fix}");
            }
        }
    }

    push_banner(&mut out, "INTERPRETATION:");
    let _ = writeln!(out, "{}", interpretation(report.score));
    let _ = writeln!(out, "{}", "=".repeat(HEAVY_RULE_WIDTH));

    out
}

/// Path the JSON report for `report` is written to inside `dir`
pub fn report_path(dir: &Path, report: &Report) -> PathBuf {
    dir.join(report_file_name(&report.url))
}

/// Write the report as pretty JSON into `dir`, creating it if needed
pub fn save_report(dir: &Path, report: &Report) -> Result<PathBuf> {
    if !dir.as_os_str().is_empty() {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output directory {}", dir.display()))?;
    }

    let path = report_path(dir, report);
    let json = serde_json::to_string_pretty(report).context("failed to serialize report")?;
    fs::write(&path, json)
        .with_context(|| format!("failed to write report file {}", path.display()))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use hotelens_core::{FetchError, analyze_html, fetch_failure_report};

    #[test]
    fn test_interpretation_bands() {
        assert!(interpretation(100).starts_with("Excellent"));
        assert!(interpretation(90).starts_with("Excellent"));
        assert!(interpretation(89).starts_with("Good"));
        assert!(interpretation(70).starts_with("Fair"));
        assert!(interpretation(60).starts_with("Poor"));
        assert!(interpretation(59).starts_with("Critical"));
        assert!(interpretation(0).starts_with("Critical"));
    }

    #[test]
    fn test_render_minimal_report() {
        let report = analyze_html("https://test-hotel.com", "<html><body></body></html>", None);
        let text = render_report(&report);

        assert!(text.contains("AI VISIBILITY OPTIMISATION REPORT"));
        assert!(text.contains("Website: https://test-hotel.com"));
        assert!(text.contains("Overall Score: 35/100 (Grade: F)"));
        assert!(text.contains("Issues Found: 5"));
        assert!(text.contains("[HIGH] Structured Data"));
        assert!(text.contains("[LOW] HTML Structure"));
        assert!(text.contains("  Fix: Add Schema.org Hotel markup using JSON-LD format"));
        assert!(!text.contains("POSITIVE FINDINGS:"));
        assert!(text.contains("Critical. Major issues prevent AI systems"));
    }

    #[test]
    fn test_render_fetch_failure_has_no_fix_line() {
        let report = fetch_failure_report(
            "https://unreachable-hotel.com".to_string(),
            &FetchError::Transport("dns error".to_string()),
        );
        let text = render_report(&report);

        assert!(text.contains("[CRITICAL] Accessibility"));
        assert!(text.contains("  Issue: Failed to fetch page: dns error"));
        assert!(!text.contains("Fix:"));
        assert!(text.contains("Overall Score: 100/100 (Grade: A)"));
    }

    #[test]
    fn test_render_lists_positive_findings() {
        let html = r#"<script type="application/ld+json">{"@type": "Hotel"}</script>"#;
        let report = analyze_html("https://test-hotel.com", html, None);
        let text = render_report(&report);

        let findings = text.find("POSITIVE FINDINGS:").unwrap();
        let issues = text.find("ISSUES REQUIRING ATTENTION:").unwrap();
        assert!(findings < issues);
        assert!(text.contains("✓ Hotel Schema.org markup found"));
    }

    #[test]
    fn test_report_path_uses_host() {
        let report = analyze_html("https://www.test-hotel.com/home", "", None);
        assert_eq!(
            report_path(Path::new("out"), &report),
            Path::new("out").join("ai_visibility_report_www_test-hotel_com.json")
        );
    }

    #[test]
    fn test_usage_mentions_argument() {
        assert!(usage().starts_with("Usage: hotelens <hotel_website_url>"));
    }

    #[test]
    fn test_help_and_usage_share_the_binary_name() {
        let mut command = Args::command();
        assert_eq!(command.get_name(), APP_NAME);

        let help = command.render_help().to_string();
        assert!(help.contains(&format!("Usage: {APP_NAME}")));
        assert!(usage().contains(&format!("Usage: {APP_NAME} ")));
    }

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from(["hotelens", "example.com", "--no-save"]);
        assert_eq!(args.url.as_deref(), Some("example.com"));
        assert!(args.no_save);
        assert_eq!(args.output_dir, PathBuf::from("."));

        let args = Args::parse_from(["hotelens"]);
        assert!(args.url.is_none());
    }
}
