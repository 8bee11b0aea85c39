//! Report model shared by the analyzer and its presenters

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a detected issue, most severe first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Blocks AI systems from reading the site at all
    Critical,

    /// Strongly reduces what AI systems can extract
    High,

    /// Recommended fix
    Medium,

    /// Nice to have
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Area of the page an issue or finding belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Structured Data")]
    StructuredData,
    #[serde(rename = "Meta Tags")]
    MetaTags,
    Content,
    Accessibility,
    #[serde(rename = "HTML Structure")]
    HtmlStructure,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::StructuredData => "Structured Data",
            Category::MetaTags => "Meta Tags",
            Category::Content => "Content",
            Category::Accessibility => "Accessibility",
            Category::HtmlStructure => "HTML Structure",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A detected problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub category: Category,
    pub severity: Severity,

    /// What is wrong
    pub issue: String,

    /// Consequence for AI consumption
    pub impact: String,

    /// Suggested fix; absent only for the fetch-failure issue
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

impl Issue {
    pub fn new(
        category: Category,
        severity: Severity,
        issue: impl Into<String>,
        impact: impl Into<String>,
    ) -> Self {
        Self {
            category,
            severity,
            issue: issue.into(),
            impact: impact.into(),
            recommendation: None,
        }
    }

    pub fn with_recommendation(mut self, recommendation: impl Into<String>) -> Self {
        self.recommendation = Some(recommendation.into());
        self
    }
}

/// A positive observation; never affects the score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub category: Category,
    pub message: String,
}

impl Finding {
    pub fn new(category: Category, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }
}

/// Letter grade derived from the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Inclusive lower bounds: 90 A, 80 B, 70 C, 60 D, below that F
    pub fn from_score(score: u8) -> Self {
        match score {
            90.. => Grade::A,
            80..=89 => Grade::B,
            70..=79 => Grade::C,
            60..=69 => Grade::D,
            _ => Grade::F,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        f.write_str(letter)
    }
}

/// Issue counts per severity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total_issues: usize,
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl Summary {
    pub fn from_issues(issues: &[Issue]) -> Self {
        let count = |severity: Severity| issues.iter().filter(|i| i.severity == severity).count();

        Self {
            total_issues: issues.len(),
            critical: count(Severity::Critical),
            high: count(Severity::High),
            medium: count(Severity::Medium),
            low: count(Severity::Low),
        }
    }
}

/// Final output for one analyzed URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Analyzed address, scheme-normalized
    pub url: String,

    /// Overall score (0-100)
    pub score: u8,

    pub grade: Grade,
    pub summary: Summary,

    /// Issues in the order the checks ran
    pub issues: Vec<Issue>,

    /// Positive findings
    pub recommendations: Vec<Finding>,
}

impl Report {
    /// Assemble a report; grade and summary are derived from `score` and `issues`
    pub fn new(url: String, score: u8, issues: Vec<Issue>, recommendations: Vec<Finding>) -> Self {
        Self {
            url,
            score,
            grade: Grade::from_score(score),
            summary: Summary::from_issues(&issues),
            issues,
            recommendations,
        }
    }
}
