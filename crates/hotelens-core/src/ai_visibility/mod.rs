//! AI visibility check battery
//!
//! Each submodule holds one independent heuristic check. A check looks at the
//! parsed page (or, for robots.txt, the fetched file) and returns a
//! [`CheckOutcome`]; it never sees another check's result. The analyzer runs
//! them in a fixed order and folds the outcomes into a report.

pub mod hotel_info;
pub mod images;
pub mod meta_tags;
pub mod robots_txt;
pub mod semantic_html;
pub mod structured_data;

use crate::types::{Finding, Issue};

/// Score every analysis starts from
pub const BASE_SCORE: u8 = 100;

/// An issue together with the points it costs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deduction {
    pub issue: Issue,
    pub penalty: u8,
}

/// What a single check contributed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckOutcome {
    pub deductions: Vec<Deduction>,
    pub findings: Vec<Finding>,
}

impl CheckOutcome {
    /// Outcome with nothing to report
    pub fn clean() -> Self {
        Self::default()
    }

    pub fn deduct(&mut self, issue: Issue, penalty: u8) {
        self.deductions.push(Deduction { issue, penalty });
    }

    pub fn find(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    /// Sum of all penalties in this outcome
    pub fn penalty(&self) -> u32 {
        self.deductions.iter().map(|d| u32::from(d.penalty)).sum()
    }

    pub fn is_clean(&self) -> bool {
        self.deductions.is_empty() && self.findings.is_empty()
    }
}
