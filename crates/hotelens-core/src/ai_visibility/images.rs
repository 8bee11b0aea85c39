//! Image alt text check

use super::CheckOutcome;
use crate::parser::{HtmlDocument, attr};
use crate::types::{Category, Issue, Severity};

pub const MISSING_ALT_PENALTY: u8 = 8;

/// Image counts for a page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageAnalysis {
    pub total_images: usize,

    /// Images whose `alt` is absent or the empty string
    pub images_missing_alt: usize,
}

impl ImageAnalysis {
    /// More than 30% of the images lack alt text
    pub fn exceeds_threshold(&self) -> bool {
        self.total_images > 0 && self.images_missing_alt * 10 > self.total_images * 3
    }
}

pub fn analyze_images(doc: &HtmlDocument) -> ImageAnalysis {
    let images = doc.find_all("img");
    let images_missing_alt = images
        .iter()
        .filter(|img| attr(img, "alt").is_none_or(str::is_empty))
        .count();

    ImageAnalysis {
        total_images: images.len(),
        images_missing_alt,
    }
}

pub fn check(doc: &HtmlDocument) -> CheckOutcome {
    let mut outcome = CheckOutcome::clean();
    let images = analyze_images(doc);

    if images.exceeds_threshold() {
        outcome.deduct(
            Issue::new(
                Category::Accessibility,
                Severity::Medium,
                format!(
                    "{} of {} images missing alt text",
                    images.images_missing_alt, images.total_images
                ),
                "AI systems cannot understand image content",
            )
            .with_recommendation("Add descriptive alt text to all images"),
            MISSING_ALT_PENALTY,
        );
    }

    outcome
}
