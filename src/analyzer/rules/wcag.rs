//! Accessibility (WCAG) heuristics: image alt text, ARIA labeling, heading
//! hierarchy and form labels.

use super::{to_strings, CategoryAnalyzer};
use crate::analyzer::ScoreCard;
use crate::markup::{ImageTag, MarkupScan};
use crate::{AnalyzerReport, Category, Severity};

/// Points per image without alt text
const ALT_PENALTY_PER_IMAGE: u32 = 5;
const MAX_ALT_PENALTY: u32 = 30;
/// Example file names quoted from the first images lacking alt text
const MAX_ALT_EXAMPLES: usize = 3;
/// ARIA labeling is only expected above this many interactive elements
const ARIA_INTERACTIVE_THRESHOLD: usize = 5;
const MANY_MISSING_ALT: usize = 5;

const ALL_CLEAR: &str = "Good accessibility practices detected - consider adding more ARIA labels for enhanced screen reader support";

const SUMMARY_MISSING_ALT: &str = "Several images are missing descriptions, which means screen reader users won't know what they show. Adding alt text is straightforward and opens your site to millions more visitors.";
const SUMMARY_DECENT: &str = "Your accessibility foundation is decent! A few tweaks to labels and keyboard navigation will make the experience seamless for everyone.";

const RECOMMENDATIONS: [&str; 3] = [
    "Ensure all interactive elements have proper ARIA labels or visible text",
    "Test full keyboard navigation (Tab, Enter, Escape keys)",
    "Add skip-to-main-content link for keyboard users",
];

const CHECKLIST: [&str; 5] = [
    "Add meaningful alt text to all images (be descriptive, not just keywords)",
    "Ensure color contrast meets WCAG AA standards (4.5:1 for normal text)",
    "Test complete site navigation using only keyboard",
    "Associate all form inputs with proper labels",
    "Add focus indicators to all interactive elements",
];

/// Analyzer for screen reader and keyboard accessibility
pub struct WcagAnalyzer;

impl WcagAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WcagAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Distinct display names of the first few images, in document order
fn example_names(images: &[&ImageTag]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for image in images.iter().take(MAX_ALT_EXAMPLES) {
        let name = image.display_name();
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
}

/// Deduction for `count` images without alt text
pub fn alt_text_penalty(count: usize) -> u32 {
    (count as u32)
        .saturating_mul(ALT_PENALTY_PER_IMAGE)
        .min(MAX_ALT_PENALTY)
}

impl CategoryAnalyzer for WcagAnalyzer {
    fn category(&self) -> Category {
        Category::Wcag
    }

    fn analyze(&self, scan: &dyn MarkupScan) -> AnalyzerReport {
        let mut card = ScoreCard::new();
        let mut recommendations = Vec::new();

        let images = scan.images();
        let missing_alt: Vec<&ImageTag> = images.iter().filter(|img| !img.has_alt).collect();
        if !missing_alt.is_empty() {
            let examples = example_names(&missing_alt).join(", ");
            card.deduct(
                Severity::High,
                alt_text_penalty(missing_alt.len()),
                format!(
                    "{} image(s) missing alt text. Examples: {}",
                    missing_alt.len(),
                    examples
                ),
            );
            recommendations.push(format!(
                "Add descriptive alt text to all images, especially: {}",
                examples
            ));
        }

        let interactive = scan.interactive_count();
        if interactive > ARIA_INTERACTIVE_THRESHOLD && scan.aria_label_count() == 0 {
            card.deduct(
                Severity::Medium,
                12,
                "No ARIA labels found - screen readers may have difficulty identifying interactive elements",
            );
        }

        let h1s = scan.heading_count(1);
        let h2s = scan.heading_count(2);
        let h3s = scan.heading_count(3);

        if h1s > 1 {
            card.deduct(
                Severity::High,
                15,
                format!(
                    "Multiple H1 tags found ({}) - should only have one per page for proper document structure",
                    h1s
                ),
            );
        }

        if h2s == 0 && h3s > 0 {
            card.deduct(
                Severity::Medium,
                10,
                "H3 tags used without H2 tags - heading hierarchy is broken",
            );
        }

        let inputs = scan.visible_input_count();
        let labels = scan.label_count();
        if inputs > 0 && inputs > labels + 1 {
            card.deduct(
                Severity::Medium,
                10,
                format!(
                    "{} form input(s) appear to be missing associated labels",
                    inputs - labels
                ),
            );
        }

        let (score, issues) = card.finish(ALL_CLEAR);
        recommendations.extend(to_strings(&RECOMMENDATIONS));
        let summary = if missing_alt.len() > MANY_MISSING_ALT {
            SUMMARY_MISSING_ALT
        } else {
            SUMMARY_DECENT
        };

        AnalyzerReport {
            score,
            summary: summary.to_string(),
            issues,
            recommendations,
            checklist: to_strings(&CHECKLIST),
        }
    }
}
