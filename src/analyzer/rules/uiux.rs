//! UI/UX heuristics: choice overload, heading structure, navigation and form labeling.

use super::{to_strings, CategoryAnalyzer};
use crate::analyzer::ScoreCard;
use crate::markup::MarkupScan;
use crate::{AnalyzerReport, Category, Severity};

/// More buttons than this is flagged (Hick's law)
const MAX_BUTTONS: usize = 10;
/// Above this, the summary focuses on simplifying choices
const BUSY_SUMMARY_THRESHOLD: usize = 15;

const ALL_CLEAR: &str =
    "Overall UI structure looks good - consider fine-tuning spacing and visual hierarchy";

const SUMMARY_BUSY: &str = "Your interface has many interactive elements. Simplifying choices and grouping related actions can help users navigate more intuitively and reduce decision fatigue.";
const SUMMARY_ORGANIZED: &str = "Your design structure shows good organization! Fine-tuning spacing and visual hierarchy will help guide users naturally through the content.";

const RECOMMENDATIONS: [&str; 3] = [
    "Ensure primary CTAs use contrasting colors and adequate size (min 44x44px)",
    "Maintain consistent spacing using 8px grid system",
    "Group related navigation items to reduce cognitive load",
];

const CHECKLIST: [&str; 4] = [
    "Review all interactive elements for adequate size (minimum 44x44px touch targets)",
    "Standardize spacing between sections using consistent values",
    "Ensure visual hierarchy: most important elements should stand out first",
    "Limit navigation items to 7±2 choices per menu level",
];

/// Analyzer for interface structure and clarity
pub struct UiUxAnalyzer;

impl UiUxAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for UiUxAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryAnalyzer for UiUxAnalyzer {
    fn category(&self) -> Category {
        Category::Uiux
    }

    fn analyze(&self, scan: &dyn MarkupScan) -> AnalyzerReport {
        let mut card = ScoreCard::new();

        let total_buttons = scan.button_count() + scan.button_link_count();
        if total_buttons > MAX_BUTTONS {
            card.deduct(
                Severity::Medium,
                10,
                format!(
                    "Found {} interactive buttons/links - consider reducing to improve clarity (Hick's Law)",
                    total_buttons
                ),
            );
        }

        let h1_count = scan.heading_count(1);
        if h1_count == 0 {
            card.deduct(
                Severity::High,
                15,
                "No H1 heading found - main page title missing affects visual hierarchy",
            );
        } else if h1_count > 1 {
            card.deduct(
                Severity::Medium,
                10,
                format!(
                    "Multiple H1 headings detected ({}) - should have exactly one for clear hierarchy",
                    h1_count
                ),
            );
        }

        if !scan.has_navigation() {
            card.deduct(
                Severity::Medium,
                10,
                "No semantic <nav> element detected - navigation structure unclear",
            );
        }

        for (idx, form) in scan.forms().iter().enumerate() {
            if form.visible_inputs > 0 && form.visible_inputs > form.labels {
                card.deduct(
                    Severity::Medium,
                    8,
                    format!(
                        "Form #{} has {} input(s) without associated labels",
                        idx + 1,
                        form.unlabeled()
                    ),
                );
            }
        }

        let (score, issues) = card.finish(ALL_CLEAR);
        let summary = if total_buttons > BUSY_SUMMARY_THRESHOLD {
            SUMMARY_BUSY
        } else {
            SUMMARY_ORGANIZED
        };

        AnalyzerReport {
            score,
            summary: summary.to_string(),
            issues,
            recommendations: to_strings(&RECOMMENDATIONS),
            checklist: to_strings(&CHECKLIST),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::PatternScanner;

    fn analyze(html: &str) -> AnalyzerReport {
        UiUxAnalyzer::new().analyze(&PatternScanner::new(html))
    }

    const CLEAN: &str = r#"<nav><a href="/">Home</a></nav><h1>Title</h1>"#;

    #[test]
    fn clean_page_scores_full_with_single_low_issue() {
        let report = analyze(CLEAN);
        assert_eq!(report.score, 100);
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].severity, Severity::Low);
        assert_eq!(report.issues[0].text, ALL_CLEAR);
        assert_eq!(report.summary, SUMMARY_ORGANIZED);
    }

    #[test]
    fn twelve_buttons_without_heading_or_nav() {
        let html = format!("<body>{}</body>", "<button>x</button>".repeat(12));
        let report = analyze(&html);
        assert_eq!(report.score, 65);
        assert_eq!(report.issues.len(), 3);
        assert!(report.issues[0].text.starts_with("Found 12 interactive"));
        assert_eq!(report.issues[1].severity, Severity::High);
        assert!(report.issues[2].text.contains("<nav>"));
        assert_eq!(report.summary, SUMMARY_ORGANIZED);
    }

    #[test]
    fn button_links_count_toward_busy_summary() {
        let html = format!(
            "{}{}{}",
            CLEAN,
            "<button>b</button>".repeat(8),
            r#"<a class="btn" href="/x">x</a>"#.repeat(8)
        );
        let report = analyze(&html);
        assert_eq!(report.score, 90);
        assert_eq!(report.summary, SUMMARY_BUSY);
    }

    #[test]
    fn multiple_h1_is_medium() {
        let report = analyze(r#"<nav></nav><h1>a</h1><h1>b</h1><h1>c</h1>"#);
        assert_eq!(report.score, 90);
        assert_eq!(report.issues[0].severity, Severity::Medium);
        assert!(report.issues[0].text.contains("(3)"));
    }

    #[test]
    fn each_underlabeled_form_costs_eight() {
        let html = format!(
            "{}{}{}{}",
            CLEAN,
            r#"<form><input type="text"><input type="email"><label>a</label></form>"#,
            r#"<form><label>q</label><input type="search"></form>"#,
            r#"<form><input type="password"></form>"#
        );
        let report = analyze(&html);
        assert_eq!(report.score, 84);
        let texts: Vec<&str> = report.issues.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "Form #1 has 1 input(s) without associated labels",
                "Form #3 has 1 input(s) without associated labels",
            ]
        );
    }

    #[test]
    fn hidden_only_form_is_not_flagged() {
        let html = format!("{}{}", CLEAN, r#"<form><input type="hidden" name="t"></form>"#);
        assert_eq!(analyze(&html).score, 100);
    }

    #[test]
    fn static_guidance_is_input_independent() {
        let a = analyze(CLEAN);
        let b = analyze("<p>bare</p>");
        assert_eq!(a.recommendations, b.recommendations);
        assert_eq!(a.recommendations.len(), 3);
        assert_eq!(a.checklist, b.checklist);
        assert_eq!(a.checklist.len(), 4);
    }
}
