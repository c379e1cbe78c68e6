//! SEO heuristics: title and meta description, heading structure, structured
//! data and canonical URL.

use super::{to_strings, CategoryAnalyzer};
use crate::analyzer::ScoreCard;
use crate::markup::MarkupScan;
use crate::{AnalyzerReport, Category, Severity};

const MIN_TITLE_CHARS: usize = 30;
const MAX_TITLE_CHARS: usize = 60;
const MIN_DESCRIPTION_CHARS: usize = 120;

const ALL_CLEAR: &str = "SEO fundamentals are in place - consider adding structured data for enhanced search appearance";

const SUMMARY_NEEDS_METADATA: &str = "Search engines need help understanding your content. Adding proper titles and descriptions tells them exactly what each page is about, helping the right people discover you.";
const SUMMARY_BASICS_IN_PLACE: &str = "Your SEO basics are in place! Adding structured data and fine-tuning your content structure will give you an extra edge in search results.";

const ADD_TITLE: &str = "Add a unique, descriptive title tag (50-60 characters)";
const ADD_DESCRIPTION: &str =
    "Add compelling meta description (150-160 characters) to improve click-through rates";

const RECOMMENDATIONS: [&str; 3] = [
    "Ensure each page has unique, descriptive title and meta description",
    "Create proper heading hierarchy (single H1, then H2, H3, etc.)",
    "Implement Schema.org structured data for better search appearance",
];

const CHECKLIST: [&str; 6] = [
    "Write unique title tag (50-60 characters) for each page",
    "Add compelling meta description (150-160 characters) for each page",
    "Ensure exactly one H1 tag per page with primary keyword",
    "Create logical heading hierarchy (H1 → H2 → H3)",
    "Add Schema.org structured data markup",
    "Verify all images have descriptive alt text",
];

/// Analyzer for search engine discoverability
pub struct SeoAnalyzer;

impl SeoAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SeoAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryAnalyzer for SeoAnalyzer {
    fn category(&self) -> Category {
        Category::Seo
    }

    fn analyze(&self, scan: &dyn MarkupScan) -> AnalyzerReport {
        let mut card = ScoreCard::new();
        let mut recommendations = Vec::new();

        match scan.title() {
            None => {
                card.deduct(
                    Severity::High,
                    20,
                    "Missing <title> tag - critical for search engine rankings",
                );
                recommendations.push(ADD_TITLE.to_string());
            }
            Some(title) => {
                let len = title.chars().count();
                if len < MIN_TITLE_CHARS {
                    card.deduct(
                        Severity::Medium,
                        10,
                        format!(
                            "Page title too short ({} characters: \"{}\") - aim for 50-60 characters",
                            len, title
                        ),
                    );
                } else if len > MAX_TITLE_CHARS {
                    card.deduct(
                        Severity::Low,
                        5,
                        format!(
                            "Page title too long ({} characters) - may be truncated in search results",
                            len
                        ),
                    );
                }
            }
        }

        let description = scan.meta_description();
        match description.as_deref() {
            None => {
                card.deduct(
                    Severity::High,
                    20,
                    "Missing meta description - search engines will generate their own snippet",
                );
                recommendations.push(ADD_DESCRIPTION.to_string());
            }
            Some(desc) => {
                let len = desc.chars().count();
                if len < MIN_DESCRIPTION_CHARS {
                    card.deduct(
                        Severity::Medium,
                        8,
                        format!(
                            "Meta description too short ({} characters) - aim for 150-160 characters",
                            len
                        ),
                    );
                }
            }
        }

        let h1_count = scan.heading_count(1);
        if h1_count == 0 {
            card.deduct(
                Severity::High,
                15,
                "No H1 tag found - missing primary page heading for SEO",
            );
        } else if h1_count > 1 {
            card.deduct(
                Severity::Medium,
                10,
                format!(
                    "Multiple H1 tags ({}) detected - should have exactly one per page",
                    h1_count
                ),
            );
        }

        if scan.heading_count(2) == 0 && scan.heading_count(3) > 0 {
            card.deduct(
                Severity::Low,
                5,
                "Heading hierarchy broken - H3 used without H2 tags",
            );
        }

        if !scan.has_structured_data() {
            card.deduct(
                Severity::Low,
                8,
                "No structured data (Schema.org) detected - missing rich snippets opportunity",
            );
        }

        if !scan.has_canonical() {
            card.deduct(
                Severity::Low,
                5,
                "No canonical URL specified - could lead to duplicate content issues",
            );
        }

        let (score, issues) = card.finish(ALL_CLEAR);
        recommendations.extend(to_strings(&RECOMMENDATIONS));
        let summary = if description.is_none() {
            SUMMARY_NEEDS_METADATA
        } else {
            SUMMARY_BASICS_IN_PLACE
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
