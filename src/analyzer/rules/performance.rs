//! Performance heuristics derived from static markup: document weight, inline
//! styles, external resources, render-blocking scripts and image volume.

use super::{to_strings, CategoryAnalyzer};
use crate::analyzer::ScoreCard;
use crate::markup::MarkupScan;
use crate::{AnalyzerReport, Category, Severity};

const LARGE_DOCUMENT_BYTES: usize = 500_000;
const HEAVY_DOCUMENT_BYTES: usize = 200_000;
const MAX_INLINE_STYLES: usize = 20;
const MAX_EXTERNAL_RESOURCES: usize = 15;
const MAX_IMAGES: usize = 20;
const MANY_RESOURCES_SUMMARY_THRESHOLD: usize = 20;

const ALL_CLEAR: &str =
    "Performance looks good overall - consider implementing progressive image loading";

const SUMMARY_MANY_RESOURCES: &str = "Your site loads quite a few external resources. Combining files and deferring non-critical scripts will make everything feel much snappier, especially on slower connections.";
const SUMMARY_REASONABLE: &str = "Performance looks reasonable! Some quick optimizations to images and scripts could still shave off valuable milliseconds.";

const RECOMMENDATIONS: [&str; 4] = [
    "Compress and convert images to modern formats (WebP, AVIF)",
    "Add async/defer to non-critical JavaScript files",
    "Implement browser caching headers for static assets",
    "Minify CSS and JavaScript files",
];

const CHECKLIST: [&str; 6] = [
    "Compress all images and use modern formats (WebP, AVIF)",
    "Implement lazy loading for images below the fold",
    "Add async or defer attributes to non-critical scripts",
    "Minify all CSS and JavaScript files",
    "Enable browser caching with proper cache-control headers",
    "Use CDN for static assets if possible",
];

/// Analyzer for page weight and loading behavior
pub struct PerformanceAnalyzer;

impl PerformanceAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PerformanceAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Byte count shown in KB with two decimals, halves rounded up
fn kilobytes(bytes: usize) -> String {
    let hundredths = (bytes as u64 * 100 + 512) / 1024;
    format!("{}.{:02}", hundredths / 100, hundredths % 100)
}

impl CategoryAnalyzer for PerformanceAnalyzer {
    fn category(&self) -> Category {
        Category::Performance
    }

    fn analyze(&self, scan: &dyn MarkupScan) -> AnalyzerReport {
        let mut card = ScoreCard::new();

        let size = scan.byte_len();
        if size > LARGE_DOCUMENT_BYTES {
            card.deduct(
                Severity::High,
                20,
                format!(
                    "Large HTML document ({}KB) - consider code splitting and lazy loading",
                    kilobytes(size)
                ),
            );
        } else if size > HEAVY_DOCUMENT_BYTES {
            card.deduct(
                Severity::Medium,
                10,
                format!(
                    "HTML document size is {}KB - room for optimization",
                    kilobytes(size)
                ),
            );
        }

        let inline_styles = scan.inline_style_count();
        if inline_styles > MAX_INLINE_STYLES {
            card.deduct(
                Severity::Medium,
                12,
                format!(
                    "{} inline style attributes found - extract to external CSS for better caching",
                    inline_styles
                ),
            );
        }

        let scripts = scan.external_script_count();
        let stylesheets = scan.stylesheet_count();
        let total_external = scripts + stylesheets;
        if total_external > MAX_EXTERNAL_RESOURCES {
            card.deduct(
                Severity::Medium,
                10,
                format!(
                    "{} external resources ({} scripts, {} stylesheets) - consider bundling",
                    total_external, scripts, stylesheets
                ),
            );
        }

        let blocking = scan.blocking_script_count();
        if blocking > 0 {
            card.deduct(
                Severity::Medium,
                15,
                format!(
                    "{} render-blocking script(s) detected - add async or defer attributes",
                    blocking
                ),
            );
        }

        let images = scan.images().len();
        if images > MAX_IMAGES {
            card.deduct(
                Severity::Medium,
                8,
                format!(
                    "{} images found - implement lazy loading for images below the fold",
                    images
                ),
            );
        }

        let (score, issues) = card.finish(ALL_CLEAR);
        let summary = if total_external > MANY_RESOURCES_SUMMARY_THRESHOLD {
            SUMMARY_MANY_RESOURCES
        } else {
            SUMMARY_REASONABLE
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
