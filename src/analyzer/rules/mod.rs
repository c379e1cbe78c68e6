//! Category analyzers
//!
//! Each analyzer is a stateless set of independent rule checks over one
//! [`MarkupScan`]. Rules do not exclude each other: every rule that fires
//! records an issue and subtracts its points from the category score.

pub mod performance;
pub mod seo;
pub mod uiux;
pub mod wcag;

pub use performance::PerformanceAnalyzer;
pub use seo::SeoAnalyzer;
pub use uiux::UiUxAnalyzer;
pub use wcag::WcagAnalyzer;

use crate::markup::MarkupScan;
use crate::{AnalyzerReport, Category};

/// Trait for category analyzers
pub trait CategoryAnalyzer: Send + Sync {
    /// Category this analyzer reports on
    fn category(&self) -> Category;

    /// Run every rule check and build the category report
    fn analyze(&self, scan: &dyn MarkupScan) -> AnalyzerReport;
}

/// The analyzer for `category`
pub fn analyzer_for(category: Category) -> Box<dyn CategoryAnalyzer> {
    match category {
        Category::Uiux => Box::new(UiUxAnalyzer::new()),
        Category::Wcag => Box::new(WcagAnalyzer::new()),
        Category::Performance => Box::new(PerformanceAnalyzer::new()),
        Category::Seo => Box::new(SeoAnalyzer::new()),
    }
}

pub(crate) fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
