//! Audit engine - runs the four category analyzers and assembles the report

use crate::markup::{scanner, MarkupScan, ScanMode};
use crate::{AnalyzerReport, AuditReport, Categories, Category, Grade, InputError};

use super::rules::analyzer_for;
use super::scoring::overall_score;

/// Main engine that orchestrates the category analyzers
pub struct AuditEngine {
    /// Scanner backing every analyzer
    mode: ScanMode,
    /// Run the analyzers on the rayon pool instead of one after another
    parallel: bool,
}

impl AuditEngine {
    /// Create an engine with the pattern scanner, running sequentially
    pub fn new() -> Self {
        Self {
            mode: ScanMode::Pattern,
            parallel: false,
        }
    }

    /// Select the scanner
    pub fn with_mode(mut self, mode: ScanMode) -> Self {
        self.mode = mode;
        self
    }

    /// Run the four analyzers concurrently
    pub fn parallel(mut self) -> Self {
        self.parallel = true;
        self
    }

    /// Audit one page.
    ///
    /// Rejects empty markup with [`InputError::Empty`] before any analyzer
    /// runs. A page with no detectable structure is still a valid input.
    pub fn analyze(&self, html: &str, url: &str) -> Result<AuditReport, InputError> {
        if html.is_empty() {
            return Err(InputError::Empty);
        }

        log::debug!(
            "Auditing {} ({} bytes, {} scan{})",
            url,
            html.len(),
            self.mode,
            if self.parallel { ", parallel" } else { "" }
        );

        let categories = if self.parallel {
            self.run_parallel(html)
        } else {
            self.run_sequential(html)
        };

        let overall = overall_score(&[
            categories.uiux.score,
            categories.wcag.score,
            categories.performance.score,
            categories.seo.score,
        ]);

        log::info!("Audited {}: overall {}", url, overall);

        Ok(AuditReport {
            url: url.to_string(),
            overall_score: overall,
            categories,
        })
    }

    /// Audit raw bytes, rejecting anything that is not UTF-8 text
    pub fn analyze_bytes(&self, bytes: &[u8], url: &str) -> Result<AuditReport, InputError> {
        let html = std::str::from_utf8(bytes)?;
        self.analyze(html, url)
    }

    fn run_sequential(&self, html: &str) -> Categories {
        let scan = scanner(html, self.mode);
        let [uiux, wcag, performance, seo] =
            Category::ALL.map(|category| run_analyzer(category, scan.as_ref()));
        Categories {
            uiux,
            wcag,
            performance,
            seo,
        }
    }

    /// Each task builds its own scanner; parsed documents never cross threads
    fn run_parallel(&self, html: &str) -> Categories {
        let mode = self.mode;
        let run = |category: Category| {
            let scan = scanner(html, mode);
            run_analyzer(category, scan.as_ref())
        };

        let ((uiux, wcag), (performance, seo)) = rayon::join(
            || rayon::join(|| run(Category::Uiux), || run(Category::Wcag)),
            || rayon::join(|| run(Category::Performance), || run(Category::Seo)),
        );

        Categories {
            uiux,
            wcag,
            performance,
            seo,
        }
    }

    /// Audit several pages in parallel using rayon
    pub fn analyze_many(&self, pages: &[(String, String)]) -> Vec<Result<AuditReport, InputError>> {
        use rayon::prelude::*;

        pages
            .par_iter()
            .map(|(html, url)| self.analyze(html, url))
            .collect()
    }

    /// Get aggregate stats from multiple reports
    pub fn aggregate_stats(reports: &[AuditReport]) -> AggregateStats {
        if reports.is_empty() {
            return AggregateStats::default();
        }

        let total_score: u32 = reports.iter().map(|r| r.overall_score as u32).sum();
        let average_score = (total_score / reports.len() as u32) as u8;
        let total_issues = reports.iter().map(AuditReport::issue_count).sum();

        let mut lowest_categories = [0usize; 4];
        for report in reports {
            if let Some((category, _)) = report
                .categories
                .iter()
                .min_by_key(|(_, r)| r.score)
            {
                lowest_categories[category_index(category)] += 1;
            }
        }

        AggregateStats {
            pages_audited: reports.len(),
            average_score,
            total_issues,
            weakest_category: Category::ALL
                .into_iter()
                .zip(lowest_categories)
                .filter(|(_, n)| *n > 0)
                .max_by_key(|(_, n)| *n)
                .map(|(c, _)| c),
        }
    }
}

fn run_analyzer(category: Category, scan: &dyn MarkupScan) -> AnalyzerReport {
    let analyzer = analyzer_for(category);
    let report = analyzer.analyze(scan);
    log::debug!("{}: {} ({} issues)", analyzer.category(), report.score, report.issues.len());
    report
}

fn category_index(category: Category) -> usize {
    match category {
        Category::Uiux => 0,
        Category::Wcag => 1,
        Category::Performance => 2,
        Category::Seo => 3,
    }
}

impl Default for AuditEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Aggregate statistics from multiple page audits
#[derive(Debug, Default)]
pub struct AggregateStats {
    /// Number of pages audited
    pub pages_audited: usize,
    /// Floor of the average overall score
    pub average_score: u8,
    /// Total number of issues across all pages and categories
    pub total_issues: usize,
    /// Category that most often scored lowest on a page
    pub weakest_category: Option<Category>,
}

impl AggregateStats {
    pub fn average_grade(&self) -> Grade {
        Grade::from_score(self.average_score)
    }
}
