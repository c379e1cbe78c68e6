//! Siteaudit: heuristic quality audit for HTML pages
//!
//! This library scores a fetched HTML document across four categories
//! (UI/UX, accessibility, performance and SEO) using static pattern checks
//! over the raw markup, and rolls them up into an overall score.

pub mod analyzer;
pub mod config;
pub mod error;
pub mod markup;
pub mod reporter;

pub use error::InputError;
pub use markup::ScanMode;

use serde::{Deserialize, Serialize};

/// Severity levels for issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
        }
    }
}

/// A finding produced by one of the category analyzers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Severity of the issue
    pub severity: Severity,
    /// Human-readable message
    pub text: String,
}

impl Issue {
    pub fn new(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            severity,
            text: text.into(),
        }
    }
}

/// Audit categories, in report order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Uiux,
    Wcag,
    Performance,
    Seo,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Uiux,
        Category::Wcag,
        Category::Performance,
        Category::Seo,
    ];

    /// Display title used by the console reporter
    pub fn title(&self) -> &'static str {
        match self {
            Category::Uiux => "UI/UX",
            Category::Wcag => "Accessibility (WCAG)",
            Category::Performance => "Performance",
            Category::Seo => "SEO",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Uiux => write!(f, "uiux"),
            Category::Wcag => write!(f, "wcag"),
            Category::Performance => write!(f, "performance"),
            Category::Seo => write!(f, "seo"),
        }
    }
}

/// Result of one category analyzer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerReport {
    /// Category score (0-100)
    pub score: u8,
    /// One-sentence narrative summary
    pub summary: String,
    /// Findings in discovery order; never empty
    pub issues: Vec<Issue>,
    /// Prioritized recommendations
    pub recommendations: Vec<String>,
    /// Static best-practice reminders for the category
    pub checklist: Vec<String>,
}

/// Per-category reports, serialized in fixed key order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Categories {
    pub uiux: AnalyzerReport,
    pub wcag: AnalyzerReport,
    pub performance: AnalyzerReport,
    pub seo: AnalyzerReport,
}

impl Categories {
    pub fn get(&self, category: Category) -> &AnalyzerReport {
        match category {
            Category::Uiux => &self.uiux,
            Category::Wcag => &self.wcag,
            Category::Performance => &self.performance,
            Category::Seo => &self.seo,
        }
    }

    /// Reports paired with their category, in report order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &AnalyzerReport)> {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

/// The full audit of one page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    /// Address the markup was fetched from (display only)
    pub url: String,
    /// Floor of the mean of the four category scores
    pub overall_score: u8,
    pub categories: Categories,
}

impl AuditReport {
    pub fn grade(&self) -> Grade {
        Grade::from_score(self.overall_score)
    }

    /// Total number of issues across all categories
    pub fn issue_count(&self) -> usize {
        self.categories.iter().map(|(_, r)| r.issues.len()).sum()
    }
}

/// Letter grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn from_score(score: u8) -> Self {
        match score {
            90..=100 => Grade::A,
            80..=89 => Grade::B,
            70..=79 => Grade::C,
            60..=69 => Grade::D,
            _ => Grade::F,
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Grade::A => write!(f, "A"),
            Grade::B => write!(f, "B"),
            Grade::C => write!(f, "C"),
            Grade::D => write!(f, "D"),
            Grade::F => write!(f, "F"),
        }
    }
}

/// Public API: audit one page with the default (pattern) scanner.
///
/// * `html` - the fetched page body
/// * `url` - display string copied into the report; never fetched
pub fn audit_html(html: &str, url: &str) -> Result<AuditReport, InputError> {
    crate::analyzer::AuditEngine::new().analyze(html, url)
}
