//! Score accumulation for category analyzers
//!
//! Each analyzer starts at 100 and subtracts a fixed number of points per
//! rule that fires. Deductions accumulate without limit and the total is
//! clamped into 0-100 only when the report is built.

use crate::{Grade, Issue, Severity};

/// Starting score for every category
pub const FULL_SCORE: i32 = 100;

/// Running score and findings for one analyzer
#[derive(Debug, Clone)]
pub struct ScoreCard {
    score: i32,
    issues: Vec<Issue>,
}

impl ScoreCard {
    pub fn new() -> Self {
        Self {
            score: FULL_SCORE,
            issues: Vec::new(),
        }
    }

    /// Record a finding and subtract its points
    pub fn deduct(&mut self, severity: Severity, points: u32, text: impl Into<String>) {
        self.score -= points as i32;
        self.issues.push(Issue::new(severity, text));
    }

    /// Raw running total; may be negative
    pub fn raw_score(&self) -> i32 {
        self.score
    }

    /// Clamp the score and close the issue list. When no rule fired, the
    /// list gets a single low-severity `all_clear` finding.
    pub fn finish(mut self, all_clear: &str) -> (u8, Vec<Issue>) {
        if self.issues.is_empty() {
            self.issues.push(Issue::new(Severity::Low, all_clear));
        }
        (clamp_score(self.score), self.issues)
    }
}

impl Default for ScoreCard {
    fn default() -> Self {
        Self::new()
    }
}

/// Clamp a raw deduction total into 0-100
pub fn clamp_score(raw: i32) -> u8 {
    raw.clamp(0, FULL_SCORE) as u8
}

/// Floor of the arithmetic mean of the category scores
pub fn overall_score(scores: &[u8]) -> u8 {
    if scores.is_empty() {
        return 0;
    }
    let sum: u32 = scores.iter().map(|&s| s as u32).sum();
    (sum / scores.len() as u32) as u8
}

/// Get a description of the grade
pub fn grade_description(grade: Grade) -> &'static str {
    match grade {
        Grade::A => "Excellent - the page follows nearly every checked practice",
        Grade::B => "Good - a few targeted fixes left",
        Grade::C => "Fair - several categories need attention",
        Grade::D => "Poor - significant usability, accessibility or SEO gaps",
        Grade::F => "Failing - the page needs major improvements",
    }
}
