//! JSON reporter for machine-readable output

use crate::analyzer::AggregateStats;
use crate::{AuditReport, Category};
use serde::Serialize;

/// Reporter for JSON output
pub struct JsonReporter {
    /// Whether to pretty-print JSON
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Enable pretty-printing
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    fn render<T: Serialize + ?Sized>(&self, value: &T, fallback: &str) -> String {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        rendered.unwrap_or_else(|e| {
            log::error!("Failed to serialize report: {}", e);
            fallback.to_string()
        })
    }

    /// Report a single page audit as JSON
    pub fn report(&self, report: &AuditReport) -> String {
        self.render(report, "{}")
    }

    /// Report multiple page audits with a summary object
    pub fn report_with_summary(&self, reports: &[AuditReport], stats: &AggregateStats) -> String {
        let output = JsonOutput {
            results: reports,
            summary: JsonSummary {
                pages_audited: stats.pages_audited,
                average_score: stats.average_score,
                average_grade: stats.average_grade().to_string(),
                total_issues: stats.total_issues,
                weakest_category: stats.weakest_category,
            },
        };
        self.render(&output, "{}")
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput<'a> {
    results: &'a [AuditReport],
    summary: JsonSummary,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonSummary {
    pages_audited: usize,
    average_score: u8,
    average_grade: String,
    total_issues: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    weakest_category: Option<Category>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::AuditEngine;

    fn make_report(url: &str) -> AuditReport {
        AuditEngine::new()
            .analyze("<html><head><title>Hi</title></head><body></body></html>", url)
            .unwrap()
    }

    #[test]
    fn test_json_single_report_has_expected_keys() {
        let json = JsonReporter::new().report(&make_report("https://example.com"));
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["url"], "https://example.com");
        assert!(parsed["overallScore"].is_u64());
        let seo = &parsed["categories"]["seo"];
        assert_eq!(seo["score"], 42);
        assert!(seo["summary"].is_string());
        assert_eq!(seo["issues"][0]["severity"], "medium");
        assert!(seo["recommendations"].is_array());
        assert_eq!(seo["checklist"].as_array().unwrap().len(), 6);
    }

    #[test]
    fn test_json_pretty_output() {
        let json = JsonReporter::new().pretty().report(&make_report("u"));
        assert!(json.contains('\n'), "pretty JSON should have newlines");
        assert!(json.contains("  "), "pretty JSON should have indentation");
    }

    #[test]
    fn test_json_report_with_summary() {
        let reports = vec![make_report("a.html"), make_report("b.html")];
        let stats = AuditEngine::aggregate_stats(&reports);

        let json = JsonReporter::new().report_with_summary(&reports, &stats);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["results"].as_array().unwrap().len(), 2);
        let summary = &parsed["summary"];
        assert_eq!(summary["pagesAudited"], 2);
        assert_eq!(summary["averageScore"], reports[0].overall_score);
        assert_eq!(summary["averageGrade"], reports[0].grade().to_string());
        assert_eq!(summary["totalIssues"], reports[0].issue_count() * 2);
        assert_eq!(summary["weakestCategory"], "seo");
    }

    #[test]
    fn test_json_summary_omits_missing_weakest_category() {
        let json = JsonReporter::new().report_with_summary(&[], &AggregateStats::default());
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["summary"]["pagesAudited"], 0);
        assert!(parsed["summary"].get("weakestCategory").is_none());
    }
}
