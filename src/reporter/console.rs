//! Console reporter with colored output

use crate::analyzer::scoring::grade_description;
use crate::analyzer::AggregateStats;
use crate::{AnalyzerReport, AuditReport, Category, Grade, Issue, Severity};
use colored::Colorize;

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to use colors
    use_colors: bool,
    /// Whether to show verbose output
    verbose: bool,
}

impl ConsoleReporter {
    /// Create a new console reporter
    pub fn new() -> Self {
        Self {
            use_colors: true,
            verbose: false,
        }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Enable verbose output
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Report a single page audit
    pub fn report(&self, report: &AuditReport) {
        self.print_header(report);
        self.print_score(report);
        self.print_breakdown(report);

        for (category, category_report) in report.categories.iter() {
            self.print_category(category, category_report);
        }
        println!();
    }

    /// Report multiple page audits with summary
    pub fn report_many(&self, reports: &[AuditReport], stats: &AggregateStats) {
        for report in reports {
            self.report(report);
            println!("{}", "─".repeat(60));
        }

        self.print_summary(stats);
    }

    /// Report in quiet mode (just score)
    pub fn report_quiet(&self, report: &AuditReport) {
        let grade_colored = self.colorize_grade(&report.grade());
        println!(
            "{}: {} ({})",
            report.url, report.overall_score, grade_colored
        );
    }

    fn print_header(&self, report: &AuditReport) {
        println!();
        println!("{}", format!("Site Audit: {}", report.url).bold());
        println!("   Issues: {}", report.issue_count());
        println!();
    }

    fn print_score(&self, report: &AuditReport) {
        let grade = report.grade();
        let score_bar = self.create_score_bar(report.overall_score);

        println!(
            "   Overall: {} {}",
            score_bar,
            self.colorize_grade(&grade).bold()
        );
        println!("   {}", grade_description(grade).dimmed());
        println!();
    }

    fn print_breakdown(&self, report: &AuditReport) {
        println!("   {}", "Category Scores:".bold());
        for (category, category_report) in report.categories.iter() {
            let bar = self.create_mini_bar(category_report.score);
            let score_str = format!("{:>3}/100", category_report.score);
            println!(
                "   {} {} {}",
                bar,
                self.colorize_score(category_report.score, score_str),
                category.title()
            );
        }
        println!();
    }

    fn print_category(&self, category: Category, report: &AnalyzerReport) {
        println!(
            "   {} {}",
            category.title().bold(),
            format!("({})", report.score).dimmed()
        );
        println!("   {}", report.summary.italic());

        // Group by severity
        for severity in [Severity::High, Severity::Medium, Severity::Low] {
            for issue in report.issues.iter().filter(|i| i.severity == severity) {
                self.print_issue(issue);
            }
        }

        if !report.recommendations.is_empty() {
            println!("   {}", "Recommendations:".bold());
            for rec in &report.recommendations {
                println!("   {} {}", "→".cyan(), rec);
            }
        }

        if self.verbose {
            println!("   {}", "Checklist:".bold());
            for item in &report.checklist {
                println!("   {} {}", "☐".dimmed(), item);
            }
        }
        println!();
    }

    fn print_issue(&self, issue: &Issue) {
        let icon = match issue.severity {
            Severity::High => "✗".red(),
            Severity::Medium => "⚠".yellow(),
            Severity::Low => "ℹ".blue(),
        };

        println!(
            "   {} {} {}",
            icon,
            format!("[{}]", issue.severity).dimmed(),
            issue.text
        );
    }

    fn print_summary(&self, stats: &AggregateStats) {
        println!();
        println!("{}", "═".repeat(60));
        println!("{}", "Summary".bold());
        println!("{}", "═".repeat(60));
        println!(
            "   Pages audited:  {}",
            stats.pages_audited.to_string().bold()
        );
        println!(
            "   Average score:  {} ({})",
            stats.average_score.to_string().bold(),
            self.colorize_grade(&stats.average_grade())
        );
        println!("   Total issues:   {}", stats.total_issues);
        if let Some(category) = stats.weakest_category {
            println!("   Weakest area:   {}", category.title());
        }
        println!();
    }

    fn colorize_grade(&self, grade: &Grade) -> colored::ColoredString {
        let s = grade.to_string();
        match grade {
            Grade::A => s.green().bold(),
            Grade::B => s.green(),
            Grade::C => s.yellow(),
            Grade::D => s.red(),
            Grade::F => s.red().bold(),
        }
    }

    fn colorize_score(&self, score: u8, text: String) -> colored::ColoredString {
        if score >= 80 {
            text.green()
        } else if score >= 60 {
            text.yellow()
        } else {
            text.red()
        }
    }

    fn create_score_bar(&self, score: u8) -> String {
        let filled = (score as usize * 20) / 100;
        let empty = 20 - filled;

        let bar = format!("[{}{}] {:>3}%", "█".repeat(filled), "░".repeat(empty), score);

        if self.use_colors {
            self.colorize_score(score, bar).to_string()
        } else {
            bar
        }
    }

    fn create_mini_bar(&self, score: u8) -> String {
        let filled = (score as usize * 10) / 100;
        let empty = 10 - filled;
        format!("[{}{}]", "▓".repeat(filled), "░".repeat(empty))
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_bar_without_colors() {
        let reporter = ConsoleReporter::new().without_colors();
        assert_eq!(
            reporter.create_score_bar(50),
            format!("[{}{}]  50%", "█".repeat(10), "░".repeat(10))
        );
        assert_eq!(
            reporter.create_score_bar(100),
            format!("[{}] 100%", "█".repeat(20))
        );
        assert_eq!(
            reporter.create_score_bar(0),
            format!("[{}]   0%", "░".repeat(20))
        );
    }

    #[test]
    fn test_mini_bar_rounds_down() {
        let reporter = ConsoleReporter::new();
        assert_eq!(
            reporter.create_mini_bar(79),
            format!("[{}{}]", "▓".repeat(7), "░".repeat(3))
        );
    }
}
