//! Edge case tests: degenerate inputs must not panic.

use siteaudit::analyzer::AuditEngine;
use siteaudit::{audit_html, InputError, ScanMode, Severity};

fn both_modes() -> [AuditEngine; 2] {
    [
        AuditEngine::new(),
        AuditEngine::new().with_mode(ScanMode::Structural),
    ]
}

#[test]
fn empty_markup_is_rejected() {
    for engine in both_modes() {
        assert_eq!(engine.analyze("", "u").unwrap_err(), InputError::Empty);
        assert_eq!(engine.analyze_bytes(b"", "u").unwrap_err(), InputError::Empty);
    }
}

#[test]
fn non_utf8_bytes_are_rejected() {
    let err = AuditEngine::new()
        .analyze_bytes(b"<html>\xff\xfe</html>", "u")
        .unwrap_err();
    assert_eq!(err, InputError::NotUtf8 { valid_up_to: 6 });
    assert!(err.to_string().contains("6"));
}

#[test]
fn whitespace_only_is_still_audited() {
    let report = audit_html("   \n\t", "u").unwrap();
    // no h1 -15, no nav -10
    assert_eq!(report.categories.uiux.score, 75);
    assert_eq!(report.categories.wcag.score, 100);
}

#[test]
fn plain_text_no_panic() {
    for engine in both_modes() {
        let report = engine.analyze("hello world", "u").unwrap();
        assert!(report.overall_score <= 100);
        assert_eq!(report.categories.performance.score, 100);
    }
}

#[test]
fn unclosed_tags_no_panic() {
    let html = "<html><body><h1>Broken<form><input type=\"text\"><img src=\"x.png\"<a href=";
    for engine in both_modes() {
        let report = engine.analyze(html, "u").unwrap();
        assert!(!report.categories.wcag.issues.is_empty());
    }
}

#[test]
fn deduction_floor_is_zero() {
    // 20 forms with unlabeled inputs cost 160 points of UI/UX on their own
    let html = r#"<form><input type="text"></form>"#.repeat(20);
    let report = audit_html(&html, "u").unwrap();
    assert_eq!(report.categories.uiux.score, 0);
    assert_eq!(report.categories.uiux.issues.len(), 22);
}

#[test]
fn hidden_inputs_are_not_counted() {
    let html = r#"<h1>x</h1><nav></nav><form><input type="hidden" name="csrf"></form>"#;
    for engine in both_modes() {
        let report = engine.analyze(html, "u").unwrap();
        assert_eq!(report.categories.uiux.score, 100);
        assert_eq!(report.categories.wcag.score, 100);
    }
}

#[test]
fn commented_out_markup_differs_between_modes() {
    let html = "<!-- <nav></nav> --><h1>Title</h1>";
    let pattern = AuditEngine::new().analyze(html, "u").unwrap();
    let structural = AuditEngine::new()
        .with_mode(ScanMode::Structural)
        .analyze(html, "u")
        .unwrap();
    assert_eq!(pattern.categories.uiux.score, 100);
    assert_eq!(structural.categories.uiux.score, 90);
}

#[test]
fn uppercase_markup_matches() {
    let html = r#"<HTML><HEAD><TITLE>Hi</TITLE></HEAD><BODY><H1>A</H1><NAV></NAV><IMG SRC="A.JPG"></BODY></HTML>"#;
    let report = audit_html(html, "u").unwrap();
    assert_eq!(report.categories.uiux.score, 100);
    assert_eq!(report.categories.wcag.score, 95);
    assert_eq!(report.categories.wcag.issues[0].severity, Severity::High);
}

#[test]
fn multibyte_content_no_panic() {
    let html = "<title>日本語のタイトル</title><h1>見出し</h1><img src=\"/画像/写真.jpg?v=1\">";
    for engine in both_modes() {
        let report = engine.analyze(html, "u").unwrap();
        assert_eq!(
            report.categories.wcag.issues[0].text,
            "1 image(s) missing alt text. Examples: 写真.jpg"
        );
    }
}

#[test]
fn url_is_copied_verbatim() {
    let report = audit_html("<p>x</p>", "not a url at all").unwrap();
    assert_eq!(report.url, "not a url at all");
}
