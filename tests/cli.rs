//! CLI behavior tests: exit codes, output formats, init.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

const GOOD_PAGE: &str = "test-pages/good.html";
const BAD_PAGE: &str = "test-pages/bad.html";
const SITE_DIR: &str = "test-pages/site";

fn siteaudit_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_siteaudit"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn stdout_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    let s = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(s.trim()).expect("valid JSON")
}

#[test]
fn no_args_returns_error_not_panic() {
    let mut cmd = siteaudit_cmd();
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("PATH").or(predicate::str::contains("path")));
}

#[test]
fn below_threshold_exit_1() {
    let mut cmd = siteaudit_cmd();
    cmd.arg(BAD_PAGE).arg("--threshold").arg("90");
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("below threshold 90"));
}

#[test]
fn above_threshold_exit_0() {
    let mut cmd = siteaudit_cmd();
    cmd.arg(GOOD_PAGE).arg("--threshold").arg("100");
    cmd.assert().success();
}

#[test]
fn json_output_valid() {
    let mut cmd = siteaudit_cmd();
    cmd.arg(BAD_PAGE).arg("--json");
    let parsed = stdout_json(&mut cmd);
    assert_eq!(parsed["url"], BAD_PAGE);
    assert_eq!(parsed["overallScore"], 58);
    assert_eq!(parsed["categories"]["seo"]["score"], 42);
}

#[test]
fn json_url_override() {
    let mut cmd = siteaudit_cmd();
    cmd.arg(GOOD_PAGE)
        .arg("--json")
        .arg("--url")
        .arg("https://ceramics.example.com/");
    let parsed = stdout_json(&mut cmd);
    assert_eq!(parsed["url"], "https://ceramics.example.com/");
    assert_eq!(parsed["overallScore"], 100);
}

#[test]
fn quiet_output_one_line() {
    let mut cmd = siteaudit_cmd();
    cmd.arg(BAD_PAGE).arg("--quiet").arg("--no-color");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("test-pages/bad.html: 58 (F)"));
}

#[test]
fn console_output_lists_categories() {
    let mut cmd = siteaudit_cmd();
    cmd.arg(BAD_PAGE).arg("--no-color");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Site Audit: test-pages/bad.html"))
        .stdout(predicate::str::contains("Accessibility (WCAG)"))
        .stdout(predicate::str::contains("Missing meta description"))
        .stdout(predicate::str::contains("Checklist:").not());
}

#[test]
fn console_output_lists_every_recommendation() {
    // Missing alt text puts a targeted recommendation ahead of the three fixed ones
    let mut cmd = siteaudit_cmd();
    cmd.arg(BAD_PAGE).arg("--no-color");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Add descriptive alt text to all images, especially:",
        ))
        .stdout(predicate::str::contains(
            "Add skip-to-main-content link for keyboard users",
        ));
}

#[test]
fn verbose_output_shows_checklist() {
    let mut cmd = siteaudit_cmd();
    cmd.arg(GOOD_PAGE).arg("--verbose").arg("--no-color");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Checklist:"))
        .stdout(predicate::str::contains("Add Schema.org structured data markup"));
}

#[test]
fn structural_mode_flag() {
    let mut cmd = siteaudit_cmd();
    cmd.arg(BAD_PAGE).arg("--json").arg("--mode").arg("structural");
    let parsed = stdout_json(&mut cmd);
    assert_eq!(parsed["overallScore"], 58);
}

#[test]
fn invalid_mode_rejected() {
    let mut cmd = siteaudit_cmd();
    cmd.arg(GOOD_PAGE).arg("--mode").arg("dom");
    cmd.assert().failure().code(2);
}

#[test]
fn stdin_input() {
    let mut cmd = siteaudit_cmd();
    cmd.arg("-").arg("--json").write_stdin(
        r#"<html><head><title>Hi</title></head><body><img src="a.jpg"></body></html>"#,
    );
    let parsed = stdout_json(&mut cmd);
    assert_eq!(parsed["url"], "stdin");
    assert_eq!(parsed["categories"]["wcag"]["score"], 95);
    assert_eq!(parsed["overallScore"], 78);
}

#[test]
fn empty_stdin_exit_2() {
    let mut cmd = siteaudit_cmd();
    cmd.arg("-").write_stdin("");
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("markup is empty"));
}

#[test]
fn file_not_found_exit_2() {
    let mut cmd = siteaudit_cmd();
    cmd.arg("nonexistent.html");
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("nonexistent"));
}

#[test]
fn directory_json_has_summary() {
    let mut cmd = siteaudit_cmd();
    cmd.arg(SITE_DIR).arg("--json");
    let parsed = stdout_json(&mut cmd);

    let results = parsed["results"].as_array().unwrap();
    assert_eq!(results.len(), 3);
    let urls: Vec<&str> = results.iter().map(|r| r["url"].as_str().unwrap()).collect();
    assert!(urls.iter().any(|u| u.ends_with("about.htm")));
    assert!(urls.iter().any(|u| u.ends_with("wip.html")));
    assert!(!urls.iter().any(|u| u.ends_with("notes.txt")));

    let summary = &parsed["summary"];
    assert_eq!(summary["pagesAudited"], 3);
    // (100 + 84 + 76) / 3 = 86
    assert_eq!(summary["averageScore"], 86);
    assert_eq!(summary["averageGrade"], "B");
}

#[test]
fn cli_flags_win_over_config_overrides() {
    let dir = tempfile::TempDir::new().unwrap();
    let page = dir.path().join("p.html");
    // The commented heading only counts in pattern mode
    fs::write(&page, "<!-- <h1>x</h1> --><nav></nav>").unwrap();
    fs::write(
        dir.path().join(".siteauditrc.json"),
        r#"{ "overrides": [{ "files": ["**/*.html"], "threshold": 99, "mode": "structural" }] }"#,
    )
    .unwrap();

    // Override alone: structural scan, threshold 99
    let mut cmd = siteaudit_cmd();
    cmd.arg(&page).arg("--json");
    let output = cmd.output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let parsed: serde_json::Value =
        serde_json::from_str(String::from_utf8_lossy(&output.stdout).trim()).unwrap();
    assert_eq!(parsed["categories"]["uiux"]["score"], 85);

    // CLI flags replace both override values
    let mut cmd = siteaudit_cmd();
    cmd.arg(&page)
        .arg("--json")
        .arg("--threshold")
        .arg("10")
        .arg("--mode")
        .arg("pattern");
    let output = cmd.output().unwrap();
    assert!(output.status.success());
    let parsed: serde_json::Value =
        serde_json::from_str(String::from_utf8_lossy(&output.stdout).trim()).unwrap();
    assert_eq!(parsed["categories"]["uiux"]["score"], 100);
}

#[test]
fn init_and_stdin_run_without_path_argument_errors() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut cmd = siteaudit_cmd();
    cmd.arg("init").arg("--dir").arg(dir.path());
    cmd.assert().success().stdout(predicate::str::contains("Created"));

    let mut cmd = siteaudit_cmd();
    cmd.arg("-").arg("--json").write_stdin("<h1>x</h1>");
    cmd.assert()
        .code(predicate::in_iter([0, 1]))
        .stdout(predicate::str::contains("\"url\": \"stdin\""));
}

#[test]
fn directory_respects_ignore_config() {
    let dir = tempfile::TempDir::new().unwrap();
    let pages = dir.path().join("pages");
    fs::create_dir_all(pages.join("drafts")).unwrap();
    fs::copy(GOOD_PAGE, pages.join("index.html")).unwrap();
    fs::copy(BAD_PAGE, pages.join("drafts/bad.html")).unwrap();
    fs::write(
        dir.path().join(".siteauditrc.json"),
        r#"{ "threshold": 90, "ignore": ["**/drafts/**"] }"#,
    )
    .unwrap();

    // Only the good page remains, so the threshold passes
    let mut cmd = siteaudit_cmd();
    cmd.arg(&pages).arg("--quiet");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("index.html: 100"))
        .stdout(predicate::str::contains("bad.html").not());
}

#[test]
fn config_threshold_applies() {
    let dir = tempfile::TempDir::new().unwrap();
    let page = dir.path().join("bad.html");
    fs::copy(BAD_PAGE, &page).unwrap();
    fs::write(dir.path().join(".siteauditrc.json"), r#"{ "threshold": 60 }"#).unwrap();

    let mut cmd = siteaudit_cmd();
    cmd.arg(&page).arg("--quiet");
    cmd.assert().failure().code(1);

    // CLI threshold wins over the config file
    let mut cmd = siteaudit_cmd();
    cmd.arg(&page).arg("--quiet").arg("--threshold").arg("50");
    cmd.assert().success();
}

#[test]
fn invalid_config_exit_2() {
    let dir = tempfile::TempDir::new().unwrap();
    let page = dir.path().join("good.html");
    fs::copy(GOOD_PAGE, &page).unwrap();
    fs::write(dir.path().join(".siteauditrc.json"), "{ nope").unwrap();

    let mut cmd = siteaudit_cmd();
    cmd.arg(&page);
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid JSON"));
}

#[test]
fn init_creates_config() {
    let dir = tempfile::TempDir::new().unwrap();
    let config_path = dir.path().join(".siteauditrc.json");
    let mut cmd = siteaudit_cmd();
    cmd.arg("init")
        .arg("--dir")
        .arg(dir.path())
        .arg("--mode")
        .arg("structural");
    cmd.assert().success();
    assert!(config_path.exists(), ".siteauditrc.json should be created");
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("\"threshold\": 70"));
    assert!(content.contains("\"mode\": \"structural\""));
}

#[test]
fn init_does_not_overwrite() {
    let dir = tempfile::TempDir::new().unwrap();
    let config_path = dir.path().join(".siteauditrc.json");
    fs::write(&config_path, r#"{ "threshold": 12 }"#).unwrap();

    let mut cmd = siteaudit_cmd();
    cmd.arg("init").arg("--dir").arg(dir.path());
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("already exists"));
    assert_eq!(
        fs::read_to_string(&config_path).unwrap(),
        r#"{ "threshold": 12 }"#
    );
}
