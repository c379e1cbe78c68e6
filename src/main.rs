//! Siteaudit: heuristic HTML quality audit CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use siteaudit::analyzer::AuditEngine;
use siteaudit::config::{
    build_ignore_set, is_ignored, load_config, starter_config, Config, CONFIG_FILENAME,
};
use siteaudit::reporter::{ConsoleReporter, JsonReporter};
use siteaudit::{AuditReport, ScanMode};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use walkdir::WalkDir;

/// Path argument that reads the page from stdin
const STDIN_PATH: &str = "-";

/// Siteaudit: UI/UX, accessibility, performance and SEO audit for HTML pages
#[derive(Parser, Debug)]
#[command(name = "siteaudit")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Saved HTML page, directory of pages, or `-` for stdin
    path: Option<PathBuf>,

    /// URL shown in the report (single page only; never fetched)
    #[arg(long)]
    url: Option<String>,

    /// Output format as JSON
    #[arg(long, short)]
    json: bool,

    /// Minimum overall score threshold (exit 1 if below)
    #[arg(long, short)]
    threshold: Option<u8>,

    /// Quiet mode (one line per page)
    #[arg(long, short)]
    quiet: bool,

    /// Verbose output (checklists and debug logging)
    #[arg(long, short)]
    verbose: bool,

    /// Scanner backing the analyzers
    #[arg(long, value_enum)]
    mode: Option<ScanMode>,

    /// Run the four analyzers of each page concurrently
    #[arg(long)]
    parallel: bool,

    /// Number of parallel threads (default: number of CPU cores)
    #[arg(long, value_name = "N")]
    jobs: Option<usize>,

    /// Path to config file (default: search .siteauditrc.json in current dir and parents)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create .siteauditrc.json with sensible defaults
    Init {
        /// Minimum score threshold (e.g. 70)
        #[arg(long)]
        threshold: Option<u8>,

        /// Scanner to configure
        #[arg(long, value_enum)]
        mode: Option<ScanMode>,

        /// Directory in which to create config (default: current)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

/// One page waiting to be audited
struct Page {
    /// Where the markup came from; `None` for stdin
    path: Option<PathBuf>,
    url: String,
    bytes: Vec<u8>,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.no_color {
        colored::control::set_override(false);
    }

    if let Some(cmd) = args.command {
        match cmd {
            Commands::Init {
                threshold,
                mode,
                dir,
            } => {
                return run_init(threshold, mode, dir.as_deref());
            }
        }
    }

    let Some(path) = args.path.clone() else {
        anyhow::bail!("a page PATH is required (use `-` to read from stdin)");
    };
    let from_stdin = path.as_os_str() == STDIN_PATH;

    // Resolve work directory for config search
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let work_dir = if from_stdin {
        cwd.as_path()
    } else if path.is_file() {
        path.parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(cwd.as_path())
    } else {
        path.as_path()
    };

    // Load config (CLI flags override config file)
    let config = load_config(work_dir, args.config.as_deref())?.merge_with_cli(
        args.threshold,
        args.mode,
        args.parallel,
    );

    let ignore_set = if config.ignore.is_empty() {
        None
    } else {
        Some(build_ignore_set(&config.ignore)?)
    };

    let mut pages = if from_stdin {
        vec![read_stdin_page()?]
    } else {
        let page_patterns = config.get_page_patterns();
        let files = collect_page_files(&path, ignore_set.as_ref(), &page_patterns)?;
        read_page_files(&files)?
    };

    if pages.is_empty() {
        eprintln!("{}: No pages found", "Warning".yellow());
        return Ok(ExitCode::from(2));
    }

    if let Some(url) = args.url.as_deref() {
        if pages.len() == 1 {
            pages[0].url = url.to_string();
        } else {
            log::warn!("--url ignored when auditing {} pages", pages.len());
        }
    }

    if let Some(jobs) = args.jobs {
        if let Err(e) = rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global()
        {
            log::warn!("Could not configure thread pool: {}", e);
        }
    }

    let (audited, had_errors) = audit_pages(&pages, &config, args.quiet);

    if audited.is_empty() {
        eprintln!("{}: All pages failed to audit", "Error".red());
        return Ok(ExitCode::from(2));
    }

    let reports: Vec<AuditReport> = audited.iter().map(|(_, r)| r.clone()).collect();
    let stats = AuditEngine::aggregate_stats(&reports);

    if args.json {
        let reporter = JsonReporter::new().pretty();
        if reports.len() == 1 {
            println!("{}", reporter.report(&reports[0]));
        } else {
            println!("{}", reporter.report_with_summary(&reports, &stats));
        }
    } else if args.quiet {
        let reporter = ConsoleReporter::new();
        for report in &reports {
            reporter.report_quiet(report);
        }
    } else {
        let mut reporter = ConsoleReporter::new();
        if args.no_color {
            reporter = reporter.without_colors();
        }
        if args.verbose {
            reporter = reporter.verbose();
        }

        if reports.len() == 1 {
            reporter.report(&reports[0]);
        } else {
            reporter.report_many(&reports, &stats);
        }
    }

    // Check threshold (config, overrides or CLI)
    let failures = threshold_failures(&audited, &config, stats.average_score);
    if !failures.is_empty() {
        if !args.quiet && !args.json {
            for (label, score, threshold) in &failures {
                eprintln!(
                    "\n{}: {} score {} is below threshold {}",
                    "Failed".red().bold(),
                    label,
                    score,
                    threshold
                );
            }
        }
        return Ok(ExitCode::from(1));
    }

    if had_errors {
        Ok(ExitCode::from(2))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Threshold checks that failed, as (label, score, threshold).
///
/// A single page is held to its effective threshold. Several pages hold the
/// average to the configured threshold and each page to an override
/// threshold when one applies.
fn threshold_failures(
    audited: &[(Option<PathBuf>, AuditReport)],
    config: &Config,
    average_score: u8,
) -> Vec<(String, u8, u8)> {
    let mut failures = Vec::new();

    if let [(path, report)] = audited {
        let threshold = match path {
            Some(path) => config.effective_for_file(path).threshold,
            None => config.threshold,
        };
        if let Some(threshold) = threshold {
            if report.overall_score < threshold {
                failures.push(("Overall".to_string(), report.overall_score, threshold));
            }
        }
        return failures;
    }

    if let Some(threshold) = config.threshold {
        if average_score < threshold {
            failures.push(("Average".to_string(), average_score, threshold));
        }
    }

    for (path, report) in audited {
        let Some(path) = path else { continue };
        let page_threshold = config.effective_for_file(path).threshold;
        if let Some(threshold) = page_threshold.filter(|t| Some(*t) != config.threshold) {
            if report.overall_score < threshold {
                failures.push((report.url.clone(), report.overall_score, threshold));
            }
        }
    }

    failures
}

/// Audit every page, in parallel when there is more than one
fn audit_pages(
    pages: &[Page],
    config: &Config,
    quiet: bool,
) -> (Vec<(Option<PathBuf>, AuditReport)>, bool) {
    use rayon::prelude::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    let had_errors = AtomicBool::new(false);

    let audit_one = |page: &Page| {
        let engine = engine_for(page, config);
        match engine.analyze_bytes(&page.bytes, &page.url) {
            Ok(report) => Some((page.path.clone(), report)),
            Err(e) => {
                had_errors.store(true, Ordering::Relaxed);
                if !quiet {
                    eprintln!("{}: Failed to audit {}: {}", "Error".red(), page.url, e);
                }
                None
            }
        }
    };

    let results: Vec<_> = if pages.len() > 1 {
        pages.par_iter().filter_map(audit_one).collect()
    } else {
        pages.iter().filter_map(audit_one).collect()
    };

    (results, had_errors.load(Ordering::Relaxed))
}

/// Engine configured for one page, applying per-path overrides
fn engine_for(page: &Page, config: &Config) -> AuditEngine {
    let (mode, parallel) = match &page.path {
        Some(path) => {
            let effective = config.effective_for_file(path);
            (effective.mode, effective.parallel)
        }
        None => (config.mode.unwrap_or_default(), config.parallel.unwrap_or(false)),
    };

    let engine = AuditEngine::new().with_mode(mode);
    if parallel {
        engine.parallel()
    } else {
        engine
    }
}

fn read_stdin_page() -> Result<Page> {
    let mut bytes = Vec::new();
    std::io::stdin()
        .read_to_end(&mut bytes)
        .context("Failed to read page from stdin")?;
    Ok(Page {
        path: None,
        url: "stdin".to_string(),
        bytes,
    })
}

fn read_page_files(files: &[PathBuf]) -> Result<Vec<Page>> {
    files
        .iter()
        .map(|file| {
            let bytes = std::fs::read(file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            Ok(Page {
                path: Some(file.clone()),
                url: file.display().to_string(),
                bytes,
            })
        })
        .collect()
}

fn run_init(threshold: Option<u8>, mode: Option<ScanMode>, dir: Option<&Path>) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let dir = dir.unwrap_or(&cwd);
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() {
        eprintln!(
            "{}: {} already exists; use --dir to write elsewhere or remove it first",
            "Warning".yellow(),
            config_path.display()
        );
        return Ok(ExitCode::SUCCESS);
    }

    let threshold_value = threshold.unwrap_or(70);
    let mode_value = mode.unwrap_or_default();

    std::fs::write(&config_path, starter_config(threshold_value, mode_value))
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    println!(
        "{}: Created {} with threshold={}, mode={}",
        "Done".green().bold(),
        config_path.display(),
        threshold_value,
        mode_value
    );
    Ok(ExitCode::SUCCESS)
}

fn collect_page_files(
    path: &Path,
    ignore_set: Option<&globset::GlobSet>,
    page_patterns: &[&str],
) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        if let Some(set) = ignore_set {
            if is_ignored(path, set) {
                return Ok(vec![]);
            }
        }
        return Ok(vec![path.to_path_buf()]);
    }

    if !path.is_dir() {
        anyhow::bail!("Path does not exist: {}", path.display());
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(path)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let file_path = entry.path();
        if entry.file_type().is_file() && is_page_file(file_path, page_patterns) {
            if let Some(set) = ignore_set {
                if is_ignored(file_path, set) {
                    log::debug!("Ignoring {}", file_path.display());
                    continue;
                }
            }
            files.push(file_path.to_path_buf());
        }
    }

    // Sort for consistent output
    files.sort();

    Ok(files)
}

fn is_page_file(path: &Path, page_patterns: &[&str]) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };

    if path
        .components()
        .any(|c| c.as_os_str() == "node_modules")
    {
        return false;
    }

    let name = name.to_ascii_lowercase();
    page_patterns
        .iter()
        .any(|p| name.ends_with(&p.to_ascii_lowercase()))
}
