//! Config schema and deserialization

use crate::markup::ScanMode;
use serde::Deserialize;
use std::path::Path;

/// Page suffixes audited when walking a directory
pub const DEFAULT_PAGE_PATTERNS: [&str; 3] = [".html", ".htm", ".xhtml"];

/// Per-path override configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverride {
    /// Glob patterns this override applies to
    pub files: Vec<String>,

    /// Optional threshold override for matched pages
    #[serde(default)]
    pub threshold: Option<u8>,

    /// Optional scanner override for matched pages
    #[serde(default)]
    pub mode: Option<ScanMode>,
}

/// Root config structure for .siteauditrc.json
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Extend another config file (path relative to this config)
    #[serde(default)]
    pub extends: Option<String>,

    /// Minimum overall score (exit 1 if below)
    #[serde(default)]
    pub threshold: Option<u8>,

    /// Scanner backing the analyzers (default: pattern)
    #[serde(default)]
    pub mode: Option<ScanMode>,

    /// Run the four analyzers concurrently
    #[serde(default)]
    pub parallel: Option<bool>,

    /// Glob patterns for pages/directories to exclude
    #[serde(default)]
    pub ignore: Vec<String>,

    /// File suffixes treated as pages (default: .html, .htm, .xhtml)
    #[serde(default)]
    pub page_patterns: Vec<String>,

    /// Per-path configuration overrides
    #[serde(default)]
    pub overrides: Vec<ConfigOverride>,

    /// Command-line values; applied after per-path overrides
    #[serde(skip)]
    pub cli: CliOverrides,
}

/// Values given on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub threshold: Option<u8>,
    pub mode: Option<ScanMode>,
}

impl Config {
    /// Merge CLI overrides into config. CLI values take precedence.
    pub fn merge_with_cli(
        mut self,
        cli_threshold: Option<u8>,
        cli_mode: Option<ScanMode>,
        cli_parallel: bool,
    ) -> Self {
        if cli_threshold.is_some() {
            self.threshold = cli_threshold;
        }
        if cli_mode.is_some() {
            self.mode = cli_mode;
        }
        self.cli = CliOverrides {
            threshold: cli_threshold,
            mode: cli_mode,
        };
        if cli_parallel {
            self.parallel = Some(true);
        }
        self
    }

    /// Get effective config for a specific page path, applying overrides.
    /// Command-line values win over every override.
    pub fn effective_for_file(&self, file_path: &Path) -> EffectiveConfig {
        let mut effective = EffectiveConfig {
            threshold: self.threshold,
            mode: self.mode.unwrap_or_default(),
            parallel: self.parallel.unwrap_or(false),
        };

        for override_cfg in &self.overrides {
            if Self::matches_override(file_path, &override_cfg.files) {
                if let Some(threshold) = override_cfg.threshold {
                    effective.threshold = Some(threshold);
                }
                if let Some(mode) = override_cfg.mode {
                    effective.mode = mode;
                }
            }
        }

        if let Some(threshold) = self.cli.threshold {
            effective.threshold = Some(threshold);
        }
        if let Some(mode) = self.cli.mode {
            effective.mode = mode;
        }

        effective
    }

    /// Check if a file path matches any of the override patterns
    fn matches_override(file_path: &Path, patterns: &[String]) -> bool {
        patterns.iter().any(|pattern| match globset::Glob::new(pattern) {
            Ok(glob) => glob.compile_matcher().is_match(file_path),
            Err(e) => {
                log::warn!("Ignoring invalid override pattern {}: {}", pattern, e);
                false
            }
        })
    }

    /// Merge another config into this one (for extends)
    pub fn merge_from(&mut self, base: Config) {
        // Base values are overridden by this config's values
        if self.threshold.is_none() {
            self.threshold = base.threshold;
        }
        if self.extends.is_none() {
            self.extends = base.extends;
        }
        if self.mode.is_none() {
            self.mode = base.mode;
        }
        if self.parallel.is_none() {
            self.parallel = base.parallel;
        }

        let mut all_ignores = base.ignore;
        all_ignores.append(&mut self.ignore);
        self.ignore = all_ignores;

        if self.page_patterns.is_empty() {
            self.page_patterns = base.page_patterns;
        }

        // Prepend base overrides
        let mut all_overrides = base.overrides;
        all_overrides.append(&mut self.overrides);
        self.overrides = all_overrides;
    }

    /// Get page file patterns
    pub fn get_page_patterns(&self) -> Vec<&str> {
        if self.page_patterns.is_empty() {
            DEFAULT_PAGE_PATTERNS.to_vec()
        } else {
            self.page_patterns.iter().map(|s| s.as_str()).collect()
        }
    }
}

/// Effective configuration for a specific page (after applying overrides)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveConfig {
    pub threshold: Option<u8>,
    pub mode: ScanMode,
    pub parallel: bool,
}
