//! Markup scanning: the counting and detection queries the category
//! analyzers are built from.
//!
//! Two scanners answer the same questions:
//! - [`PatternScanner`] matches textual patterns over the raw markup
//!   (case-insensitive). This is the default and the scoring reference.
//! - [`StructuralScanner`] parses an HTML5 tree and answers from elements and
//!   attributes, so comments and script bodies no longer produce matches.
//!
//! Zero matches is always a valid answer; no query can fail.

pub mod pattern;
pub mod structural;

pub use pattern::PatternScanner;
pub use structural::StructuralScanner;

use serde::{Deserialize, Serialize};

/// Which scanner backs the analyzers
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ScanMode {
    /// Text pattern matching over the raw markup
    #[default]
    Pattern,
    /// Element/attribute queries over a parsed document tree
    Structural,
}

impl std::fmt::Display for ScanMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanMode::Pattern => write!(f, "pattern"),
            ScanMode::Structural => write!(f, "structural"),
        }
    }
}

/// Visible inputs and labels found inside one form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormFields {
    pub visible_inputs: usize,
    pub labels: usize,
}

impl FormFields {
    /// Visible inputs not matched by a label (0 when labels suffice)
    pub fn unlabeled(&self) -> usize {
        self.visible_inputs.saturating_sub(self.labels)
    }
}

/// An image tag and the attributes the analyzers care about
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageTag {
    pub src: Option<String>,
    pub has_alt: bool,
}

impl ImageTag {
    /// Last path segment of `src` with the query string stripped, or `image`
    pub fn display_name(&self) -> String {
        self.src
            .as_deref()
            .and_then(|src| src.rsplit('/').next())
            .and_then(|last| last.split('?').next())
            .filter(|name| !name.is_empty())
            .unwrap_or("image")
            .to_string()
    }
}

/// Queries answered over one document
pub trait MarkupScan {
    /// UTF-8 encoded length of the full markup
    fn byte_len(&self) -> usize;

    /// `<button>` elements
    fn button_count(&self) -> usize;

    /// Anchors styled as buttons (class containing `btn`)
    fn button_link_count(&self) -> usize;

    /// Every button and anchor
    fn interactive_count(&self) -> usize;

    /// Headings of the given level (1-6)
    fn heading_count(&self, level: u8) -> usize;

    fn has_navigation(&self) -> bool;

    /// Per-form input/label counts, in document order
    fn forms(&self) -> Vec<FormFields>;

    /// Non-hidden inputs anywhere in the document
    fn visible_input_count(&self) -> usize;

    fn label_count(&self) -> usize;

    /// Image tags in document order
    fn images(&self) -> Vec<ImageTag>;

    fn aria_label_count(&self) -> usize;

    /// Inline `style` attributes
    fn inline_style_count(&self) -> usize;

    /// Scripts loaded from a `src`
    fn external_script_count(&self) -> usize;

    fn stylesheet_count(&self) -> usize;

    /// External scripts without `async` or `defer`
    fn blocking_script_count(&self) -> usize;

    /// Trimmed page title, if a title tag with text exists
    fn title(&self) -> Option<String>;

    /// Content of the description meta tag, if present and non-empty
    fn meta_description(&self) -> Option<String>;

    /// JSON-LD block or schema.org vocabulary reference
    fn has_structured_data(&self) -> bool;

    fn has_canonical(&self) -> bool;
}

/// Build the scanner for `mode` over `html`
pub fn scanner(html: &str, mode: ScanMode) -> Box<dyn MarkupScan + '_> {
    match mode {
        ScanMode::Pattern => Box::new(PatternScanner::new(html)),
        ScanMode::Structural => Box::new(StructuralScanner::parse(html)),
    }
}
