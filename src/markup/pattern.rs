//! Text pattern scanner over raw markup.
//!
//! Every query is a case-insensitive regex count or presence check. Tag
//! patterns stop at the first `>`, so one match corresponds to one opening
//! tag. Conditions the regex engine cannot express directly (negative
//! lookahead on `type="hidden"`, `async`/`defer` exclusion) are applied to the
//! matched tag text.

use super::{FormFields, ImageTag, MarkupScan};
use regex::Regex;
use std::sync::LazyLock;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("invalid built-in markup pattern - this is a bug")
}

static BUTTON_TAG: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)<button[^>]*>"));
static BUTTON_LINK_TAG: LazyLock<Regex> =
    LazyLock::new(|| compile(r#"(?i)<a[^>]*class="[^"]*btn[^"]*"[^>]*>"#));
static INTERACTIVE_TAG: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)<button[^>]*>|<a[^>]*>"));
static HEADING_TAGS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    (1..=6)
        .map(|level| compile(&format!(r"(?i)<h{}[^>]*>", level)))
        .collect()
});
static NAV_MARKER: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)<nav|navigation"));
static FORM_BLOCK: LazyLock<Regex> = LazyLock::new(|| compile(r"(?is)<form[^>]*>.*?</form>"));
static INPUT_TAG: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)<input[^>]*>"));
static LABEL_TAG: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)<label[^>]*>"));
static IMG_TAG: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)<img[^>]*>"));
static ALT_ATTR: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)alt="));
static SRC_ATTR: LazyLock<Regex> = LazyLock::new(|| compile(r#"(?i)src=["']([^"']+)["']"#));
static ARIA_LABEL_ATTR: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)aria-label="));
static STYLE_ATTR: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)style="));
static SCRIPT_OPEN: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)<script([^>]*)"));
static STYLESHEET_LINK: LazyLock<Regex> =
    LazyLock::new(|| compile(r#"(?i)<link[^>]*rel=["']stylesheet["']"#));
static TITLE_TAG: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)<title[^>]*>([^<]+)</title>"));
static META_DESCRIPTION: LazyLock<Regex> = LazyLock::new(|| {
    compile(r#"(?i)<meta[^>]*name=["']description["'][^>]*content=["']([^"']+)["']"#)
});
static STRUCTURED_DATA_MARKER: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)application/ld\+json|schema\.org"));
static CANONICAL_MARKER: LazyLock<Regex> = LazyLock::new(|| compile(r#"(?i)rel="canonical""#));

/// Scanner that counts textual patterns in the raw markup
pub struct PatternScanner<'a> {
    html: &'a str,
}

impl<'a> PatternScanner<'a> {
    pub fn new(html: &'a str) -> Self {
        Self { html }
    }
}

/// True when the input tag carries a double-quoted `type` whose value does
/// not start with `hidden`
fn is_visible_input(tag: &str) -> bool {
    let lowered = tag.to_ascii_lowercase();
    lowered.match_indices("type=\"").any(|(idx, marker)| {
        let value = &lowered[idx + marker.len()..];
        !value.starts_with("hidden") && value.contains('"')
    })
}

fn count_visible_inputs(text: &str) -> usize {
    INPUT_TAG
        .find_iter(text)
        .filter(|m| is_visible_input(m.as_str()))
        .count()
}

/// Attribute text of each `<script` tag (up to the closing `>`) that loads a `src`
fn script_src_attrs(html: &str) -> impl Iterator<Item = String> + '_ {
    SCRIPT_OPEN
        .captures_iter(html)
        .filter_map(|caps| caps.get(1))
        .map(|attrs| attrs.as_str().to_ascii_lowercase())
        .filter(|attrs| attrs.contains("src="))
}

impl MarkupScan for PatternScanner<'_> {
    fn byte_len(&self) -> usize {
        self.html.len()
    }

    fn button_count(&self) -> usize {
        BUTTON_TAG.find_iter(self.html).count()
    }

    fn button_link_count(&self) -> usize {
        BUTTON_LINK_TAG.find_iter(self.html).count()
    }

    fn interactive_count(&self) -> usize {
        INTERACTIVE_TAG.find_iter(self.html).count()
    }

    fn heading_count(&self, level: u8) -> usize {
        match level {
            1..=6 => HEADING_TAGS[level as usize - 1].find_iter(self.html).count(),
            _ => 0,
        }
    }

    fn has_navigation(&self) -> bool {
        NAV_MARKER.is_match(self.html)
    }

    fn forms(&self) -> Vec<FormFields> {
        FORM_BLOCK
            .find_iter(self.html)
            .map(|form| FormFields {
                visible_inputs: count_visible_inputs(form.as_str()),
                labels: LABEL_TAG.find_iter(form.as_str()).count(),
            })
            .collect()
    }

    fn visible_input_count(&self) -> usize {
        count_visible_inputs(self.html)
    }

    fn label_count(&self) -> usize {
        LABEL_TAG.find_iter(self.html).count()
    }

    fn images(&self) -> Vec<ImageTag> {
        IMG_TAG
            .find_iter(self.html)
            .map(|tag| {
                let tag = tag.as_str();
                ImageTag {
                    src: SRC_ATTR
                        .captures(tag)
                        .and_then(|caps| caps.get(1))
                        .map(|m| m.as_str().to_string()),
                    has_alt: ALT_ATTR.is_match(tag),
                }
            })
            .collect()
    }

    fn aria_label_count(&self) -> usize {
        ARIA_LABEL_ATTR.find_iter(self.html).count()
    }

    fn inline_style_count(&self) -> usize {
        STYLE_ATTR.find_iter(self.html).count()
    }

    fn external_script_count(&self) -> usize {
        script_src_attrs(self.html).count()
    }

    fn stylesheet_count(&self) -> usize {
        STYLESHEET_LINK.find_iter(self.html).count()
    }

    fn blocking_script_count(&self) -> usize {
        script_src_attrs(self.html)
            .filter(|attrs| !attrs.contains("async") && !attrs.contains("defer"))
            .count()
    }

    fn title(&self) -> Option<String> {
        TITLE_TAG
            .captures(self.html)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
    }

    fn meta_description(&self) -> Option<String> {
        META_DESCRIPTION
            .captures(self.html)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    fn has_structured_data(&self) -> bool {
        STRUCTURED_DATA_MARKER.is_match(self.html)
    }

    fn has_canonical(&self) -> bool {
        CANONICAL_MARKER.is_match(self.html)
    }
}
