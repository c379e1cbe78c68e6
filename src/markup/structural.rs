//! Document-tree scanner backed by `scraper` (html5ever).
//!
//! Answers the same queries as the pattern scanner, but only real elements
//! and attributes count: text inside comments, scripts and attribute values
//! never matches.

use super::{FormFields, ImageTag, MarkupScan};
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("invalid built-in selector - this is a bug")
}

static BUTTON: LazyLock<Selector> = LazyLock::new(|| selector("button"));
static ANCHOR: LazyLock<Selector> = LazyLock::new(|| selector("a"));
static HEADINGS: LazyLock<Vec<Selector>> =
    LazyLock::new(|| (1..=6).map(|level| selector(&format!("h{}", level))).collect());
static NAV: LazyLock<Selector> = LazyLock::new(|| selector("nav"));
static ROLE: LazyLock<Selector> = LazyLock::new(|| selector("[role]"));
static FORM: LazyLock<Selector> = LazyLock::new(|| selector("form"));
static INPUT: LazyLock<Selector> = LazyLock::new(|| selector("input"));
static LABEL: LazyLock<Selector> = LazyLock::new(|| selector("label"));
static IMG: LazyLock<Selector> = LazyLock::new(|| selector("img"));
static ARIA_LABEL: LazyLock<Selector> = LazyLock::new(|| selector("[aria-label]"));
static STYLED: LazyLock<Selector> = LazyLock::new(|| selector("[style]"));
static SCRIPT_SRC: LazyLock<Selector> = LazyLock::new(|| selector("script[src]"));
static SCRIPT_TYPED: LazyLock<Selector> = LazyLock::new(|| selector("script[type]"));
static LINK_REL: LazyLock<Selector> = LazyLock::new(|| selector("link[rel]"));
static TITLE: LazyLock<Selector> = LazyLock::new(|| selector("title"));
static META_NAMED: LazyLock<Selector> = LazyLock::new(|| selector("meta[name]"));
static ITEMTYPE: LazyLock<Selector> = LazyLock::new(|| selector("[itemtype]"));

/// Scanner over a parsed HTML5 document
pub struct StructuralScanner {
    document: Html,
    byte_len: usize,
}

impl StructuralScanner {
    pub fn parse(html: &str) -> Self {
        let document = Html::parse_document(html);
        log::debug!(
            "Parsed document for structural scan ({} parse errors)",
            document.errors.len()
        );
        Self {
            document,
            byte_len: html.len(),
        }
    }

    fn count(&self, selector: &Selector) -> usize {
        self.document.select(selector).count()
    }

    /// `link` elements whose space-separated `rel` contains `token`
    fn link_rel_count(&self, token: &str) -> usize {
        self.document
            .select(&LINK_REL)
            .filter(|link| {
                link.value()
                    .attr("rel")
                    .map(|rel| {
                        rel.split_ascii_whitespace()
                            .any(|t| t.eq_ignore_ascii_case(token))
                    })
                    .unwrap_or(false)
            })
            .count()
    }
}

fn is_visible_input(input: &ElementRef<'_>) -> bool {
    input
        .value()
        .attr("type")
        .map(|t| !t.trim().eq_ignore_ascii_case("hidden"))
        .unwrap_or(true)
}

fn visible_inputs_in<'a>(inputs: impl Iterator<Item = ElementRef<'a>>) -> usize {
    inputs.filter(is_visible_input).count()
}

impl MarkupScan for StructuralScanner {
    fn byte_len(&self) -> usize {
        self.byte_len
    }

    fn button_count(&self) -> usize {
        self.count(&BUTTON)
    }

    fn button_link_count(&self) -> usize {
        self.document
            .select(&ANCHOR)
            .filter(|a| {
                a.value()
                    .attr("class")
                    .map(|class| class.to_ascii_lowercase().contains("btn"))
                    .unwrap_or(false)
            })
            .count()
    }

    fn interactive_count(&self) -> usize {
        self.count(&BUTTON) + self.count(&ANCHOR)
    }

    fn heading_count(&self, level: u8) -> usize {
        match level {
            1..=6 => self.count(&HEADINGS[level as usize - 1]),
            _ => 0,
        }
    }

    fn has_navigation(&self) -> bool {
        self.count(&NAV) > 0
            || self.document.select(&ROLE).any(|el| {
                el.value()
                    .attr("role")
                    .map(|role| role.trim().eq_ignore_ascii_case("navigation"))
                    .unwrap_or(false)
            })
    }

    fn forms(&self) -> Vec<FormFields> {
        self.document
            .select(&FORM)
            .map(|form| FormFields {
                visible_inputs: visible_inputs_in(form.select(&INPUT)),
                labels: form.select(&LABEL).count(),
            })
            .collect()
    }

    fn visible_input_count(&self) -> usize {
        visible_inputs_in(self.document.select(&INPUT))
    }

    fn label_count(&self) -> usize {
        self.count(&LABEL)
    }

    fn images(&self) -> Vec<ImageTag> {
        self.document
            .select(&IMG)
            .map(|img| ImageTag {
                src: img
                    .value()
                    .attr("src")
                    .filter(|src| !src.is_empty())
                    .map(str::to_string),
                has_alt: img.value().attr("alt").is_some(),
            })
            .collect()
    }

    fn aria_label_count(&self) -> usize {
        self.count(&ARIA_LABEL)
    }

    fn inline_style_count(&self) -> usize {
        self.count(&STYLED)
    }

    fn external_script_count(&self) -> usize {
        self.count(&SCRIPT_SRC)
    }

    fn stylesheet_count(&self) -> usize {
        self.link_rel_count("stylesheet")
    }

    fn blocking_script_count(&self) -> usize {
        self.document
            .select(&SCRIPT_SRC)
            .filter(|script| {
                let attrs = script.value();
                attrs.attr("async").is_none() && attrs.attr("defer").is_none()
            })
            .count()
    }

    fn title(&self) -> Option<String> {
        self.document
            .select(&TITLE)
            .next()
            .map(|title| title.text().collect::<String>().trim().to_string())
            .filter(|title| !title.is_empty())
    }

    fn meta_description(&self) -> Option<String> {
        self.document
            .select(&META_NAMED)
            .find(|meta| {
                meta.value()
                    .attr("name")
                    .map(|name| name.trim().eq_ignore_ascii_case("description"))
                    .unwrap_or(false)
            })
            .and_then(|meta| meta.value().attr("content"))
            .filter(|content| !content.is_empty())
            .map(str::to_string)
    }

    fn has_structured_data(&self) -> bool {
        let json_ld = self.document.select(&SCRIPT_TYPED).any(|script| {
            script
                .value()
                .attr("type")
                .map(|t| t.trim().eq_ignore_ascii_case("application/ld+json"))
                .unwrap_or(false)
        });
        json_ld
            || self.document.select(&ITEMTYPE).any(|el| {
                el.value()
                    .attr("itemtype")
                    .map(|t| t.to_ascii_lowercase().contains("schema.org"))
                    .unwrap_or(false)
            })
    }

    fn has_canonical(&self) -> bool {
        self.link_rel_count("canonical") > 0
    }
}
