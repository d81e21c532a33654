//! Layer 5: Format — placeholder images, empty inline elements, blank-line runs.

use crate::rule::{apply_all, Rule};
use regex::Regex;
use std::sync::LazyLock;

static PLACEHOLDER_IMAGES: LazyLock<Vec<Rule>> = LazyLock::new(|| vec![
    Rule::strip(r#"<section><img alt=""[^>]*></section>"#),
    Rule::strip(r#"<section><img alt=""[^>]*/></section>"#),
    Rule::strip(r#"<img alt="" src="[^"]*">"#),
    Rule::strip(r#"<img alt="" src="[^"]*"/>"#),
]);

static EMPTY_INLINE: LazyLock<Vec<Rule>> = LazyLock::new(|| vec![
    Rule::strip(r#"<span class="[^"]*"></span>"#),
    Rule::strip(r"<span></span>"),
    Rule::strip(r"<button[^>]*></button>"),
]);

static RE_BLANK_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n\s*\n").unwrap());

/// Remove empty-`alt` images, alone or wrapped in a bare `<section>`.
pub fn strip_placeholder_images(text: &str) -> String {
    apply_all(text, &PLACEHOLDER_IMAGES)
}

/// Remove childless spans and buttons.
pub fn strip_empty_inline(text: &str) -> String {
    apply_all(text, &EMPTY_INLINE)
}

/// Collapse runs of three or more line breaks (with any whitespace between) to one blank line.
pub fn collapse_blank_lines(text: &str) -> String {
    RE_BLANK_RUN.replace_all(text, "\n\n").into_owned()
}
