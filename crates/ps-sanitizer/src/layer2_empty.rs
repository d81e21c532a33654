//! Layer 2: Empty — drop containers that hold nothing but whitespace or a `<br>`.

use crate::rule::{apply_all, Rule};
use std::sync::LazyLock;

static EMPTY_WRAPPERS: LazyLock<Vec<Rule>> = LazyLock::new(|| vec![
    Rule::strip(r"<footer><div></div></footer>"),
    Rule::strip(r"<footer><div><div></div></div></footer>"),
    Rule::strip(r"<div[^>]*>\s*</div>"),
]);

static EMPTY_PARAGRAPHS: LazyLock<Vec<Rule>> = LazyLock::new(|| vec![
    Rule::strip(r"<p[^>]*>\s*</p>"),
    Rule::strip(r"<p[^>]*>\s*<br\s*/?>\s*</p>"),
]);

static BREAK_SPANS: LazyLock<Vec<Rule>> = LazyLock::new(|| vec![
    Rule::strip(r"<span[^>]*>\s*<br\s*/?>\s*</span>"),
]);

// Outer nesting level first, so the inner rule cannot leave an empty shell.
static BREAK_BLOCKS: LazyLock<Vec<Rule>> = LazyLock::new(|| vec![
    Rule::strip(r"<div[^>]*><div[^>]*>\s*<span[^>]*>\s*<br\s*/?>\s*</span>\s*</div></div>"),
    Rule::strip(r"<div[^>]*>\s*<span[^>]*>\s*<br\s*/?>\s*</span>\s*</div>"),
]);

static SWEEP: LazyLock<Vec<Rule>> = LazyLock::new(|| vec![
    Rule::strip(r"<p[^>]*>\s*</p>"),
    Rule::strip(r"<div[^>]*>\s*</div>"),
    Rule::strip(r"<span[^>]*>\s*</span>"),
]);

/// Remove `<div>`s with no content and the empty footer shells.
pub fn strip_empty_wrappers(text: &str) -> String {
    apply_all(text, &EMPTY_WRAPPERS)
}

/// Remove paragraphs holding only whitespace or a single line break.
pub fn strip_empty_paragraphs(text: &str) -> String {
    apply_all(text, &EMPTY_PARAGRAPHS)
}

/// Remove spans holding only a line break.
pub fn strip_break_spans(text: &str) -> String {
    apply_all(text, &BREAK_SPANS)
}

/// Remove one or two levels of `<div>` around a line-break-only span.
pub fn strip_break_blocks(text: &str) -> String {
    apply_all(text, &BREAK_BLOCKS)
}

/// Catch paragraphs, divs and spans emptied by unwrapping.
pub fn sweep_empty_blocks(text: &str) -> String {
    apply_all(text, &SWEEP)
}
