//! Layer 4: Attrs — strip builder-specific attributes, class fingerprints and ids.

use crate::rule::{apply_all, Rule};
use std::sync::LazyLock;

/// Data attributes removed regardless of value.
pub const DATA_ATTRIBUTES: &[&str] = &[
    "data-ssr-src-done", "data-load-done", "data-pin-url", "data-pin-media",
    "data-rce-version", "data-content-hook", "data-hook",
];

/// Generated style-class fingerprints. A `class` attribute containing any of
/// these as a substring is removed whole.
pub const PLATFORM_CLASSES: &[&str] = &[
    "Uz933", "cZKur", "_3mPCj", "uUNDj", "hV4Sgn", "swgwDTg", "laz8E8", "h7K_lu",
    "G5Aa3J", "YfFkQX", "zkv91u", "y5oGWU", "Eu1LNI", "PxeFnW", "X22cAo",
];

/// `aria-label` values (substring match) that only describe builder widgets.
pub const WIDGET_LABELS: &[&str] = &[
    "Share via", "Expand image", "Print Post", "Like post", "views", "comments",
];

static DATA_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    DATA_ATTRIBUTES
        .iter()
        .map(|name| Rule::strip(&format!(r#"\s+{}="[^"]*""#, regex::escape(name))))
        .collect()
});

static CLASS_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    PLATFORM_CLASSES
        .iter()
        .map(|token| Rule::strip(&format!(r#"\s+class="[^"]*{}[^"]*""#, regex::escape(token))))
        .collect()
});

static A11Y_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    let mut rules = vec![Rule::strip(r#"\s+role="img""#)];
    rules.extend(WIDGET_LABELS.iter().map(|label| {
        Rule::strip(&format!(r#"\s+aria-label="[^"]*{}[^"]*""#, regex::escape(label)))
    }));
    rules.extend([
        Rule::strip(r#"\s+aria-describedby="[^"]*""#),
        Rule::strip(r#"\s+aria-live="[^"]*""#),
        Rule::strip(r#"\s+aria-pressed="[^"]*""#),
        Rule::strip(r#"\s+aria-hidden="true""#),
        Rule::strip(r#"\s+role="status""#),
        Rule::strip(r#"\s+title="""#),
        Rule::strip(r#"\s+draggable="false""#),
        Rule::strip(r#"\s+fetchpriority="[^"]*""#),
    ]);
    rules
});

static ID_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| vec![
    Rule::strip(r#"\s+id="viewer-[^"]*""#),
    Rule::strip(r#"\s+id="more-button-[^"]*""#),
    Rule::strip(r#"\s+id="[^"]*-button-[^"]*""#),
]);

pub fn strip_data_attributes(text: &str) -> String {
    apply_all(text, &DATA_RULES)
}

pub fn strip_platform_classes(text: &str) -> String {
    apply_all(text, &CLASS_RULES)
}

/// Strip `role`, widget `aria-*`, empty `title`, `draggable` and `fetchpriority`.
pub fn strip_a11y_attributes(text: &str) -> String {
    apply_all(text, &A11Y_RULES)
}

/// Strip auto-generated `viewer-…` and `…-button-…` ids.
pub fn strip_generated_ids(text: &str) -> String {
    apply_all(text, &ID_RULES)
}
