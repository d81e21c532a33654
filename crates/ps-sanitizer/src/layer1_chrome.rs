//! Layer 1: Chrome — remove builder-generated page furniture around the post body.

use crate::rule::{apply_all, Rule};
use regex::Regex;
use std::sync::LazyLock;

static NESTED_HEADER: LazyLock<Vec<Rule>> = LazyLock::new(|| vec![
    Rule::strip(r"(?s)<div><header><div><div><div><ul><li>.*?</header>"),
]);

static SHARE_BAR: LazyLock<Vec<Rule>> = LazyLock::new(|| vec![
    Rule::strip(r#"(?s)<section><div><div><div><button aria-label="Share via.*?</section>"#),
]);

static POST_FOOTER: LazyLock<Vec<Rule>> = LazyLock::new(|| vec![
    Rule::strip(r"(?s)<footer><div><div><section>.*?</section></div></div></footer>"),
]);

/// Known expand-image buttons first, then the generic svg-button fallback.
static EXPAND_BUTTONS: LazyLock<Vec<Rule>> = LazyLock::new(|| vec![
    Rule::strip(r#"(?s)<button class="Uz933" type="button" aria-label="Expand image"><svg.*?</button>"#),
    Rule::strip(r#"(?s)<button class="wwXRO"[^>]*>.*?</button>"#),
    Rule::strip(r#"(?s)<button[^>]*class="[^"]*[XxRrOo][^"]*"[^>]*><svg.*?</button>"#),
]);

static RE_FIGURE: LazyLock<Regex> = LazyLock::new(|| Regex::new(
    r"(?s)<figure><div><div[^>]*>.*?</div></div></figure>"
).unwrap());
static RE_BUTTON: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<button.*?</button>").unwrap());
static RE_HOLLOW_FIGURE: LazyLock<Regex> = LazyLock::new(|| Regex::new(
    r"^<figure>(?:\s|<div[^>]*>|</div>)*</figure>$"
).unwrap());

/// Remove the author block the builder duplicates inside the post body.
pub fn strip_nested_header(text: &str) -> String {
    apply_all(text, &NESTED_HEADER)
}

/// Remove the "share this post" controls near the top of the content.
pub fn strip_share_bar(text: &str) -> String {
    apply_all(text, &SHARE_BAR)
}

/// Remove the footer holding share buttons, view/comment counts and likes.
pub fn strip_post_footer(text: &str) -> String {
    apply_all(text, &POST_FOOTER)
}

/// Remove expand-image overlay buttons.
pub fn strip_expand_buttons(text: &str) -> String {
    apply_all(text, &EXPAND_BUTTONS)
}

/// Strip buttons left inside image figures; drop figures with nothing else left.
pub fn strip_figure_buttons(text: &str) -> String {
    if !text.contains("<figure>") {
        return text.to_string();
    }
    RE_FIGURE
        .replace_all(text, |caps: &regex::Captures| {
            let figure = &caps[0];
            if !figure.contains("<button") {
                return figure.to_string();
            }
            let stripped = RE_BUTTON.replace_all(figure, "");
            if RE_HOLLOW_FIGURE.is_match(&stripped) {
                String::new()
            } else {
                stripped.into_owned()
            }
        })
        .into_owned()
}
