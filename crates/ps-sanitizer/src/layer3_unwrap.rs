//! Layer 3: Unwrap — collapse bare wrappers that directly hold exactly one bare `<div>`.
//!
//! Open and close tags of `<div>` and `<section>` are paired with a stack, so
//! only balanced wrappers are touched. `<div><div>x</div></div>` becomes
//! `<div>x</div>`; siblings, attributes, or any byte between the two opening
//! or two closing tags keep the outer wrapper in place. Runs to a fixed point.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

static RE_WRAPPER_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(
    r"<(/?)(div|section)\b([^>]*)>"
).unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TagKind {
    Div,
    Section,
}

#[derive(Debug, Clone)]
struct Tag {
    span: Range<usize>,
    kind: TagKind,
    closing: bool,
    bare: bool,
}

fn scan(html: &str) -> Vec<Tag> {
    RE_WRAPPER_TAG
        .captures_iter(html)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let attrs = caps.get(3).map_or("", |m| m.as_str());
            // `<div/>` opens nothing.
            if attrs.trim_end().ends_with('/') {
                return None;
            }
            let kind = match &caps[2] {
                "div" => TagKind::Div,
                _ => TagKind::Section,
            };
            Some(Tag {
                span: whole.range(),
                kind,
                closing: !caps[1].is_empty(),
                bare: attrs.trim().is_empty(),
            })
        })
        .collect()
}

/// For each opening tag index, the index of its closing tag.
fn pair(tags: &[Tag]) -> Vec<Option<usize>> {
    let mut close_of = vec![None; tags.len()];
    let mut stack: Vec<usize> = Vec::new();
    for (i, tag) in tags.iter().enumerate() {
        if !tag.closing {
            stack.push(i);
            continue;
        }
        // Stray closers are ignored; unclosed openers in between stay unpaired.
        if let Some(pos) = stack.iter().rposition(|&j| tags[j].kind == tag.kind) {
            close_of[stack[pos]] = Some(i);
            stack.truncate(pos);
        }
    }
    close_of
}

/// Byte ranges of outer wrapper tags that can be dropped.
fn collapsible(tags: &[Tag], close_of: &[Option<usize>]) -> Vec<Range<usize>> {
    let mut cuts = Vec::new();
    for (i, outer) in tags.iter().enumerate() {
        if outer.closing || !outer.bare {
            continue;
        }
        let Some(outer_close) = close_of[i] else { continue };
        let Some(inner) = tags.get(i + 1) else { continue };
        if inner.closing || !inner.bare || inner.kind != TagKind::Div || inner.span.start != outer.span.end {
            continue;
        }
        let Some(inner_close) = close_of[i + 1] else { continue };
        if tags[inner_close].span.end != tags[outer_close].span.start {
            continue;
        }
        cuts.push(outer.span.clone());
        cuts.push(tags[outer_close].span.clone());
    }
    cuts.sort_by_key(|r| r.start);
    cuts
}

fn cut(html: &str, cuts: &[Range<usize>]) -> String {
    let mut out = String::with_capacity(html.len());
    let mut pos = 0;
    for range in cuts {
        out.push_str(&html[pos..range.start]);
        pos = range.end;
    }
    out.push_str(&html[pos..]);
    out
}

/// Unwrap one round of collapsible wrappers. Returns `None` when nothing applies.
pub fn unwrap_once(html: &str) -> Option<String> {
    let tags = scan(html);
    if tags.len() < 4 {
        return None;
    }
    let close_of = pair(&tags);
    let cuts = collapsible(&tags, &close_of);
    if cuts.is_empty() {
        return None;
    }
    Some(cut(html, &cuts))
}

/// Unwrap nested single-child wrappers until none are left.
pub fn unwrap_nested(text: &str) -> String {
    let mut result = text.to_string();
    while let Some(next) = unwrap_once(&result) {
        result = next;
    }
    result
}
