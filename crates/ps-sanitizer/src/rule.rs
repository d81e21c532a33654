//! Ordered pattern → replacement rules.

use regex::{NoExpand, Regex};

/// One pattern → replacement mapping applied globally over a document.
#[derive(Debug, Clone)]
pub struct Rule {
    pub pattern: Regex,
    pub replacement: &'static str,
}

impl Rule {
    pub fn new(pattern: &str, replacement: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).unwrap(),
            replacement,
        }
    }

    /// Rule that deletes every match.
    pub fn strip(pattern: &str) -> Self {
        Self::new(pattern, "")
    }

    pub fn apply(&self, text: &str) -> String {
        self.pattern.replace_all(text, NoExpand(self.replacement)).into_owned()
    }
}

/// Apply rules in declaration order; later rules see earlier rules' output.
pub fn apply_all(text: &str, rules: &[Rule]) -> String {
    if text.is_empty() {
        return String::new();
    }
    let mut result = text.to_string();
    for rule in rules {
        if rule.pattern.is_match(&result) {
            result = rule.apply(&result);
        }
    }
    result
}
