//! Sanitizer pipeline — runs every pass in order until the document settles.

use crate::{layer1_chrome, layer2_empty, layer3_unwrap, layer4_attrs, layer5_format};
use tracing::{debug, warn};

/// One named step of the pipeline.
#[derive(Clone, Copy)]
pub struct Pass {
    pub name: &'static str,
    pub apply: fn(&str) -> String,
}

impl std::fmt::Debug for Pass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pass").field("name", &self.name).finish()
    }
}

/// Pass order. Later passes rely on structure removed by earlier ones.
pub const PASSES: &[Pass] = &[
    Pass { name: "nested_header", apply: layer1_chrome::strip_nested_header },
    Pass { name: "share_bar", apply: layer1_chrome::strip_share_bar },
    Pass { name: "post_footer", apply: layer1_chrome::strip_post_footer },
    Pass { name: "expand_buttons", apply: layer1_chrome::strip_expand_buttons },
    Pass { name: "figure_buttons", apply: layer1_chrome::strip_figure_buttons },
    Pass { name: "empty_wrappers", apply: layer2_empty::strip_empty_wrappers },
    Pass { name: "empty_paragraphs", apply: layer2_empty::strip_empty_paragraphs },
    Pass { name: "break_spans", apply: layer2_empty::strip_break_spans },
    Pass { name: "break_blocks", apply: layer2_empty::strip_break_blocks },
    Pass { name: "unwrap_wrappers", apply: layer3_unwrap::unwrap_nested },
    Pass { name: "sweep_empty", apply: layer2_empty::sweep_empty_blocks },
    Pass { name: "data_attributes", apply: layer4_attrs::strip_data_attributes },
    Pass { name: "platform_classes", apply: layer4_attrs::strip_platform_classes },
    Pass { name: "a11y_attributes", apply: layer4_attrs::strip_a11y_attributes },
    Pass { name: "placeholder_images", apply: layer5_format::strip_placeholder_images },
    Pass { name: "empty_inline", apply: layer5_format::strip_empty_inline },
    Pass { name: "generated_ids", apply: layer4_attrs::strip_generated_ids },
    Pass { name: "blank_lines", apply: layer5_format::collapse_blank_lines },
];

/// Sanitize result with statistics.
#[derive(Debug, Clone)]
pub struct SanitizeResult {
    pub output: String,
    pub original_len: usize,
    pub cleaned_len: usize,
    pub reduction_pct: f64,
    /// Rounds executed, including the final round that changed nothing.
    pub rounds: usize,
    /// Whether the last round left the document untouched.
    pub settled: bool,
    /// Names of passes that changed the document, in first-change order.
    pub passes_applied: Vec<String>,
}

impl SanitizeResult {
    pub fn changed(&self) -> bool {
        !self.passes_applied.is_empty()
    }

    pub fn ratio(&self) -> f64 {
        if self.original_len == 0 { return 1.0; }
        self.cleaned_len as f64 / self.original_len as f64
    }
}

/// The sanitizer pipeline.
///
/// Rounds repeat until the document stops changing. Every pass only deletes
/// bytes, so this always terminates; `max_rounds` is an optional hard cap.
#[derive(Debug, Clone, Default)]
pub struct SanitizerPipeline {
    pub max_rounds: Option<usize>,
}

impl SanitizerPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop after `max_rounds` rounds even if the document is still changing.
    pub fn with_max_rounds(max_rounds: usize) -> Self {
        Self { max_rounds: Some(max_rounds.max(1)) }
    }

    /// Run one round of every pass, recording which ones changed the text.
    fn round(&self, text: &str, round: usize, applied: &mut Vec<String>) -> String {
        let mut result = text.to_string();
        for pass in PASSES {
            let next = (pass.apply)(&result);
            if next != result {
                debug!(
                    pass = pass.name,
                    round,
                    removed = result.len().saturating_sub(next.len()),
                    "pass changed document"
                );
                if !applied.iter().any(|n| n == pass.name) {
                    applied.push(pass.name.to_string());
                }
                result = next;
            }
        }
        result
    }

    /// Sanitize a document.
    pub fn run(&self, html: &str) -> SanitizeResult {
        let original_len = html.len();
        let mut result = html.to_string();
        let mut applied = Vec::new();
        let mut rounds = 0;
        let mut settled = html.is_empty();

        while !settled && self.max_rounds.map_or(true, |cap| rounds < cap) {
            rounds += 1;
            let next = self.round(&result, rounds, &mut applied);
            settled = next == result;
            result = next;
        }
        if !settled {
            warn!(rounds, "document still changing at round cap");
        }

        let cleaned_len = result.len();
        let reduction = if original_len > 0 {
            (original_len.saturating_sub(cleaned_len) as f64 / original_len as f64) * 100.0
        } else {
            0.0
        };

        SanitizeResult {
            output: result,
            original_len,
            cleaned_len,
            reduction_pct: reduction,
            rounds,
            settled,
            passes_applied: applied,
        }
    }
}

/// Strip site-builder markup from `html`. Pure and idempotent.
pub fn sanitize(html: &str) -> String {
    SanitizerPipeline::default().run(html).output
}
