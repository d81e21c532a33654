//! Post Scrub sanitizer — strips site-builder markup from exported blog posts.
//!
//! Layers:
//! 1. Chrome — duplicated header, share bar, post footer, expand-image buttons
//! 2. Empty — empty wrappers, paragraphs and line-break-only containers
//! 3. Unwrap — collapse bare wrappers holding a single bare `<div>`
//! 4. Attrs — platform data attributes, class fingerprints, aria noise, generated ids
//! 5. Format — placeholder images, empty inline elements, blank-line runs
//!
//! Every pass is a pure text-to-text deletion; [`SanitizerPipeline`] runs them
//! in a fixed order until the document stops changing.

pub mod layer1_chrome;
pub mod layer2_empty;
pub mod layer3_unwrap;
pub mod layer4_attrs;
pub mod layer5_format;
pub mod pipeline;
pub mod rule;

pub use pipeline::{sanitize, Pass, SanitizeResult, SanitizerPipeline, PASSES};
pub use rule::Rule;
