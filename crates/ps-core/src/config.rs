use crate::error::{Result, ScrubError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default folder holding the exported blog posts.
pub const DEFAULT_TARGET_DIR: &str = "blog/posts";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrubConfig {
    pub target_dir: PathBuf,
    /// File extension to pick up, without the leading dot.
    pub extension: String,
    pub dry_run: bool,
    pub keep_going: bool,
    /// Optional cap on sanitizer rounds; `None` runs each post until it settles.
    pub max_rounds: Option<usize>,
}

impl ScrubConfig {
    pub fn new(target_dir: impl Into<PathBuf>) -> Self {
        Self {
            target_dir: target_dir.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_rounds == Some(0) {
            return Err(ScrubError::InvalidConfig("max_rounds must be at least 1".into()));
        }
        if self.extension.trim_start_matches('.').is_empty() {
            return Err(ScrubError::InvalidConfig("extension must not be empty".into()));
        }
        Ok(())
    }

    /// Extension with any leading dot removed.
    pub fn normalized_extension(&self) -> &str {
        self.extension.trim_start_matches('.')
    }
}

impl Default for ScrubConfig {
    fn default() -> Self {
        Self {
            target_dir: PathBuf::from(DEFAULT_TARGET_DIR),
            extension: "html".into(),
            dry_run: false,
            keep_going: false,
            max_rounds: None,
        }
    }
}
