//! Per-file outcomes and the run summary.

use ps_core::ScrubError;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Cleaned,
    Unchanged,
    Failed,
}

#[derive(Debug, Clone, Serialize)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub name: String,
    pub status: FileStatus,
    pub original_len: usize,
    pub cleaned_len: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub passes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub(crate) fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

impl FileOutcome {
    pub fn failed(path: &Path, err: &ScrubError) -> Self {
        Self {
            path: path.to_path_buf(),
            name: file_name(path),
            status: FileStatus::Failed,
            original_len: 0,
            cleaned_len: 0,
            passes: Vec::new(),
            error: Some(err.to_string()),
        }
    }

    /// Console line for this file.
    pub fn status_line(&self, dry_run: bool) -> String {
        match self.status {
            FileStatus::Cleaned if dry_run => format!("~ Would clean: {}", self.name),
            FileStatus::Cleaned => format!("✓ Cleaned: {}", self.name),
            FileStatus::Unchanged => format!("- No changes: {}", self.name),
            FileStatus::Failed => format!(
                "! Failed: {} ({})",
                self.name,
                self.error.as_deref().unwrap_or("unknown error")
            ),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub target_dir: PathBuf,
    pub found: usize,
    pub cleaned: usize,
    pub failed: usize,
    pub dry_run: bool,
    pub files: Vec<FileOutcome>,
}

impl BatchReport {
    pub fn new(target_dir: &Path, found: usize, dry_run: bool) -> Self {
        Self {
            target_dir: target_dir.to_path_buf(),
            found,
            cleaned: 0,
            failed: 0,
            dry_run,
            files: Vec::with_capacity(found),
        }
    }

    pub fn push(&mut self, outcome: FileOutcome) {
        match outcome.status {
            FileStatus::Cleaned => self.cleaned += 1,
            FileStatus::Failed => self.failed += 1,
            FileStatus::Unchanged => {}
        }
        self.files.push(outcome);
    }

    pub fn summary_line(&self) -> String {
        let verb = if self.dry_run { "Would clean" } else { "Cleaned" };
        let mut line = format!("✓ {verb} {} out of {} blog post files", self.cleaned, self.found);
        if self.failed > 0 {
            line.push_str(&format!(" ({} failed)", self.failed));
        }
        line
    }

    pub fn to_json(&self) -> ps_core::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
