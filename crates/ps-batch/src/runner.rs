//! Read, sanitize, write back.

use crate::discover::discover;
use crate::report::{file_name, BatchReport, FileOutcome, FileStatus};
use ps_core::{Result, ScrubConfig, ScrubError};
use ps_sanitizer::SanitizerPipeline;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info, warn};

/// Sanitize one file in place. The file is only written when its content changes.
pub fn clean_file(path: &Path, pipeline: &SanitizerPipeline, dry_run: bool) -> Result<FileOutcome> {
    let content = fs::read_to_string(path).map_err(|e| ScrubError::io(path, e))?;
    let result = pipeline.run(&content);

    let status = if result.output != content {
        if !dry_run {
            fs::write(path, &result.output).map_err(|e| ScrubError::io(path, e))?;
        }
        info!(
            path = %path.display(),
            removed = result.original_len.saturating_sub(result.cleaned_len),
            rounds = result.rounds,
            dry_run,
            "cleaned post"
        );
        FileStatus::Cleaned
    } else {
        debug!(path = %path.display(), "post already clean");
        FileStatus::Unchanged
    };

    Ok(FileOutcome {
        path: path.to_path_buf(),
        name: file_name(path),
        status,
        original_len: result.original_len,
        cleaned_len: result.cleaned_len,
        passes: result.passes_applied,
        error: None,
    })
}

/// Runs the sanitizer over every post in the configured folder.
pub struct BatchRunner {
    config: ScrubConfig,
    pipeline: SanitizerPipeline,
}

impl BatchRunner {
    pub fn new(config: ScrubConfig) -> Result<Self> {
        config.validate()?;
        let pipeline = match config.max_rounds {
            Some(cap) => SanitizerPipeline::with_max_rounds(cap),
            None => SanitizerPipeline::new(),
        };
        Ok(Self { config, pipeline })
    }

    pub fn config(&self) -> &ScrubConfig {
        &self.config
    }

    /// Process every post, writing status lines to `out` as files complete.
    ///
    /// The first I/O error aborts the run unless `keep_going` is set.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<BatchReport> {
        let dir = &self.config.target_dir;
        let files = discover(dir, self.config.normalized_extension())?;
        info!(dir = %dir.display(), found = files.len(), "discovered posts");
        writeln!(out, "Found {} blog post files", files.len()).map_err(ScrubError::Report)?;

        let mut report = BatchReport::new(dir, files.len(), self.config.dry_run);
        for path in &files {
            let outcome = match clean_file(path, &self.pipeline, self.config.dry_run) {
                Ok(outcome) => outcome,
                Err(err) if self.config.keep_going => {
                    warn!(path = %path.display(), error = %err, "skipping post");
                    FileOutcome::failed(path, &err)
                }
                Err(err) => return Err(err),
            };
            writeln!(out, "{}", outcome.status_line(self.config.dry_run)).map_err(ScrubError::Report)?;
            report.push(outcome);
        }

        writeln!(out).map_err(ScrubError::Report)?;
        writeln!(out, "{}", report.summary_line()).map_err(ScrubError::Report)?;
        Ok(report)
    }
}
