//! Integration tests for the batch driver.

use ps_batch::{clean_file, discover, BatchRunner, FileStatus};
use ps_core::{ScrubConfig, ScrubError};
use ps_sanitizer::SanitizerPipeline;
use std::fs::{self, File};
use std::path::Path;
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

const DIRTY: &str = r#"<article><p id="viewer-x1" class="cZKur">Hello</p><p><br></p><section><img alt="" src="dup.png"></section></article>"#;
const DIRTY_CLEAN: &str = "<article><p>Hello</p></article>";
const CLEAN: &str = "<article><h1>Title</h1><p>Real text</p></article>";

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn posts_dir() -> TempDir {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "dirty.html", DIRTY);
    write(tmp.path(), "clean.html", CLEAN);
    write(tmp.path(), "notes.txt", DIRTY);
    fs::create_dir(tmp.path().join("drafts")).unwrap();
    write(&tmp.path().join("drafts"), "nested.html", DIRTY);
    tmp
}

fn run(config: ScrubConfig) -> (ps_core::Result<ps_batch::BatchReport>, String) {
    let runner = BatchRunner::new(config).unwrap();
    let mut out = Vec::new();
    let report = runner.run(&mut out);
    (report, String::from_utf8(out).unwrap())
}

// ========== Discovery ==========

#[test]
fn test_discover_html_only_non_recursive() {
    let tmp = posts_dir();
    let files = discover(tmp.path(), "html").unwrap();
    let names: Vec<_> = files.iter().map(|p| p.file_name().unwrap().to_str().unwrap()).collect();
    assert_eq!(names, vec!["clean.html", "dirty.html"]);
}

#[test]
fn test_discover_missing_dir() {
    let tmp = TempDir::new().unwrap();
    let err = discover(&tmp.path().join("nope"), "html").unwrap_err();
    assert!(matches!(err, ScrubError::Io { .. }));
}

#[test]
fn test_discover_file_is_not_dir() {
    let tmp = posts_dir();
    let err = discover(&tmp.path().join("clean.html"), "html").unwrap_err();
    assert!(matches!(err, ScrubError::NotADirectory { .. }));
}

#[test]
fn test_discover_empty_dir() {
    let tmp = TempDir::new().unwrap();
    assert!(discover(tmp.path(), "html").unwrap().is_empty());
}

// ========== Single file ==========

#[test]
fn test_clean_file_rewrites_changed() {
    let tmp = posts_dir();
    let path = tmp.path().join("dirty.html");
    let outcome = clean_file(&path, &SanitizerPipeline::default(), false).unwrap();
    assert_eq!(outcome.status, FileStatus::Cleaned);
    assert_eq!(outcome.name, "dirty.html");
    assert_eq!(fs::read_to_string(&path).unwrap(), DIRTY_CLEAN);
    assert_eq!(outcome.cleaned_len, DIRTY_CLEAN.len());
    assert!(!outcome.passes.is_empty());
}

#[test]
fn test_clean_file_unchanged_not_written() {
    let tmp = posts_dir();
    let path = tmp.path().join("clean.html");
    let stamp = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000);
    File::options().write(true).open(&path).unwrap().set_modified(stamp).unwrap();

    let outcome = clean_file(&path, &SanitizerPipeline::default(), false).unwrap();
    assert_eq!(outcome.status, FileStatus::Unchanged);
    assert_eq!(fs::read_to_string(&path).unwrap(), CLEAN);
    assert_eq!(fs::metadata(&path).unwrap().modified().unwrap(), stamp);
}

#[test]
fn test_clean_file_dry_run() {
    let tmp = posts_dir();
    let path = tmp.path().join("dirty.html");
    let outcome = clean_file(&path, &SanitizerPipeline::default(), true).unwrap();
    assert_eq!(outcome.status, FileStatus::Cleaned);
    assert_eq!(fs::read_to_string(&path).unwrap(), DIRTY);
}

#[test]
fn test_clean_file_invalid_utf8() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("bad.html");
    fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
    let err = clean_file(&path, &SanitizerPipeline::default(), false).unwrap_err();
    assert!(err.to_string().contains("bad.html"));
}

// ========== Runner ==========

#[test]
fn test_run_reports_and_rewrites() {
    let tmp = posts_dir();
    let (report, out) = run(ScrubConfig::new(tmp.path()));
    let report = report.unwrap();
    assert_eq!(report.found, 2);
    assert_eq!(report.cleaned, 1);
    assert_eq!(report.failed, 0);
    assert!(out.starts_with("Found 2 blog post files\n"));
    assert!(out.contains("✓ Cleaned: dirty.html"));
    assert!(out.contains("- No changes: clean.html"));
    assert!(out.ends_with("\n\n✓ Cleaned 1 out of 2 blog post files\n"));
    assert_eq!(fs::read_to_string(tmp.path().join("dirty.html")).unwrap(), DIRTY_CLEAN);
    assert_eq!(fs::read_to_string(tmp.path().join("notes.txt")).unwrap(), DIRTY);
    assert_eq!(fs::read_to_string(tmp.path().join("drafts/nested.html")).unwrap(), DIRTY);
}

#[test]
fn test_second_run_is_noop() {
    let tmp = posts_dir();
    run(ScrubConfig::new(tmp.path())).0.unwrap();
    let (report, out) = run(ScrubConfig::new(tmp.path()));
    assert_eq!(report.unwrap().cleaned, 0);
    assert!(out.contains("- No changes: dirty.html"));
    assert!(out.contains("✓ Cleaned 0 out of 2 blog post files"));
}

#[test]
fn test_run_empty_dir() {
    let tmp = TempDir::new().unwrap();
    let (report, out) = run(ScrubConfig::new(tmp.path()));
    assert_eq!(report.unwrap().found, 0);
    assert!(out.contains("Found 0 blog post files"));
    assert!(out.contains("Cleaned 0 out of 0 blog post files"));
}

#[test]
fn test_run_dry_run_leaves_files() {
    let tmp = posts_dir();
    let config = ScrubConfig { dry_run: true, ..ScrubConfig::new(tmp.path()) };
    let (report, out) = run(config);
    assert_eq!(report.unwrap().cleaned, 1);
    assert!(out.contains("~ Would clean: dirty.html"));
    assert!(out.contains("✓ Would clean 1 out of 2 blog post files"));
    assert_eq!(fs::read_to_string(tmp.path().join("dirty.html")).unwrap(), DIRTY);
}

#[test]
fn test_run_aborts_on_io_error() {
    let tmp = posts_dir();
    fs::write(tmp.path().join("broken.html"), [0xff, 0xfe]).unwrap();
    let (report, _) = run(ScrubConfig::new(tmp.path()));
    assert!(matches!(report.unwrap_err(), ScrubError::Io { .. }));
}

#[test]
fn test_run_keep_going_isolates_failure() {
    let tmp = posts_dir();
    fs::write(tmp.path().join("broken.html"), [0xff, 0xfe]).unwrap();
    let config = ScrubConfig { keep_going: true, ..ScrubConfig::new(tmp.path()) };
    let (report, out) = run(config);
    let report = report.unwrap();
    assert_eq!(report.found, 3);
    assert_eq!(report.failed, 1);
    assert_eq!(report.cleaned, 1);
    assert!(out.contains("! Failed: broken.html"));
    assert!(out.contains("(1 failed)"));
    assert_eq!(fs::read_to_string(tmp.path().join("dirty.html")).unwrap(), DIRTY_CLEAN);
}

#[test]
fn test_run_custom_extension() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "post.htm", DIRTY);
    write(tmp.path(), "post.html", DIRTY);
    let config = ScrubConfig { extension: ".htm".into(), ..ScrubConfig::new(tmp.path()) };
    let (report, _) = run(config);
    assert_eq!(report.unwrap().found, 1);
    assert_eq!(fs::read_to_string(tmp.path().join("post.html")).unwrap(), DIRTY);
}

#[test]
fn test_runner_rejects_bad_config() {
    let config = ScrubConfig { max_rounds: Some(0), ..ScrubConfig::default() };
    assert!(matches!(BatchRunner::new(config), Err(ScrubError::InvalidConfig(_))));
}

#[test]
fn test_report_json() {
    let tmp = posts_dir();
    let report = run(ScrubConfig::new(tmp.path())).0.unwrap();
    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(json["found"], 2);
    assert_eq!(json["cleaned"], 1);
    let statuses: Vec<_> = json["files"].as_array().unwrap().iter().map(|f| f["status"].as_str().unwrap().to_string()).collect();
    assert!(statuses.contains(&"cleaned".to_string()));
    assert!(statuses.contains(&"unchanged".to_string()));
}
