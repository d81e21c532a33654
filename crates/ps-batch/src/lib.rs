//! Batch driver: sanitize every post in a folder and rewrite the ones that change.

pub mod discover;
pub mod report;
pub mod runner;

pub use discover::discover;
pub use report::{BatchReport, FileOutcome, FileStatus};
pub use runner::{clean_file, BatchRunner};
