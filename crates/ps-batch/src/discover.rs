//! Post discovery.

use ps_core::{Result, ScrubError};
use std::fs;
use std::path::{Path, PathBuf};

/// List regular files directly inside `dir` whose extension is `extension`.
///
/// Not recursive. Results are sorted by path so runs print in a stable order.
pub fn discover(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let meta = fs::metadata(dir).map_err(|e| ScrubError::io(dir, e))?;
    if !meta.is_dir() {
        return Err(ScrubError::NotADirectory { path: dir.to_path_buf() });
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| ScrubError::io(dir, e))? {
        let path = entry.map_err(|e| ScrubError::io(dir, e))?.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) == Some(extension) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
