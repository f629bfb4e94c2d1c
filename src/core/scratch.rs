//! Scoped scratch directories for spider work.
//!
//! Paths are deterministic per tag, so a spider can find its own scratch
//! space again after a restart. Two tasks sharing a tag concurrently is
//! caller error.

use std::fs;
use std::path::{Path, PathBuf};

use super::errors::TaskResult;

fn dir_name(tag: Option<&str>) -> String {
    match tag {
        Some(tag) if !tag.is_empty() => format!("spider_temp_{tag}"),
        _ => "spider_temp".to_string(),
    }
}

/// The path `create` would return for `tag`, without touching the disk.
pub fn path_for(tag: Option<&str>) -> PathBuf {
    std::env::temp_dir().join(dir_name(tag))
}

/// Returns a clean, empty scratch directory keyed by `tag`. Any previous
/// contents at the same path are removed first.
pub fn create(tag: Option<&str>) -> TaskResult<PathBuf> {
    create_under(&std::env::temp_dir(), tag)
}

/// Removes the scratch directory for `tag` if it exists. Callers own
/// cleanup on every exit path of work that used the directory; the
/// lifecycle driver does not clean up for them.
pub fn remove(tag: Option<&str>) -> TaskResult<()> {
    remove_under(&std::env::temp_dir(), tag)
}

pub fn create_under(root: &Path, tag: Option<&str>) -> TaskResult<PathBuf> {
    let path = root.join(dir_name(tag));
    if path.exists() {
        fs::remove_dir_all(&path)?;
    }
    fs::create_dir_all(&path)?;
    Ok(path)
}

pub fn remove_under(root: &Path, tag: Option<&str>) -> TaskResult<()> {
    let path = root.join(dir_name(tag));
    if path.exists() {
        fs::remove_dir_all(&path)?;
    }
    Ok(())
}
