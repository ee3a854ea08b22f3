//! Filesystem primitives used by the sync engine

use std::fs::{self, File, OpenOptions};
use std::path::Path;

use crate::{Error, Result};

/// Create `dir` and any missing parents.
///
/// Succeeds when the directory already exists, including when another task
/// creates it concurrently.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))
}

/// Open `path` for writing, creating it or truncating existing content.
pub fn create_truncate(path: &Path) -> std::io::Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
}

/// Move `from` to `to` with a single rename.
///
/// This is atomic on one filesystem. There is deliberately no copy fallback,
/// so a cross-device move fails.
pub fn move_file(from: &Path, to: &Path) -> std::io::Result<()> {
    fs::rename(from, to)
}
