//! Local inventory scanning
//!
//! A [`LocalInventory`] is a frozen snapshot of the artifacts sitting in the
//! mods directory, keyed by file name.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::constants::is_artifact_name;
use crate::{Error, Result};

/// Artifact name to byte length, as seen at scan time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalInventory {
    entries: HashMap<String, u64>,
}

impl LocalInventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an artifact.
    pub fn insert(&mut self, name: impl Into<String>, size: u64) {
        self.entries.insert(name.into(), size);
    }

    /// Byte length of the named artifact, if present.
    pub fn get(&self, name: &str) -> Option<u64> {
        self.entries.get(name).copied()
    }

    /// Mark an artifact as accounted for, returning its recorded size.
    pub fn remove(&mut self, name: &str) -> Option<u64> {
        self.entries.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remaining names in sorted order.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(name, size)| (name.as_str(), *size))
    }
}

impl FromIterator<(String, u64)> for LocalInventory {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Snapshot the artifacts in `dir`.
///
/// Only regular files directly inside `dir` whose name carries the artifact
/// suffix are recorded. Subdirectories (the backup store included) are
/// ignored, and nothing is recursed into.
pub fn scan(dir: &Path) -> Result<LocalInventory> {
    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

    let mut inventory = LocalInventory::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let path = entry.path();
        let metadata = entry.metadata().map_err(|e| Error::io(&path, e))?;
        if metadata.is_dir() {
            continue;
        }

        // Names that aren't valid UTF-8 can't match a remote artifact name.
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            tracing::debug!(path = %path.display(), "skipping non UTF-8 file name");
            continue;
        };
        if is_artifact_name(&name) {
            inventory.insert(name, metadata.len());
        }
    }

    tracing::debug!(dir = %dir.display(), artifacts = inventory.len(), "scanned local inventory");
    Ok(inventory)
}
