use std::fmt;

use serde::Serialize;

/// What happens to one artifact during a sync run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// No local artifact with this name; write it.
    WriteNew,
    /// A local artifact of a different size exists; back it up, then write.
    ReplaceWithBackup,
    /// Forced; write regardless of what is on disk.
    Overwrite,
    /// A local artifact of the same size exists; leave it alone.
    Skip,
    /// Local artifact with no remote counterpart; move it to the backup store.
    BackupOrphan,
}

impl Decision {
    /// Whether remote bytes are written for this decision.
    pub fn writes(&self) -> bool {
        matches!(self, Self::WriteNew | Self::ReplaceWithBackup | Self::Overwrite)
    }

    /// Whether a local file is moved into the backup store.
    pub fn backs_up(&self) -> bool {
        matches!(self, Self::ReplaceWithBackup | Self::BackupOrphan)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WriteNew => "write",
            Self::ReplaceWithBackup => "replace",
            Self::Overwrite => "overwrite",
            Self::Skip => "skip",
            Self::BackupOrphan => "backup",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a remote artifact against the local copy of the same name.
///
/// Equal byte length counts as equal content. There is no hashing.
pub fn decide(force: bool, local_size: Option<u64>, remote_size: u64) -> Decision {
    if force {
        return Decision::Overwrite;
    }
    match local_size {
        None => Decision::WriteNew,
        Some(size) if size == remote_size => Decision::Skip,
        Some(_) => Decision::ReplaceWithBackup,
    }
}
