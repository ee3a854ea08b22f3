//! Error types for modsync-fs

use std::path::PathBuf;

use crate::layout::DirectoryKind;

/// Result type for modsync-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in modsync-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{os:?} is unsupported")]
    UnsupportedPlatform { os: String },

    #[error("Could not determine the user {kind} directory")]
    DirectoryUnavailable { kind: DirectoryKind },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
