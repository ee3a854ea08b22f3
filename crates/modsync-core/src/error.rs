//! Error types for modsync-core

use std::path::PathBuf;

/// Result type for modsync-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while syncing
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The install layout could not be resolved; no sync was attempted
    #[error("Could not resolve install directories: {0}")]
    Configuration(#[source] modsync_fs::Error),

    /// The remote set was empty
    #[error("No remote artifacts to sync")]
    NoRemoteArtifacts,

    /// A required directory could not be listed or created
    #[error("Directory error at {path}: {source}")]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing an artifact to its destination failed
    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Moving an artifact into the backup directory failed
    #[error("Failed to back up {name}: {source}")]
    BackupFailed {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// The remote source could not supply its artifacts
    #[error("Remote source error: {message}")]
    Remote { message: String },

    /// A transfer task ended without reporting a result
    #[error("Transfer task failed: {message}")]
    TaskFailed { message: String },
}

impl From<modsync_fs::Error> for Error {
    fn from(error: modsync_fs::Error) -> Self {
        match error {
            modsync_fs::Error::Io { path, source } => Self::Directory { path, source },
            other => Self::Configuration(other),
        }
    }
}
