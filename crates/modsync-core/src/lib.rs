//! Reconciliation and transfer engine for modsync
//!
//! This crate brings a local mods directory in line with an authoritative
//! remote set of artifacts:
//!
//! - **Remote sources**: the [`RemoteSource`] / [`RemoteArtifact`] capabilities
//!   a transport implements, plus a directory-backed [`DirectorySource`]
//! - **Reconciliation**: per-artifact [`Decision`]s driven by name and byte
//!   length against a frozen local inventory
//! - **Transfer**: one blocking task per artifact, fanned in through a result
//!   channel sized to the phase, failing fast on the first error
//! - **Events**: [`SyncEvent`]s delivered to an injected [`SyncObserver`]
//!
//! # Architecture
//!
//! ```text
//!   RemoteSource ──> SyncEngine ──> write phase ──> backup phase
//!                        │               │               │
//!                  LocalInventory    write_artifact  backup_artifact
//!                   (modsync-fs)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use modsync_core::{DirectorySource, SyncEngine, SyncPolicy};
//! use modsync_fs::InstallLayout;
//!
//! async fn example() -> modsync_core::Result<()> {
//!     let engine = SyncEngine::new(InstallLayout::resolve()?);
//!     let source = DirectorySource::new("/srv/server/mods");
//!     let report = engine.sync(&source, SyncPolicy::default()).await?;
//!     println!("{} written", report.written.len());
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod event;
pub mod remote;
pub mod sync;
pub mod transfer;

pub use error::{Error, Result};
pub use event::{NoopObserver, Phase, SyncEvent, SyncObserver};
pub use remote::{BoxedArtifact, DirectorySource, FileArtifact, RemoteArtifact, RemoteSource};
pub use sync::{Decision, PlannedAction, SyncEngine, SyncPlan, SyncPolicy, SyncReport, decide};
pub use transfer::{backup_artifact, release, write_artifact};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_write_failed_displays_path() {
        let error = Error::WriteFailed {
            path: "/mods/a.jar".into(),
            source: std::io::Error::other("disk full"),
        };

        let display = error.to_string();
        assert!(display.contains("/mods/a.jar"), "got: {}", display);
        assert!(display.contains("disk full"), "got: {}", display);
    }

    #[test]
    fn error_from_resolution_failure_is_configuration() {
        let fs_error = modsync_fs::Error::UnsupportedPlatform {
            os: "plan9".to_string(),
        };
        let error: Error = fs_error.into();
        assert!(matches!(error, Error::Configuration(_)));
    }
}
