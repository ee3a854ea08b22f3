//! Sync events and the observer they are delivered to

use std::fmt;
use std::path::PathBuf;

/// One of the two concurrent batches of work in a sync run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Remote artifacts written into the mods directory
    Write,
    /// Orphaned local artifacts moved into the backup directory
    Backup,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Write => "write",
            Self::Backup => "backup",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Something that happened during a sync run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncEvent {
    /// A remote artifact is about to be written
    WriteStarted {
        name: String,
        size: u64,
        destination: PathBuf,
    },
    /// A local artifact is about to be moved into the backup directory
    BackupStarted {
        name: String,
        from: PathBuf,
        to: PathBuf,
    },
    /// `current` of `total` tasks in `phase` have reported success
    ProgressUpdated {
        phase: Phase,
        current: usize,
        total: usize,
    },
}

/// Receives [`SyncEvent`]s.
///
/// Write and backup events are raised from transfer tasks, so implementations
/// must tolerate calls from several threads at once.
pub trait SyncObserver: Send + Sync {
    fn on_event(&self, event: &SyncEvent);
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SyncObserver for NoopObserver {
    fn on_event(&self, _event: &SyncEvent) {}
}

impl<F> SyncObserver for F
where
    F: Fn(&SyncEvent) + Send + Sync,
{
    fn on_event(&self, event: &SyncEvent) {
        self(event)
    }
}
