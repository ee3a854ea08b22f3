//! Outcome types for sync runs and dry-run plans

use serde::Serialize;

use super::decision::Decision;

/// Report from a completed sync run.
///
/// Every list is sorted by artifact name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    /// Artifacts written where nothing was, or overwritten under `force`
    pub written: Vec<String>,
    /// Artifacts whose local copy was backed up before writing
    pub replaced: Vec<String>,
    /// Artifacts left alone because the local copy had the same size
    pub skipped: Vec<String>,
    /// Orphaned local artifacts moved into the backup directory
    pub backed_up: Vec<String>,
}

impl SyncReport {
    pub(crate) fn record(&mut self, name: String, decision: Decision) {
        match decision {
            Decision::WriteNew | Decision::Overwrite => self.written.push(name),
            Decision::ReplaceWithBackup => self.replaced.push(name),
            Decision::Skip => self.skipped.push(name),
            Decision::BackupOrphan => self.backed_up.push(name),
        }
    }

    pub(crate) fn sort(&mut self) {
        self.written.sort();
        self.replaced.sort();
        self.skipped.sort();
        self.backed_up.sort();
    }

    /// Whether the run left the directory exactly as it found it.
    pub fn is_unchanged(&self) -> bool {
        self.written.is_empty() && self.replaced.is_empty() && self.backed_up.is_empty()
    }
}

/// One planned action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedAction {
    pub name: String,
    pub decision: Decision,
}

/// The decisions a sync run would make, computed without touching the disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyncPlan {
    /// Planned actions sorted by artifact name
    pub actions: Vec<PlannedAction>,
}

impl SyncPlan {
    pub(crate) fn from_actions(mut actions: Vec<PlannedAction>) -> Self {
        actions.sort_by(|a, b| a.name.cmp(&b.name));
        Self { actions }
    }

    /// Decision planned for `name`, if any.
    pub fn decision(&self, name: &str) -> Option<Decision> {
        self.actions
            .iter()
            .find(|action| action.name == name)
            .map(|action| action.decision)
    }

    /// Number of artifacts with the given decision.
    pub fn count(&self, decision: Decision) -> usize {
        self.actions
            .iter()
            .filter(|action| action.decision == decision)
            .count()
    }

    /// Whether running the sync would change nothing.
    pub fn is_noop(&self) -> bool {
        self.actions
            .iter()
            .all(|action| action.decision == Decision::Skip)
    }
}
