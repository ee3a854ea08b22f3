//! SyncEngine implementation
//!
//! The SyncEngine brings the mods directory of an [`InstallLayout`] in line
//! with the artifacts supplied by a [`RemoteSource`].

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info};

use modsync_fs::{InstallLayout, LocalInventory};

use super::decision::{Decision, decide};
use super::executor::run_phase;
use super::policy::SyncPolicy;
use super::report::{PlannedAction, SyncPlan, SyncReport};
use crate::event::{NoopObserver, Phase, SyncEvent, SyncObserver};
use crate::remote::{BoxedArtifact, RemoteSource};
use crate::transfer::{backup_artifact, release, write_artifact};
use crate::{Error, Result};

/// Engine for synchronizing a mods directory with a remote set
///
/// The SyncEngine provides two operations:
/// - **sync**: write, replace and back up artifacts until the mods directory
///   matches the remote set
/// - **plan**: compute the same decisions without touching the filesystem
pub struct SyncEngine {
    layout: InstallLayout,
    observer: Arc<dyn SyncObserver>,
}

impl SyncEngine {
    /// Create a new SyncEngine for the given layout with no observer.
    pub fn new(layout: InstallLayout) -> Self {
        Self {
            layout,
            observer: Arc::new(NoopObserver),
        }
    }

    /// Deliver events for every run to `observer`.
    pub fn with_observer(mut self, observer: Arc<dyn SyncObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn layout(&self) -> &InstallLayout {
        &self.layout
    }

    /// Synchronize the mods directory with `source`.
    ///
    /// Runs the write phase to completion, then backs up orphans unless
    /// `keep_existing` is set. The first failure ends the run and is
    /// returned; the directory may then be partially synced, and running
    /// again converges.
    ///
    /// # Errors
    ///
    /// - [`Error::NoRemoteArtifacts`] if the source lists nothing
    /// - [`Error::Directory`] if the mods or backup directory cannot be
    ///   created, or the mods directory cannot be listed
    /// - [`Error::WriteFailed`] / [`Error::BackupFailed`] for the first
    ///   failing transfer
    pub async fn sync(&self, source: &dyn RemoteSource, policy: SyncPolicy) -> Result<SyncReport> {
        let artifacts = list_non_empty(source).await?;
        info!(
            artifacts = artifacts.len(),
            mods_dir = %self.layout.mods_dir().display(),
            force = policy.force,
            keep_existing = policy.keep_existing,
            "syncing"
        );

        let inventory = match self.prepare(policy) {
            Ok(inventory) => inventory,
            Err(e) => {
                artifacts.into_iter().for_each(release);
                return Err(e);
            }
        };

        let tasks = Arc::new(TransferTasks {
            layout: self.layout.clone(),
            observer: Arc::clone(&self.observer),
            policy,
            inventory: Mutex::new(inventory),
        });

        let mut report = SyncReport::default();

        let writer = Arc::clone(&tasks);
        let written = run_phase(Phase::Write, artifacts, self.observer.as_ref(), move |artifact| {
            writer.apply(artifact)
        })
        .await?;
        for (name, decision) in written {
            report.record(name, decision);
        }

        let orphans = tasks.take_orphans();
        if !orphans.is_empty() {
            debug!(orphans = orphans.len(), "backing up orphaned artifacts");
            modsync_fs::io::ensure_dir(self.layout.backup_dir())?;

            let backer = Arc::clone(&tasks);
            let backed_up = run_phase(Phase::Backup, orphans, self.observer.as_ref(), move |name| {
                backer.back_up_orphan(name)
            })
            .await?;
            for (name, decision) in backed_up {
                report.record(name, decision);
            }
        }

        report.sort();
        info!(
            written = report.written.len(),
            replaced = report.replaced.len(),
            skipped = report.skipped.len(),
            backed_up = report.backed_up.len(),
            "sync complete"
        );
        Ok(report)
    }

    /// Compute what [`SyncEngine::sync`] would do, without any I/O beyond
    /// listing the source and scanning the mods directory.
    ///
    /// Every listed artifact is released before returning. A missing mods
    /// directory plans as empty rather than being created.
    pub async fn plan(&self, source: &dyn RemoteSource, policy: SyncPolicy) -> Result<SyncPlan> {
        let artifacts = list_non_empty(source).await?;
        let remote: Vec<(String, u64)> = artifacts
            .into_iter()
            .map(|artifact| {
                let entry = (artifact.name().to_string(), artifact.size());
                release(artifact);
                entry
            })
            .collect();

        let mut inventory = if policy.needs_inventory() && self.layout.mods_dir().is_dir() {
            modsync_fs::scan(self.layout.mods_dir())?
        } else {
            LocalInventory::new()
        };

        let mut actions = Vec::with_capacity(remote.len());
        for (name, size) in remote {
            let decision = decide(policy.force, inventory.get(&name), size);
            if policy.tracks_orphans() {
                inventory.remove(&name);
            }
            actions.push(PlannedAction { name, decision });
        }
        if policy.tracks_orphans() {
            actions.extend(inventory.names().into_iter().map(|name| PlannedAction {
                name,
                decision: Decision::BackupOrphan,
            }));
        }

        Ok(SyncPlan::from_actions(actions))
    }

    /// Create the mods directory and snapshot it when the policy needs one.
    fn prepare(&self, policy: SyncPolicy) -> Result<Option<LocalInventory>> {
        modsync_fs::io::ensure_dir(self.layout.mods_dir())?;

        if !policy.needs_inventory() {
            return Ok(None);
        }
        Ok(Some(modsync_fs::scan(self.layout.mods_dir())?))
    }
}

async fn list_non_empty(source: &dyn RemoteSource) -> Result<Vec<BoxedArtifact>> {
    let artifacts = source.list_artifacts().await?;
    if artifacts.is_empty() {
        return Err(Error::NoRemoteArtifacts);
    }
    Ok(artifacts)
}

/// State shared by every transfer task of one run.
///
/// The inventory lock is only ever held for a lookup or a removal, never
/// across filesystem I/O.
struct TransferTasks {
    layout: InstallLayout,
    observer: Arc<dyn SyncObserver>,
    policy: SyncPolicy,
    inventory: Mutex<Option<LocalInventory>>,
}

impl TransferTasks {
    /// Decide and carry out the write-phase work for one remote artifact.
    fn apply(&self, artifact: BoxedArtifact) -> Result<(String, Decision)> {
        let name = artifact.name().to_string();
        let size = artifact.size();

        let decision = if self.policy.force {
            Decision::Overwrite
        } else {
            let local_size = self.inventory.lock().as_ref().and_then(|inv| inv.get(&name));
            decide(false, local_size, size)
        };
        debug!(%name, size, %decision, "decided");

        if decision.writes() {
            if decision.backs_up()
                && let Err(e) = self.back_up(&name)
            {
                release(artifact);
                return Err(e);
            }

            let destination = self.layout.mods_dir().join(&name);
            self.observer.on_event(&SyncEvent::WriteStarted {
                name: name.clone(),
                size,
                destination: destination.clone(),
            });
            write_artifact(artifact, &destination)?;
        } else {
            release(artifact);
        }

        if self.policy.tracks_orphans()
            && let Some(inventory) = self.inventory.lock().as_mut()
        {
            inventory.remove(&name);
        }

        Ok((name, decision))
    }

    fn back_up_orphan(&self, name: String) -> Result<(String, Decision)> {
        self.back_up(&name)?;
        Ok((name, Decision::BackupOrphan))
    }

    fn back_up(&self, name: &str) -> Result<()> {
        // The backup directory may not exist yet during the write phase.
        modsync_fs::io::ensure_dir(self.layout.backup_dir())?;

        self.observer.on_event(&SyncEvent::BackupStarted {
            name: name.to_string(),
            from: self.layout.mods_dir().join(name),
            to: self.layout.backup_dir().join(name),
        });
        backup_artifact(&self.layout, name)
    }

    /// Names left unclaimed after the write phase, when orphans are tracked.
    fn take_orphans(&self) -> Vec<String> {
        if !self.policy.tracks_orphans() {
            return Vec::new();
        }
        self.inventory
            .lock()
            .take()
            .map(|inventory| inventory.names())
            .unwrap_or_default()
    }
}
