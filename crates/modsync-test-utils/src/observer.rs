//! Observer that records events for later assertions.

use modsync_core::{Phase, SyncEvent, SyncObserver};
use parking_lot::Mutex;

#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<SyncEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SyncEvent> {
        self.events.lock().clone()
    }

    /// `(current, total)` pairs reported for `phase`, in delivery order.
    pub fn progress(&self, phase: Phase) -> Vec<(usize, usize)> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                SyncEvent::ProgressUpdated {
                    phase: p,
                    current,
                    total,
                } if *p == phase => Some((*current, *total)),
                _ => None,
            })
            .collect()
    }

    /// Names announced by `WriteStarted`, sorted.
    pub fn writes(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .events
            .lock()
            .iter()
            .filter_map(|event| match event {
                SyncEvent::WriteStarted { name, .. } => Some(name.clone()),
                _ => None,
            })
            .collect();
        names.sort();
        names
    }

    /// Names announced by `BackupStarted`, sorted.
    pub fn backups(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .events
            .lock()
            .iter()
            .filter_map(|event| match event {
                SyncEvent::BackupStarted { name, .. } => Some(name.clone()),
                _ => None,
            })
            .collect();
        names.sort();
        names
    }
}

impl SyncObserver for RecordingObserver {
    fn on_event(&self, event: &SyncEvent) {
        self.events.lock().push(event.clone());
    }
}
