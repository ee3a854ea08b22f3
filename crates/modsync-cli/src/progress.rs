//! Console rendering of sync events

use colored::Colorize;

use modsync_core::{SyncEvent, SyncObserver};

/// Prints one line per transfer and a line when each phase completes.
pub struct ConsoleObserver;

impl SyncObserver for ConsoleObserver {
    fn on_event(&self, event: &SyncEvent) {
        match event {
            SyncEvent::WriteStarted { name, size, .. } => {
                println!("   {} {} ({} bytes)", "+".green(), name, size);
            }
            SyncEvent::BackupStarted { name, to, .. } => {
                println!("   {} {} -> {}", ">".yellow(), name, to.display());
            }
            SyncEvent::ProgressUpdated {
                phase,
                current,
                total,
            } if current == total => {
                println!("   {} {} phase: {}/{}", "=".blue(), phase, current, total);
            }
            SyncEvent::ProgressUpdated { .. } => {}
        }
    }
}
