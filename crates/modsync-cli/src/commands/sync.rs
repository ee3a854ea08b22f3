//! Sync command implementation

use std::path::{Path, PathBuf};
use std::sync::Arc;

use colored::Colorize;

use modsync_core::{Decision, DirectorySource, SyncEngine, SyncPlan, SyncPolicy, SyncReport};

use super::resolve_layout;
use crate::error::{CliError, Result};
use crate::progress::ConsoleObserver;

/// Arguments of the sync command
#[derive(Debug, Clone, Default)]
pub struct SyncArgs {
    pub server_dir: PathBuf,
    pub install_dir: Option<PathBuf>,
    pub policy: SyncPolicy,
    pub dry_run: bool,
    pub json: bool,
}

/// Run the sync command
///
/// Syncs the mods directory with the mod files in `server_dir`, or only
/// prints the plan when `dry_run` is set.
pub async fn run_sync(args: &SyncArgs) -> Result<()> {
    if !args.server_dir.is_dir() {
        return Err(CliError::user(format!(
            "Server mods directory not found: {}",
            args.server_dir.display()
        )));
    }

    let layout = resolve_layout(args.install_dir.as_deref())?;
    let source = DirectorySource::new(&args.server_dir);

    if args.dry_run {
        let engine = SyncEngine::new(layout);
        let plan = engine.plan(&source, args.policy).await?;
        if args.json {
            println!("{}", serde_json::to_string_pretty(&plan)?);
        } else {
            print_plan(&plan, engine.layout().mods_dir());
        }
        return Ok(());
    }

    let mut engine = SyncEngine::new(layout);
    if !args.json {
        println!(
            "{} Syncing {} into {}...",
            "=>".blue().bold(),
            args.server_dir.display(),
            engine.layout().mods_dir().display()
        );
        engine = engine.with_observer(Arc::new(ConsoleObserver));
    }

    let report = engine.sync(&source, args.policy).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_plan(plan: &SyncPlan, mods_dir: &Path) {
    println!(
        "{} Planned changes for {}:",
        "[dry-run]".yellow().bold(),
        mods_dir.display()
    );
    if plan.is_noop() {
        println!("{} Already synchronized. No changes needed.", "OK".green().bold());
        return;
    }
    for action in &plan.actions {
        let marker = match action.decision {
            Decision::WriteNew | Decision::Overwrite => "+".green(),
            Decision::ReplaceWithBackup => "~".yellow(),
            Decision::BackupOrphan => ">".yellow(),
            Decision::Skip => continue,
        };
        println!("   {} {:<9} {}", marker, action.decision.as_str(), action.name);
    }
}

fn print_report(report: &SyncReport) {
    if report.is_unchanged() {
        println!("{} Already synchronized. No changes needed.", "OK".green().bold());
        return;
    }
    println!(
        "{} Synchronization complete: {} written, {} replaced, {} unchanged, {} backed up",
        "OK".green().bold(),
        report.written.len(),
        report.replaced.len(),
        report.skipped.len(),
        report.backed_up.len()
    );
}
