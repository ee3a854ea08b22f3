//! Paths command implementation

use std::path::Path;

use colored::Colorize;

use super::resolve_layout;
use crate::error::Result;

/// Run the paths command
///
/// Prints the directories a sync would use.
pub fn run_paths(install_dir: Option<&Path>) -> Result<()> {
    let layout = resolve_layout(install_dir)?;

    println!("{:<8} {}", "install".bold(), layout.install_dir().display());
    println!("{:<8} {}", "mods".bold(), layout.mods_dir().display());
    println!("{:<8} {}", "backup".bold(), layout.backup_dir().display());
    Ok(())
}
