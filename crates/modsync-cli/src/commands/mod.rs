//! Command implementations for modsync-cli

pub mod paths;
pub mod sync;

use std::path::Path;

use modsync_fs::InstallLayout;

use crate::error::Result;

pub use paths::run_paths;
pub use sync::{SyncArgs, run_sync};

/// Use the explicit install root if given, otherwise the platform default.
pub fn resolve_layout(install_dir: Option<&Path>) -> Result<InstallLayout> {
    match install_dir {
        Some(dir) => Ok(InstallLayout::from_install_dir(dir)),
        None => Ok(InstallLayout::resolve().map_err(modsync_core::Error::from)?),
    }
}
