//! Install layout resolution
//!
//! The layout is computed once, up front, and handed to the sync engine as a
//! plain value. Nothing here is cached in process-wide state.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::{Error, ModsPath, Result};

/// Which user directory the install root hangs off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryKind {
    Home,
    Config,
}

impl fmt::Display for DirectoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => write!(f, "home"),
            Self::Config => write!(f, "config"),
        }
    }
}

/// Resolved install, mods and backup directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallLayout {
    install_dir: PathBuf,
    mods_dir: PathBuf,
    backup_dir: PathBuf,
}

impl InstallLayout {
    /// Build the layout below an explicit install root.
    pub fn from_install_dir(install_dir: impl Into<PathBuf>) -> Self {
        let install_dir = install_dir.into();
        let mods_dir = install_dir.join(ModsPath::ModsDir);
        let backup_dir = mods_dir.join(ModsPath::BackupDir);
        Self {
            install_dir,
            mods_dir,
            backup_dir,
        }
    }

    /// Resolve the platform default layout for the current user.
    pub fn resolve() -> Result<Self> {
        Self::resolve_for(std::env::consts::OS)
    }

    /// Resolve the default layout for the given target OS name.
    ///
    /// Windows and macOS keep the install under the user config directory,
    /// Linux under the home directory.
    pub fn resolve_for(os: &str) -> Result<Self> {
        let (base, kind) = match os {
            "windows" | "macos" => (dirs::config_dir(), DirectoryKind::Config),
            "linux" => (dirs::home_dir(), DirectoryKind::Home),
            other => {
                return Err(Error::UnsupportedPlatform {
                    os: other.to_string(),
                });
            }
        };
        let base = base.ok_or(Error::DirectoryUnavailable { kind })?;

        let folder = if os == "macos" {
            ModsPath::InstallDir
        } else {
            ModsPath::DotInstallDir
        };
        Ok(Self::from_install_dir(base.join(folder)))
    }

    /// The game install root.
    pub fn install_dir(&self) -> &Path {
        &self.install_dir
    }

    /// The directory artifacts are synced into.
    pub fn mods_dir(&self) -> &Path {
        &self.mods_dir
    }

    /// The directory displaced and orphaned artifacts are moved into.
    pub fn backup_dir(&self) -> &Path {
        &self.backup_dir
    }
}
