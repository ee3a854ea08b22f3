//! Constants for the mods directory structure.

use std::path::Path;

/// Well-known names inside a game install.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModsPath {
    /// The `mods` directory below the install root
    ModsDir,
    /// The `backup` directory below the mods directory
    BackupDir,
    /// The `.minecraft` install folder used on Linux and Windows
    DotInstallDir,
    /// The `minecraft` install folder used on macOS
    InstallDir,
}

impl ModsPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ModsDir => "mods",
            Self::BackupDir => "backup",
            Self::DotInstallDir => ".minecraft",
            Self::InstallDir => "minecraft",
        }
    }
}

/// Suffix of a recognized artifact file name.
pub const ARTIFACT_SUFFIX: &str = ".jar";

/// Whether `name` carries the artifact suffix.
pub fn is_artifact_name(name: &str) -> bool {
    name.ends_with(ARTIFACT_SUFFIX)
}

impl AsRef<Path> for ModsPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for ModsPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for ModsPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
