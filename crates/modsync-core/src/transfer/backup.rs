use tracing::info;

use modsync_fs::InstallLayout;

use crate::{Error, Result};

/// Move `name` from the mods directory into the backup directory.
///
/// A single rename; an existing backup of the same name is replaced.
pub fn backup_artifact(layout: &InstallLayout, name: &str) -> Result<()> {
    let from = layout.mods_dir().join(name);
    let to = layout.backup_dir().join(name);

    info!(from = %from.display(), to = %layout.backup_dir().display(), "moving artifact to backup");
    modsync_fs::io::move_file(&from, &to).map_err(|source| Error::BackupFailed {
        name: name.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn layout_with_dirs() -> (TempDir, InstallLayout) {
        let temp = TempDir::new().unwrap();
        let layout = InstallLayout::from_install_dir(temp.path());
        fs::create_dir_all(layout.backup_dir()).unwrap();
        (temp, layout)
    }

    #[test]
    fn test_backup_moves_file_unchanged() {
        let (_temp, layout) = layout_with_dirs();
        fs::write(layout.mods_dir().join("old.jar"), b"old contents").unwrap();

        backup_artifact(&layout, "old.jar").unwrap();

        assert!(!layout.mods_dir().join("old.jar").exists());
        assert_eq!(
            fs::read(layout.backup_dir().join("old.jar")).unwrap(),
            b"old contents"
        );
    }

    #[test]
    fn test_backup_missing_source_fails_with_name() {
        let (_temp, layout) = layout_with_dirs();

        let err = backup_artifact(&layout, "ghost.jar").unwrap_err();

        assert!(matches!(err, Error::BackupFailed { ref name, .. } if name == "ghost.jar"));
    }
}
