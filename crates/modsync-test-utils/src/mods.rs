//! [`TestModsDir`] builder for sync scenarios.

use std::fs;
use std::path::Path;

use modsync_fs::InstallLayout;
use tempfile::TempDir;

/// A temporary install root with helpers for seeding and inspecting the mods
/// and backup directories.
///
/// # Example
///
/// ```rust,no_run
/// use modsync_test_utils::TestModsDir;
///
/// let dir = TestModsDir::new();
/// dir.write_mod("a.jar", 100);
/// dir.assert_mod_size("a.jar", 100);
/// ```
pub struct TestModsDir {
    temp_dir: TempDir,
    layout: InstallLayout,
}

impl Default for TestModsDir {
    fn default() -> Self {
        Self::new()
    }
}

impl TestModsDir {
    /// Create an install root. The mods directory is not created.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let layout = InstallLayout::from_install_dir(temp_dir.path().join(".minecraft"));
        Self { temp_dir, layout }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn layout(&self) -> &InstallLayout {
        &self.layout
    }

    /// Write `name` into the mods directory as `size` bytes of filler.
    pub fn write_mod(&self, name: &str, size: usize) {
        self.write_mod_bytes(name, &vec![b'l'; size]);
    }

    pub fn write_mod_bytes(&self, name: &str, content: &[u8]) {
        fs::create_dir_all(self.layout.mods_dir()).unwrap();
        fs::write(self.layout.mods_dir().join(name), content)
            .unwrap_or_else(|e| panic!("TestModsDir::write_mod: {name}: {e}"));
    }

    pub fn read_mod(&self, name: &str) -> Vec<u8> {
        fs::read(self.layout.mods_dir().join(name))
            .unwrap_or_else(|e| panic!("TestModsDir::read_mod: {name}: {e}"))
    }

    pub fn read_backup(&self, name: &str) -> Vec<u8> {
        fs::read(self.layout.backup_dir().join(name))
            .unwrap_or_else(|e| panic!("TestModsDir::read_backup: {name}: {e}"))
    }

    /// Sorted file names directly inside the mods directory.
    pub fn mod_names(&self) -> Vec<String> {
        file_names(self.layout.mods_dir())
    }

    /// Sorted file names inside the backup directory.
    pub fn backup_names(&self) -> Vec<String> {
        file_names(self.layout.backup_dir())
    }

    /// Assert that `name` is in the mods directory with `size` bytes.
    ///
    /// # Panics
    /// Panics with a descriptive message if the file is missing or sized
    /// differently.
    pub fn assert_mod_size(&self, name: &str, size: u64) {
        let path = self.layout.mods_dir().join(name);
        let metadata = fs::metadata(&path)
            .unwrap_or_else(|_| panic!("Expected mod to exist: {}", path.display()));
        assert_eq!(
            metadata.len(),
            size,
            "Unexpected size for {}",
            path.display()
        );
    }

    /// Assert that `name` is in the backup directory with `size` bytes.
    pub fn assert_backup_size(&self, name: &str, size: u64) {
        let path = self.layout.backup_dir().join(name);
        let metadata = fs::metadata(&path)
            .unwrap_or_else(|_| panic!("Expected backup to exist: {}", path.display()));
        assert_eq!(
            metadata.len(),
            size,
            "Unexpected size for {}",
            path.display()
        );
    }
}

fn file_names(dir: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut names: Vec<String> = entries
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
