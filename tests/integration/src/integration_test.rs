//! End-to-end integration test for the vertical slice
//!
//! This test exercises the complete flow: layout -> directory source ->
//! plan -> sync -> rerun.

use modsync_core::{Decision, DirectorySource, SyncEngine, SyncPolicy};
use modsync_fs::{InstallLayout, ModsPath};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A server directory next to an install root, both inside one temp dir
fn setup_workspace() -> (TempDir, InstallLayout) {
    let temp = TempDir::new().unwrap();
    let server = temp.path().join("server");
    fs::create_dir(&server).unwrap();
    fs::write(server.join("fabric-api.jar"), vec![1u8; 400]).unwrap();
    fs::write(server.join("sodium.jar"), vec![2u8; 250]).unwrap();
    fs::write(server.join("lithium.jar"), vec![3u8; 120]).unwrap();
    fs::write(server.join("README.txt"), "not a mod").unwrap();

    let layout = InstallLayout::from_install_dir(temp.path().join(ModsPath::DotInstallDir));
    let mods = layout.mods_dir();
    fs::create_dir_all(mods).unwrap();
    fs::write(mods.join("fabric-api.jar"), vec![9u8; 400]).unwrap();
    fs::write(mods.join("sodium.jar"), vec![9u8; 200]).unwrap();
    fs::write(mods.join("optifine.jar"), vec![9u8; 80]).unwrap();
    fs::write(mods.join("options.txt"), "local settings").unwrap();

    (temp, layout)
}

fn names_in(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[tokio::test(flavor = "multi_thread")]
async fn test_end_to_end_flow() {
    let (temp, layout) = setup_workspace();
    let source = DirectorySource::new(temp.path().join("server"));
    let engine = SyncEngine::new(layout.clone());

    // 1. Plan first
    let plan = engine.plan(&source, SyncPolicy::default()).await.unwrap();
    assert_eq!(plan.decision("fabric-api.jar"), Some(Decision::Skip));
    assert_eq!(plan.decision("sodium.jar"), Some(Decision::ReplaceWithBackup));
    assert_eq!(plan.decision("lithium.jar"), Some(Decision::WriteNew));
    assert_eq!(plan.decision("optifine.jar"), Some(Decision::BackupOrphan));
    assert_eq!(plan.decision("README.txt"), None);
    assert_eq!(plan.decision("options.txt"), None);
    assert!(!layout.backup_dir().exists());

    // 2. Apply
    let report = engine.sync(&source, SyncPolicy::default()).await.unwrap();
    assert_eq!(report.written, vec!["lithium.jar"]);
    assert_eq!(report.replaced, vec!["sodium.jar"]);
    assert_eq!(report.skipped, vec!["fabric-api.jar"]);
    assert_eq!(report.backed_up, vec!["optifine.jar"]);

    // 3. Disk state
    assert_eq!(
        names_in(layout.mods_dir()),
        vec!["fabric-api.jar", "lithium.jar", "options.txt", "sodium.jar"]
    );
    assert_eq!(
        names_in(layout.backup_dir()),
        vec!["optifine.jar", "sodium.jar"]
    );
    assert_eq!(
        fs::read(layout.mods_dir().join("sodium.jar")).unwrap(),
        vec![2u8; 250]
    );
    assert_eq!(
        fs::read(layout.backup_dir().join("sodium.jar")).unwrap(),
        vec![9u8; 200]
    );
    // Size match keeps local bytes
    assert_eq!(
        fs::read(layout.mods_dir().join("fabric-api.jar")).unwrap(),
        vec![9u8; 400]
    );

    // 4. Rerun converges
    let plan = engine.plan(&source, SyncPolicy::default()).await.unwrap();
    assert!(plan.is_noop());
    let report = engine.sync(&source, SyncPolicy::default()).await.unwrap();
    assert!(report.is_unchanged());
}
