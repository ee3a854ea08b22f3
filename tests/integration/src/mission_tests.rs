//! Mission-based Integration Tests
//!
//! Each module covers one user-facing scenario of mod synchronization,
//! run through the library and through the compiled binary.

use modsync_core::{Error, Phase, SyncEngine, SyncEvent, SyncPolicy};
use modsync_test_utils::{MemorySource, RecordingObserver, TestModsDir};
use std::sync::Arc;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn engine_for(dir: &TestModsDir) -> (SyncEngine, Arc<RecordingObserver>) {
    let observer = Arc::new(RecordingObserver::new());
    let engine = SyncEngine::new(dir.layout().clone()).with_observer(observer.clone());
    (engine, observer)
}

// =============================================================================
// M1: First install
// =============================================================================

mod m1_first_install {
    use super::*;

    #[tokio::test(flavor = "multi_thread")]
    async fn m1_1_fresh_install_gets_every_mod() {
        let dir = TestModsDir::new();
        let source = MemorySource::new()
            .with_sized("a.jar", 10)
            .with_sized("b.jar", 20)
            .with_sized("c.jar", 30);
        let (engine, observer) = engine_for(&dir);

        let report = engine.sync(&source, SyncPolicy::default()).await.unwrap();

        assert_eq!(report.written, vec!["a.jar", "b.jar", "c.jar"]);
        assert_eq!(dir.mod_names(), vec!["a.jar", "b.jar", "c.jar"]);
        assert!(observer.backups().is_empty());
        assert_eq!(
            observer.progress(Phase::Write),
            vec![(1, 3), (2, 3), (3, 3)]
        );
    }

    #[tokio::test]
    async fn m1_2_server_without_mods_is_rejected() {
        let dir = TestModsDir::new();
        let (engine, _) = engine_for(&dir);

        let err = engine
            .sync(&MemorySource::new(), SyncPolicy::default())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::NoRemoteArtifacts));
        assert!(!dir.layout().mods_dir().exists());
    }
}

// =============================================================================
// M2: Server update
// =============================================================================

mod m2_server_update {
    use super::*;

    #[tokio::test(flavor = "multi_thread")]
    async fn m2_1_resized_mod_is_replaced_and_old_copy_kept() {
        let dir = TestModsDir::new();
        dir.write_mod("a.jar", 100);
        let source = MemorySource::new().with_sized("a.jar", 120);
        let (engine, observer) = engine_for(&dir);

        let report = engine.sync(&source, SyncPolicy::default()).await.unwrap();

        assert_eq!(report.replaced, vec!["a.jar"]);
        dir.assert_mod_size("a.jar", 120);
        dir.assert_backup_size("a.jar", 100);
        assert_eq!(observer.backups(), vec!["a.jar"]);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn m2_2_removed_mod_moves_to_backup() {
        let dir = TestModsDir::new();
        dir.write_mod("a.jar", 10);
        dir.write_mod("gone.jar", 10);
        let source = MemorySource::new().with_sized("a.jar", 10);
        let (engine, observer) = engine_for(&dir);

        let report = engine.sync(&source, SyncPolicy::default()).await.unwrap();

        assert_eq!(report.backed_up, vec!["gone.jar"]);
        assert_eq!(dir.mod_names(), vec!["a.jar"]);
        assert_eq!(dir.backup_names(), vec!["gone.jar"]);
        assert!(observer.events().iter().any(|e| matches!(
            e,
            SyncEvent::ProgressUpdated { phase: Phase::Backup, current: 1, total: 1 }
        )));
    }
}

// =============================================================================
// M3: Policies
// =============================================================================

mod m3_policies {
    use super::*;

    #[tokio::test(flavor = "multi_thread")]
    async fn m3_1_force_rewrites_matching_mods_without_backup() {
        let dir = TestModsDir::new();
        dir.write_mod("a.jar", 10);
        let source = MemorySource::new().with_sized("a.jar", 10);
        let (engine, _) = engine_for(&dir);

        let report = engine.sync(&source, SyncPolicy::new(true, false)).await.unwrap();

        assert_eq!(report.written, vec!["a.jar"]);
        assert_eq!(dir.read_mod("a.jar"), vec![b'r'; 10]);
        assert!(dir.backup_names().is_empty());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn m3_2_keep_existing_never_touches_local_only_mods() {
        let dir = TestModsDir::new();
        dir.write_mod("mine.jar", 5);
        let source = MemorySource::new().with_sized("a.jar", 10);
        let (engine, _) = engine_for(&dir);

        let report = engine.sync(&source, SyncPolicy::new(false, true)).await.unwrap();

        assert!(report.backed_up.is_empty());
        assert_eq!(dir.mod_names(), vec!["a.jar", "mine.jar"]);
    }
}

// =============================================================================
// M4: Recovery
// =============================================================================

mod m4_recovery {
    use super::*;

    #[tokio::test(flavor = "multi_thread")]
    async fn m4_1_failed_write_is_repaired_by_rerun() {
        let dir = TestModsDir::new();
        let failing = MemorySource::new().with_failing_write("a.jar", 10);
        let (engine, _) = engine_for(&dir);

        let err = engine.sync(&failing, SyncPolicy::default()).await.unwrap_err();
        assert!(matches!(err, Error::WriteFailed { .. }));

        let healthy = MemorySource::new().with_sized("a.jar", 10);
        engine.sync(&healthy, SyncPolicy::default()).await.unwrap();

        dir.assert_mod_size("a.jar", 10);
    }
}

// =============================================================================
// M5: Binary
// =============================================================================

mod m5_binary {
    use super::*;
    use assert_cmd::Command;
    use predicates::prelude::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn m5_1_binary_syncs_server_directory() {
        let server = TempDir::new().unwrap();
        fs::write(server.path().join("a.jar"), vec![0u8; 10]).unwrap();
        let dir = TestModsDir::new();
        dir.write_mod("old.jar", 3);

        let mut cmd = Command::cargo_bin("modsync").unwrap();
        cmd.env("NO_COLOR", "1")
            .arg("sync")
            .arg(server.path())
            .arg("--install-dir")
            .arg(dir.layout().install_dir())
            .arg("--json")
            .assert()
            .success()
            .stdout(predicate::str::contains("\"backed_up\""));

        assert_eq!(dir.mod_names(), vec!["a.jar"]);
        assert_eq!(dir.backup_names(), vec!["old.jar"]);
    }
}
