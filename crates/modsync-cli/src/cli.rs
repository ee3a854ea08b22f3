//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// modsync - Keep a local mods directory in step with a server's mod set
#[derive(Parser, Debug)]
#[command(name = "modsync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Synchronize the local mods directory with a server's mods
    ///
    /// Mods missing locally are copied in, mods whose size differs are
    /// replaced (the local copy is moved to mods/backup), and local mods the
    /// server does not have are moved to mods/backup.
    ///
    /// Examples:
    ///   modsync sync /mnt/server/mods              # Sync into the default install
    ///   modsync sync ./mods --install-dir ~/mc     # Sync into a custom install
    ///   modsync sync ./mods --keep-existing        # Never back up local-only mods
    ///   modsync sync ./mods --dry-run              # Preview without changing
    Sync {
        /// Directory holding the server's mod files
        server_dir: PathBuf,

        /// Install root to sync into instead of the platform default
        #[arg(long, env = "MODSYNC_INSTALL_DIR")]
        install_dir: Option<PathBuf>,

        /// Overwrite local mods even when their size matches
        #[arg(short, long)]
        force: bool,

        /// Keep local mods that are not on the server
        #[arg(short, long)]
        keep_existing: bool,

        /// Preview changes without applying them
        #[arg(long)]
        dry_run: bool,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show the install, mods and backup directories
    Paths {
        /// Install root to use instead of the platform default
        #[arg(long, env = "MODSYNC_INSTALL_DIR")]
        install_dir: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sync_flags() {
        let cli = Cli::try_parse_from([
            "modsync",
            "sync",
            "/srv/mods",
            "--force",
            "--keep-existing",
            "--dry-run",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Sync {
                server_dir,
                force,
                keep_existing,
                dry_run,
                json,
                ..
            }) => {
                assert_eq!(server_dir, PathBuf::from("/srv/mods"));
                assert!(force && keep_existing && dry_run);
                assert!(!json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_sync_requires_server_dir() {
        assert!(Cli::try_parse_from(["modsync", "sync"]).is_err());
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["modsync", "paths", "-v"]).unwrap();
        assert!(cli.verbose);
    }
}
