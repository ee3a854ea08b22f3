//! modsync CLI
//!
//! The command-line interface for syncing a local mods directory with a
//! server's mod set.

mod cli;
mod commands;
mod error;
mod progress;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use commands::SyncArgs;
use error::Result;
use modsync_core::SyncPolicy;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        if tracing::subscriber::set_global_default(subscriber).is_ok() {
            tracing::debug!("Verbose mode enabled");
        }
    }

    match cli.command {
        Some(cmd) => execute_command(cmd).await,
        None => {
            // No command provided - show help hint
            println!("{} mod synchronizer", "modsync".green().bold());
            println!();
            println!("Run {} for available commands.", "modsync --help".cyan());
            Ok(())
        }
    }
}

async fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Sync {
            server_dir,
            install_dir,
            force,
            keep_existing,
            dry_run,
            json,
        } => {
            let args = SyncArgs {
                server_dir,
                install_dir,
                policy: SyncPolicy::new(force, keep_existing),
                dry_run,
                json,
            };
            commands::run_sync(&args).await
        }
        Commands::Paths { install_dir } => commands::run_paths(install_dir.as_deref()),
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_cli_error_user() {
        let error = crate::error::CliError::user("test error");
        assert_eq!(format!("{}", error), "test error");
    }
}
