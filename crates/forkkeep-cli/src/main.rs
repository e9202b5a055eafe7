//! forkkeep CLI
//!
//! Keeps a customized fork of an upstream project buildable and current.

mod cli;
mod commands;
mod error;

use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::{CliError, Result};
use forkkeep_core::ForkConfig;
use forkkeep_fs::NormalizedPath;
use forkkeep_git::Git2Repo;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| CliError::user(format!("Failed to set tracing subscriber: {e}")))?;
        tracing::debug!("Verbose mode enabled");
    }

    let Some(cmd) = cli.command else {
        println!("{} Fork maintenance CLI", "forkkeep".green().bold());
        println!();
        println!("Run {} for available commands.", "forkkeep --help".cyan());
        return Ok(());
    };

    let repo = resolve_repo(cli.repo)?;
    let config = load_config(&repo, cli.config.as_deref())?;
    execute_command(cmd, &repo, &config)
}

fn resolve_repo(repo: Option<PathBuf>) -> Result<PathBuf> {
    let path = match repo {
        Some(path) => path,
        None => std::env::current_dir()?,
    };
    let path = dunce::canonicalize(&path)
        .map_err(|e| CliError::user(format!("Cannot open repository {}: {e}", path.display())))?;

    // Commands may run from anywhere inside the working tree
    match Git2Repo::discover(&NormalizedPath::new(&path)) {
        Ok(git) => Ok(git.root().to_native()),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "No enclosing repository");
            Ok(path)
        }
    }
}

fn load_config(repo: &Path, explicit: Option<&Path>) -> Result<ForkConfig> {
    let config = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(CliError::user(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            ForkConfig::load_from(&NormalizedPath::new(path))?
        }
        None => ForkConfig::load(&NormalizedPath::new(repo))?,
    };
    tracing::debug!(?config, "Loaded configuration");
    Ok(config)
}

fn execute_command(cmd: Commands, repo: &Path, config: &ForkConfig) -> Result<()> {
    match cmd {
        Commands::Rewrite {
            root,
            dry_run,
            json,
        } => commands::run_rewrite(repo, config, root.as_deref(), dry_run, json),
        Commands::Diff { root } => commands::run_diff(repo, config, root.as_deref()),
        Commands::Upstream { json } => commands::run_upstream(repo, config, json),
    }
}
