//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// forkkeep - Keep a customized fork consistent and in sync with its upstream
#[derive(Parser, Debug)]
#[command(name = "forkkeep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory to operate from; the enclosing git working tree is used when there is one
    /// (defaults to the current directory)
    #[arg(short = 'C', long = "repo", global = true, env = "FORKKEEP_REPO")]
    pub repo: Option<PathBuf>,

    /// Config file to use instead of <repo>/.forkkeep/config.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Rewrite fork-specific call sites in the configured source tree
    ///
    /// Files that need no change are left untouched, so running this
    /// twice reports nothing the second time.
    ///
    /// Examples:
    ///   forkkeep rewrite              # Rewrite the configured root
    ///   forkkeep rewrite --dry-run    # List files that would change
    ///   forkkeep rewrite --root src   # Rewrite a different subtree
    Rewrite {
        /// Directory to rewrite, relative to the repository root
        #[arg(long)]
        root: Option<String>,

        /// Preview changes without writing them
        #[arg(long)]
        dry_run: bool,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show the line changes a rewrite would make, without writing
    Diff {
        /// Directory to inspect, relative to the repository root
        #[arg(long)]
        root: Option<String>,
    },

    /// Fetch upstream and merge it into the integration branch
    ///
    /// Registers the upstream remote if it is missing. The merge only
    /// happens on the integration branch and always creates a merge commit.
    #[command(alias = "merge-upstream")]
    Upstream {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}
