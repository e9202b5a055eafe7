//! The upstream command
//!
//! Drives the sync pipeline one stage at a time so progress can be printed
//! as each stage starts and ends.

use std::path::Path;

use colored::Colorize;

use forkkeep_core::{ForkConfig, RemoteStatus, Stage, SyncOrchestrator, SyncOutcome, SyncReport};
use forkkeep_fs::NormalizedPath;
use forkkeep_git::Git2Repo;

use crate::error::Result;

/// Run the upstream command.
///
/// Skipped and failed merges are reported and exit successfully. Only
/// failures before the merge stage return an error.
pub fn run_upstream(path: &Path, config: &ForkConfig, json: bool) -> Result<()> {
    let mut git = Git2Repo::open(NormalizedPath::new(path))?;
    let orchestrator = config.orchestrator();

    let mut stage = Stage::RemoteCheck;
    let report = loop {
        if !json {
            announce(&orchestrator, &stage);
        }
        let next = orchestrator.advance(&mut git, stage)?;
        if !json {
            conclude(&orchestrator, &next);
        }
        match next {
            Stage::Finished(report) => break report,
            next => stage = next,
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    tracing::debug!(?report, "Upstream sync finished");
    Ok(())
}

/// Print what the stage about to run is going to do.
fn announce(orchestrator: &SyncOrchestrator, stage: &Stage) {
    let remote = orchestrator.remote();
    match stage {
        Stage::Fetch { .. } => println!(
            "{} Fetching '{}'...",
            "=>".blue().bold(),
            remote.tracking_ref()
        ),
        Stage::MergeAndCommit { .. } => println!(
            "{} Merging '{}' into '{}'...",
            "=>".blue().bold(),
            remote.tracking_ref(),
            orchestrator.integration_branch()
        ),
        Stage::RemoteCheck | Stage::BranchGate { .. } | Stage::Finished(_) => {}
    }
}

/// Print the result of the stage that just ran.
fn conclude(orchestrator: &SyncOrchestrator, next: &Stage) {
    let remote = orchestrator.remote();
    match next {
        Stage::Fetch {
            remote: RemoteStatus::Added,
        } => println!(
            "{} Added '{}' remote ({})",
            "OK".green().bold(),
            remote.name,
            remote.url
        ),
        Stage::Fetch {
            remote: RemoteStatus::AlreadyPresent,
        } => println!("{} '{}' remote already exists.", "OK".green().bold(), remote.name),
        Stage::Finished(report) => print_outcome(report),
        Stage::RemoteCheck | Stage::BranchGate { .. } | Stage::MergeAndCommit { .. } => {}
    }
}

fn print_outcome(report: &SyncReport) {
    match &report.outcome {
        SyncOutcome::Merged { commit } => println!(
            "{} Merge completed with custom commit message. ({})",
            "OK".green().bold(),
            short(commit).yellow()
        ),
        SyncOutcome::Skipped { branch } => println!(
            "{} Current branch is '{}', skipping merge.",
            "SKIP".yellow().bold(),
            branch
        ),
        SyncOutcome::MergeFailed { diagnostic, .. } => {
            println!("{} Merge failed or nothing to merge.", "WARN".yellow().bold());
            println!("   {}", diagnostic);
        }
    }
}

fn short(commit: &str) -> &str {
    commit.get(..7).unwrap_or(commit)
}
