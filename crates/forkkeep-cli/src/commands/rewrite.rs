//! The rewrite command

use std::path::Path;

use colored::Colorize;

use forkkeep_core::ForkConfig;
use forkkeep_fs::NormalizedPath;

use crate::error::Result;

/// Run the rewrite command.
///
/// Prints one `Updated:` line per rewritten file as it is written. With
/// `--json` only the final report is printed.
pub fn run_rewrite(
    path: &Path,
    config: &ForkConfig,
    root: Option<&str>,
    dry_run: bool,
    json: bool,
) -> Result<()> {
    let repo_root = NormalizedPath::new(path);
    let mut config = config.clone();
    if let Some(root) = root {
        config.rewrite.root = root.to_string();
    }

    let engine = config.rewrite_engine(&repo_root)?.dry_run(dry_run);

    if !json {
        println!(
            "{} Rewriting {}{}",
            "=>".blue().bold(),
            display(&repo_root, engine.root()).cyan(),
            if dry_run { " (dry run)" } else { "" }
        );
    }

    let label = if dry_run { "Would update:" } else { "Updated:" };
    let report = engine.run(|changed| {
        if !json {
            println!("{} {}", label, display(&repo_root, changed));
        }
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if report.is_unchanged() {
        println!(
            "{} All {} eligible files already up to date",
            "OK".green().bold(),
            report.scanned
        );
    } else {
        println!(
            "{} {} of {} eligible files {}",
            "OK".green().bold(),
            report.changed.len(),
            report.scanned,
            if dry_run { "would change" } else { "rewritten" }
        );
    }

    Ok(())
}

/// Path relative to the repository root when it lies beneath it.
pub(crate) fn display(repo_root: &NormalizedPath, path: &NormalizedPath) -> String {
    path.strip_prefix(repo_root)
        .map(|relative| relative.as_str().to_string())
        .unwrap_or_else(|| path.as_str().to_string())
}
