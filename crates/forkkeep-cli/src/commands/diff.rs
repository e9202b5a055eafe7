//! The diff command
//!
//! A dry-run rewrite that prints the changed lines of every file it would
//! touch.

use std::path::Path;

use colored::Colorize;
use similar::{ChangeTag, TextDiff};

use forkkeep_core::ForkConfig;
use forkkeep_fs::{NormalizedPath, io};

use super::rewrite::display;
use crate::error::Result;

/// Run the diff command
pub fn run_diff(path: &Path, config: &ForkConfig, root: Option<&str>) -> Result<()> {
    let repo_root = NormalizedPath::new(path);
    let mut config = config.clone();
    if let Some(root) = root {
        config.rewrite.root = root.to_string();
    }

    let engine = config.rewrite_engine(&repo_root)?.dry_run(true);
    let mut pending = Vec::new();
    let report = engine.run(|changed| pending.push(changed.clone()))?;

    for file in &pending {
        let before = io::read_text(file).map_err(forkkeep_core::Error::from)?;
        let (after, _) = engine.rule().apply(&before);

        println!("{}", format!("--- {}", display(&repo_root, file)).bold());
        println!("{}", format!("+++ {}", display(&repo_root, file)).bold());
        print_changes(&before, &after);
    }

    if report.is_unchanged() {
        println!(
            "{} All {} eligible files already up to date",
            "OK".green().bold(),
            report.scanned
        );
    } else {
        println!(
            "{} {} of {} eligible files would change",
            "=>".blue().bold(),
            report.changed.len(),
            report.scanned
        );
    }
    Ok(())
}

fn print_changes(before: &str, after: &str) {
    let diff = TextDiff::from_lines(before, after);
    for change in diff.iter_all_changes() {
        let line = change.value().trim_end_matches(['\r', '\n']);
        match change.tag() {
            ChangeTag::Delete => {
                let number = change.old_index().map_or(0, |i| i + 1);
                println!("{}", format!("{number:>5} - {line}").red());
            }
            ChangeTag::Insert => {
                let number = change.new_index().map_or(0, |i| i + 1);
                println!("{}", format!("{number:>5} + {line}").green());
            }
            ChangeTag::Equal => {}
        }
    }
}
