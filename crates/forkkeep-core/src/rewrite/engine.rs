//! Applies a [`RewriteRule`] across a source tree

use serde::Serialize;

use forkkeep_fs::{ExtensionFilter, FileFilter, NormalizedPath, eligible_files, io};

use super::RewriteRule;
use crate::Result;

/// Summary of a rewrite run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RewriteReport {
    /// Number of eligible files inspected
    pub scanned: usize,
    /// Files whose content changed, in visit order
    pub changed: Vec<NormalizedPath>,
    /// Whether writes were suppressed
    pub dry_run: bool,
}

impl RewriteReport {
    pub fn is_unchanged(&self) -> bool {
        self.changed.is_empty()
    }
}

/// Rewrites every eligible file beneath a root directory in place.
///
/// Each eligible file is read whole, transformed with the rule and written
/// back only if the result differs byte-for-byte. Untouched files keep their
/// modification time, so a converted tree produces no version-control diff
/// on a second run.
///
/// The first read or write failure aborts the run. Files rewritten before the
/// failure stay rewritten.
pub struct RewriteEngine<F = ExtensionFilter> {
    root: NormalizedPath,
    rule: RewriteRule,
    filter: F,
    dry_run: bool,
}

impl<F: FileFilter> RewriteEngine<F> {
    pub fn new(root: NormalizedPath, rule: RewriteRule, filter: F) -> Self {
        Self {
            root,
            rule,
            filter,
            dry_run: false,
        }
    }

    /// Report what would change without writing anything.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    pub fn rule(&self) -> &RewriteRule {
        &self.rule
    }

    /// Run the rewrite, calling `on_change` for each changed file as soon as
    /// it has been written.
    pub fn run(&self, mut on_change: impl FnMut(&NormalizedPath)) -> Result<RewriteReport> {
        tracing::debug!(
            root = %self.root,
            pattern = self.rule.pattern(),
            replacement = self.rule.replacement(),
            "Starting rewrite"
        );
        let files = eligible_files(&self.root, &self.filter)?;
        let mut report = RewriteReport {
            dry_run: self.dry_run,
            ..Default::default()
        };

        for path in files {
            report.scanned += 1;

            let content = io::read_text(&path)?;
            let (rewritten, changed) = self.rule.apply(&content);
            if !changed {
                tracing::trace!(path = %path, "No matches");
                continue;
            }

            if !self.dry_run {
                io::write_text(&path, &rewritten)?;
            }
            tracing::debug!(path = %path, dry_run = self.dry_run, "Rewrote file");

            on_change(&path);
            report.changed.push(path);
        }

        tracing::info!(
            root = %self.root,
            scanned = report.scanned,
            changed = report.changed.len(),
            "Rewrite finished"
        );
        Ok(report)
    }
}
