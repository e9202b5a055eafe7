//! Fork maintenance engines
//!
//! This crate implements the two one-shot operations forkkeep performs on a
//! customized fork of an upstream project:
//!
//! - **Rewrite**: apply a single fixed, whole-identifier substitution to every
//!   eligible file beneath a source root ([`RewriteEngine`]).
//! - **Upstream sync**: register the upstream remote if needed, fetch its
//!   branch and, only on the integration branch, stage a no-fast-forward merge
//!   and commit it with a fixed message ([`SyncOrchestrator`]).
//!
//! # Architecture
//!
//! ```text
//!          forkkeep-cli
//!               |
//!         forkkeep-core
//!           /        \
//!   forkkeep-fs   forkkeep-git
//! ```
//!
//! The two engines share nothing but [`ForkConfig`], which supplies their
//! fixed parameters.

pub mod config;
pub mod error;
pub mod rewrite;
pub mod sync;

pub use config::{ForkConfig, RewriteConfig, UpstreamConfig};
pub use error::{Error, Result};
pub use rewrite::{RewriteEngine, RewriteReport, RewriteRule};
pub use sync::{
    MergeFailureKind, RemoteSpec, RemoteStatus, Stage, SyncOrchestrator, SyncOutcome, SyncReport,
};
