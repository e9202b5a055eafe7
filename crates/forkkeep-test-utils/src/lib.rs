//! Shared test utilities for the forkkeep workspace.
//!
//! This crate provides standardised fixtures so crate test suites don't each
//! grow their own git plumbing. It is a dev-dependency only and never published.
//!
//! # Modules
//!
//! - [`git`]: git command helpers and the [`git::UpstreamFork`] fixture
//! - [`tree`]: [`tree::TestTree`] for source-tree rewrite scenarios

pub mod git;
pub mod tree;
