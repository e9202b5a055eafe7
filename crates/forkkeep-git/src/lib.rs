//! Git abstraction for forkkeep
//!
//! The upstream synchronization pipeline only ever needs a handful of
//! version-control operations. They are expressed as the [`GitOps`] trait so
//! the pipeline can be driven against a real repository ([`Git2Repo`]) or an
//! in-memory double in tests.

pub mod error;
pub mod ops;
pub mod repository;

pub use error::{Error, Result};
pub use ops::GitOps;
pub use repository::Git2Repo;
