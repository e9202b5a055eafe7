//! Tree-scoped pattern rewriting
//!
//! A [`RewriteRule`] is a pure text transform; the [`RewriteEngine`] applies it
//! to every eligible file beneath a root and writes back only the files whose
//! content actually changed.

mod engine;
mod rule;

pub use engine::{RewriteEngine, RewriteReport};
pub use rule::{DEFAULT_PATTERN, DEFAULT_REPLACEMENT, RewriteRule};
