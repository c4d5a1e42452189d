// src/dag/mod.rs

//! Target graph resolution.
//!
//! - [`chain`] holds the ordered, duplicate-free execution chain.
//! - [`resolver`] walks the manifest depth-first to build that chain from
//!   the requested target names.

pub mod chain;
pub mod resolver;

pub use chain::{ResolvedTarget, TargetChain};
pub use resolver::Resolver;
