// src/exec/backend.rs

//! Pluggable command-execution abstraction.
//!
//! The runner talks to an [`Executor`] instead of spawning processes
//! itself. Production uses [`ShellExecutor`](super::ShellExecutor);
//! `--dry-run` swaps in [`DryRunExecutor`](super::DryRunExecutor); tests
//! can provide a recording implementation that never touches the system.

use std::fmt::Debug;

use crate::dag::ResolvedTarget;
use crate::errors::Result;

/// Trait abstracting how a resolved target's commands are executed.
///
/// Implementations run the target's commands front to back and return the
/// first hard failure. Whether a non-zero exit is a hard failure is up to
/// the implementation; the ignore-error marker only applies where commands
/// actually run.
pub trait Executor: Send + Sync + Debug {
    /// Execute all commands of `target`.
    fn execute(&self, target: &ResolvedTarget) -> Result<()>;
}
