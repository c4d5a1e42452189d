// src/exec/mod.rs

//! Command execution layer.
//!
//! This module runs the commands of a resolved target chain with
//! `std::process::Command`, one fresh shell per command.
//!
//! - [`backend`] defines the [`Executor`] trait the runner dispatches to.
//! - [`shell`] is the production executor (system shell).
//! - [`dry_run`] logs commands instead of running them.
//! - [`runner`] walks the chain and applies the per-target eligibility
//!   checks before dispatching.

pub mod backend;
pub mod dry_run;
pub mod runner;
pub mod shell;

pub use backend::Executor;
pub use dry_run::DryRunExecutor;
pub use runner::Runner;
pub use shell::{ShellExecutor, DEFAULT_SHELL};
