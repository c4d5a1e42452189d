// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod logging;

use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;

use crate::cli::CliArgs;
use crate::config::load_manifest;
use crate::dag::Resolver;
use crate::errors::{KilnError, Result};
use crate::exec::{DryRunExecutor, Executor, Runner, ShellExecutor};
use crate::logging::{Logger, TracingLogger};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - manifest loading
/// - dependency resolution
/// - the runner with either the shell or the dry-run executor
///
/// Programmatic callers can construct [`CliArgs`] by hand; the same
/// no-targets check applies to them, since `clap` only guards the binary.
pub fn run(args: CliArgs) -> Result<()> {
    if args.targets.is_empty() {
        return Err(KilnError::NoTargets);
    }

    let manifest_path = PathBuf::from(&args.file);
    let manifest = load_manifest(&manifest_path)?;
    debug!(path = ?manifest_path, targets = manifest.len(), "manifest loaded");

    let log: Arc<dyn Logger> = Arc::new(TracingLogger);

    let resolver = Resolver::new().with_logger(Arc::clone(&log));
    let chain = resolver.resolve(&manifest, &args.targets)?;
    debug!(chain = ?chain.names(), "target chain resolved");

    let executor: Box<dyn Executor> = if args.dry_run {
        Box::new(DryRunExecutor::new(Arc::clone(&log)))
    } else {
        Box::new(ShellExecutor::new().with_logger(Arc::clone(&log)))
    };

    let runner = Runner::new()
        .with_executor(executor)
        .with_logger(Arc::clone(&log));
    runner.run(&chain)
}
