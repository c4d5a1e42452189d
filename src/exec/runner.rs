// src/exec/runner.rs

//! Chain runner: walks resolved targets in order and decides eligibility.

use std::path::Path;
use std::sync::Arc;

use crate::config::TriggerKind;
use crate::dag::{ResolvedTarget, TargetChain};
use crate::errors::{KilnError, Result};
use crate::fs::{FileSystem, PathKind, RealFileSystem};
use crate::logging::{noop_logger, Logger};

use super::backend::Executor;
use super::shell::ShellExecutor;

/// Executes a [`TargetChain`] front to back.
///
/// Before handing a target to the executor, the runner checks the target's
/// trigger kind: `file` and `directory` targets are skipped when a matching
/// entry already exists at the path named by the target, `virtual` targets
/// always run. A skipped target counts as satisfied, so later targets in
/// the chain still run. The first failure aborts the rest of the chain.
#[derive(Debug)]
pub struct Runner {
    executor: Box<dyn Executor>,
    fs: Arc<dyn FileSystem>,
    log: Arc<dyn Logger>,
}

impl Runner {
    /// Runner with production defaults: [`ShellExecutor`], the real
    /// filesystem and no logging.
    pub fn new() -> Self {
        Self {
            executor: Box::new(ShellExecutor::new()),
            fs: Arc::new(RealFileSystem),
            log: noop_logger(),
        }
    }

    /// Replace the executor commands are dispatched to.
    pub fn with_executor(mut self, executor: Box<dyn Executor>) -> Self {
        self.executor = executor;
        self
    }

    /// Replace the filesystem used for eligibility probes.
    pub fn with_file_system(mut self, fs: Arc<dyn FileSystem>) -> Self {
        self.fs = fs;
        self
    }

    /// Replace the logger used for execution tracing.
    pub fn with_logger(mut self, log: Arc<dyn Logger>) -> Self {
        self.log = log;
        self
    }

    /// Run every eligible target in `chain`, in chain order.
    pub fn run(&self, chain: &TargetChain) -> Result<()> {
        self.log
            .debug(&format!("executing target chain {:?}", chain.names()));
        for target in chain {
            self.log
                .debug(&format!("executing target '{}'", target.name));
            self.run_target(target)?;
        }
        Ok(())
    }

    fn run_target(&self, target: &ResolvedTarget) -> Result<()> {
        match &target.config.kind {
            TriggerKind::Virtual => {}
            TriggerKind::File => {
                if self.probe(target)? == Some(PathKind::File) {
                    self.log.debug(&format!(
                        "target file '{}' already exists, skipping",
                        target.name
                    ));
                    return Ok(());
                }
            }
            TriggerKind::Directory => {
                if self.probe(target)? == Some(PathKind::Directory) {
                    self.log.debug(&format!(
                        "target directory '{}' already exists, skipping",
                        target.name
                    ));
                    return Ok(());
                }
            }
            TriggerKind::Other(kind) => {
                return Err(KilnError::UnknownTargetType {
                    name: target.name.clone(),
                    kind: kind.clone(),
                });
            }
        }

        self.executor.execute(target)
    }

    /// Stat the path named by the target itself.
    fn probe(&self, target: &ResolvedTarget) -> Result<Option<PathKind>> {
        self.fs
            .path_kind(Path::new(&target.name))
            .map_err(|err| KilnError::Stat {
                name: target.name.clone(),
                source: err,
            })
    }
}

impl Default for Runner {
    fn default() -> Self {
        Self::new()
    }
}
