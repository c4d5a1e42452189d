// src/exec/dry_run.rs

//! Dry-run [`Executor`]: print instead of execute.

use std::sync::Arc;

use crate::dag::ResolvedTarget;
use crate::errors::Result;
use crate::logging::Logger;

use super::backend::Executor;

/// Logs every command it would run, in order, without running any of them.
///
/// Eligibility checks still happen in the runner, so a dry run shows
/// exactly the commands a real run would execute, with the ignore-error
/// marker already stripped.
#[derive(Debug)]
pub struct DryRunExecutor {
    log: Arc<dyn Logger>,
}

impl DryRunExecutor {
    pub fn new(log: Arc<dyn Logger>) -> Self {
        Self { log }
    }
}

impl Executor for DryRunExecutor {
    fn execute(&self, target: &ResolvedTarget) -> Result<()> {
        for cmd in &target.config.commands {
            self.log.info(cmd.text());
        }
        Ok(())
    }
}
