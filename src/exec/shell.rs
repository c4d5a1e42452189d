// src/exec/shell.rs

//! Shell-backed [`Executor`] implementation.

use std::path::PathBuf;
use std::process::{Command as ProcessCommand, Stdio};
use std::sync::Arc;

use crate::dag::ResolvedTarget;
use crate::errors::{CommandError, KilnError, Result};
use crate::logging::{noop_logger, Logger};

use super::backend::Executor;

/// Shell used when none is configured.
pub const DEFAULT_SHELL: &str = "/bin/sh";

/// Runs each command of a target in a fresh shell.
///
/// Commands inherit the kiln process environment with the target's
/// declared variables layered on top, and write to kiln's stdout/stderr.
/// Their stdin is the null device, so a command that reads input sees
/// immediate EOF instead of blocking on kiln's own stdin. Each command
/// gets its own shell, so state such as exported variables or a changed
/// working directory does not leak into the next command.
#[derive(Debug)]
pub struct ShellExecutor {
    shell: PathBuf,
    log: Arc<dyn Logger>,
}

impl ShellExecutor {
    pub fn new() -> Self {
        Self {
            shell: PathBuf::from(DEFAULT_SHELL),
            log: noop_logger(),
        }
    }

    /// Use `shell` instead of [`DEFAULT_SHELL`].
    pub fn with_shell(mut self, shell: impl Into<PathBuf>) -> Self {
        self.shell = shell.into();
        self
    }

    /// Replace the logger used for execution tracing.
    pub fn with_logger(mut self, log: Arc<dyn Logger>) -> Self {
        self.log = log;
        self
    }
}

impl Default for ShellExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl Executor for ShellExecutor {
    fn execute(&self, target: &ResolvedTarget) -> Result<()> {
        for (index, cmd) in target.config.commands.iter().enumerate() {
            self.log
                .debug(&format!("running command {index} of target '{}'", target.name));

            // A fresh shell per command; declared variables override
            // inherited ones with the same name.
            let status = ProcessCommand::new(&self.shell)
                .arg("-c")
                .arg(cmd.text())
                .envs(&target.config.environment)
                .stdin(Stdio::null())
                .status()
                .map_err(|err| KilnError::CommandFailed {
                    target: target.name.clone(),
                    index,
                    source: CommandError::Spawn(err),
                })?;

            if !status.success() {
                if cmd.ignores_error() {
                    self.log.debug(&format!(
                        "ignoring failure of command {index} of target '{}' ({status})",
                        target.name
                    ));
                    continue;
                }
                return Err(KilnError::CommandFailed {
                    target: target.name.clone(),
                    index,
                    source: CommandError::Exit { status },
                });
            }
        }
        Ok(())
    }
}
