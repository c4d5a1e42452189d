use std::io;
use std::sync::{Arc, Mutex};

use kiln::dag::ResolvedTarget;
use kiln::errors::{CommandError, KilnError, Result};
use kiln::exec::Executor;

/// A fake executor that:
/// - records the names of targets it was asked to execute, in order
/// - succeeds, unless configured to fail on a specific target.
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    executed: Arc<Mutex<Vec<String>>>,
    fail_on: Option<String>,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail (before recording) when asked to execute `name`.
    pub fn fail_on(mut self, name: &str) -> Self {
        self.fail_on = Some(name.to_string());
        self
    }

    /// Shared handle to the execution record.
    pub fn executed(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.executed)
    }

    /// Names executed so far, in order.
    pub fn executed_names(&self) -> Vec<String> {
        self.executed.lock().unwrap().clone()
    }
}

impl Executor for RecordingExecutor {
    fn execute(&self, target: &ResolvedTarget) -> Result<()> {
        if self.fail_on.as_deref() == Some(target.name.as_str()) {
            return Err(KilnError::CommandFailed {
                target: target.name.clone(),
                index: 0,
                source: CommandError::Spawn(io::Error::other("injected failure")),
            });
        }

        let mut guard = self.executed.lock().unwrap();
        guard.push(target.name.clone());
        Ok(())
    }
}
