use std::sync::{Arc, Mutex};

use kiln::logging::Logger;

/// A `Logger` that records every message it receives.
///
/// Dry-run assertions read `infos()`; skip/trace assertions read
/// `debugs()`. `Clone` shares the underlying buffers.
#[derive(Debug, Clone, Default)]
pub struct RecordingLogger {
    infos: Arc<Mutex<Vec<String>>>,
    debugs: Arc<Mutex<Vec<String>>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn infos(&self) -> Vec<String> {
        self.infos.lock().unwrap().clone()
    }

    pub fn debugs(&self) -> Vec<String> {
        self.debugs.lock().unwrap().clone()
    }
}

impl Logger for RecordingLogger {
    fn info(&self, msg: &str) {
        self.infos.lock().unwrap().push(msg.to_string());
    }

    fn debug(&self, msg: &str) {
        self.debugs.lock().unwrap().push(msg.to_string());
    }
}
