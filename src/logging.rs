// src/logging.rs

//! Logging for kiln: global `tracing` setup plus the injected [`Logger`]
//! capability the core components consume.
//!
//! Priority for determining the log level:
//! 1. `--debug` CLI flag (if set)
//! 2. `KILN_LOG` environment variable (e.g. "info", "debug")
//! 3. default to `info`
//!
//! Logs are sent to STDERR so that stdout stays reserved for the output of
//! the target commands themselves.

use std::fmt::Debug;
use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::fmt;

/// Initialise global logging subscriber.
///
/// Safe to call once at startup.
pub fn init_logging(debug: bool) -> Result<()> {
    let level = if debug {
        tracing::Level::DEBUG
    } else {
        std::env::var("KILN_LOG")
            .ok()
            .and_then(|s| parse_level_str(&s))
            .unwrap_or(tracing::Level::INFO)
    };

    // Send logs to stderr; keep stdout free for command output.
    fmt()
        .with_max_level(level)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

fn parse_level_str(s: &str) -> Option<tracing::Level> {
    match s.trim().to_lowercase().as_str() {
        "error" => Some(tracing::Level::ERROR),
        "warn" | "warning" => Some(tracing::Level::WARN),
        "info" => Some(tracing::Level::INFO),
        "debug" => Some(tracing::Level::DEBUG),
        "trace" => Some(tracing::Level::TRACE),
        _ => None,
    }
}

/// Leveled info/debug sink injected into the resolver, runner and executors
/// at construction.
///
/// Core components hold an `Arc<dyn Logger>` instead of talking to the
/// global subscriber directly, so tests can swap in a recording
/// implementation the same way they swap the executor or the filesystem.
pub trait Logger: Send + Sync + Debug {
    fn info(&self, msg: &str);
    fn debug(&self, msg: &str);
}

/// Default [`Logger`]: discards everything.
#[derive(Debug, Clone, Default)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn info(&self, _msg: &str) {}
    fn debug(&self, _msg: &str) {}
}

/// Production [`Logger`]: forwards to the global `tracing` subscriber, so
/// visibility follows [`init_logging`]'s level selection.
#[derive(Debug, Clone, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }
}

/// Convenience for the common "no logger supplied" default.
pub fn noop_logger() -> Arc<dyn Logger> {
    Arc::new(NoopLogger)
}
