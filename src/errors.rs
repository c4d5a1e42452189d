// src/errors.rs

//! Crate-wide error types.
//!
//! Every failure the loader, resolver, runner and executors can produce is
//! a variant of [`KilnError`]. Nothing is retried or recovered internally:
//! the first error aborts the run and travels up to `main` with the context
//! accumulated along the way (target, dependency and command identifying
//! information).

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, KilnError>;

#[derive(Debug, Error)]
pub enum KilnError {
    /// Usage error: the entry point was invoked without any target names.
    #[error("no targets given")]
    NoTargets,

    #[error("failed to read manifest at {path:?}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The manifest's template stage failed, before any TOML parsing.
    #[error("failed to render manifest at {path:?}")]
    ManifestRender {
        path: PathBuf,
        #[source]
        source: minijinja::Error,
    },

    #[error("failed to parse manifest at {path:?}")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("target '{name}' not found")]
    TargetNotFound { name: String },

    #[error("target '{name}' cannot depend on itself")]
    SelfDependency { name: String },

    #[error("cyclic dependency involving target '{name}'")]
    CyclicDependency { name: String },

    /// Wraps whatever went wrong while resolving a dependency, so nested
    /// failures surface with the full dependency path.
    #[error("failed to resolve dependency '{name}'")]
    DependencyResolution {
        name: String,
        #[source]
        source: Box<KilnError>,
    },

    #[error("unknown type '{kind}' for target '{name}'")]
    UnknownTargetType { name: String, kind: String },

    /// The eligibility probe for a `file`/`directory` target failed for a
    /// reason other than the path not existing.
    #[error("failed to stat '{name}'")]
    Stat {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("command {index} of target '{target}' failed")]
    CommandFailed {
        target: String,
        index: usize,
        #[source]
        source: CommandError,
    },
}

/// Why a single command of a target failed.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The command ran and exited unsuccessfully. This is the only failure
    /// the `?` ignore-error marker can swallow.
    #[error("command exited with {status}")]
    Exit { status: ExitStatus },

    /// The shell process could not be launched at all (missing shell binary,
    /// I/O failure). Never ignorable, marker or not.
    #[error("failed to launch shell")]
    Spawn(#[source] io::Error),
}
