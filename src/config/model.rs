// src/config/model.rs

//! TOML-backed data model for the target manifest.
//!
//! A manifest is a top-level mapping from target name to target record:
//!
//! ```toml
//! [deps]
//! commands = ["cargo fetch"]
//!
//! [build]
//! dependsOn = ["deps"]
//! commands = ["cargo build", "?notify-send build-done"]
//!
//! [build.environment]
//! RUST_LOG = "info"
//! ```
//!
//! Field names follow the document convention (`type`, `dependsOn`,
//! `commands`, `environment`); every field is optional.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

/// Marker prefix that makes a command's non-zero exit status non-fatal.
pub const IGNORE_ERROR_PREFIX: char = '?';

/// A single shell command of a target.
///
/// The raw string may carry a leading [`IGNORE_ERROR_PREFIX`]; the marker
/// is not part of the executed text.
///
/// Example:
///
/// ```toml
/// commands = ["?echo \"this error will be ignored\" && exit 1"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Command(String);

impl Command {
    pub fn new(raw: impl Into<String>) -> Self {
        Command(raw.into())
    }

    /// True if a non-zero exit status of this command must not abort its
    /// target.
    pub fn ignores_error(&self) -> bool {
        self.0.starts_with(IGNORE_ERROR_PREFIX)
    }

    /// The command text to execute: the raw string with a single leading
    /// marker stripped.
    pub fn text(&self) -> &str {
        self.0.strip_prefix(IGNORE_ERROR_PREFIX).unwrap_or(&self.0)
    }
}

/// When a target's commands actually run.
///
/// Unrecognised spellings are kept verbatim; the runner rejects them with
/// an error naming the target that carried them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum TriggerKind {
    /// The target name matches nothing on the filesystem; always executed.
    /// This is the default.
    Virtual,
    /// The target name is a file path; executed only while no
    /// non-directory entry exists there.
    File,
    /// The target name is a directory path; executed only while no
    /// directory exists there.
    Directory,
    /// An unrecognised spelling, preserved for the runner's error.
    Other(String),
}

impl Default for TriggerKind {
    fn default() -> Self {
        TriggerKind::Virtual
    }
}

impl From<String> for TriggerKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "virtual" => TriggerKind::Virtual,
            "file" => TriggerKind::File,
            "directory" => TriggerKind::Directory,
            _ => TriggerKind::Other(s),
        }
    }
}

impl fmt::Display for TriggerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriggerKind::Virtual => f.write_str("virtual"),
            TriggerKind::File => f.write_str("file"),
            TriggerKind::Directory => f.write_str("directory"),
            TriggerKind::Other(s) => f.write_str(s),
        }
    }
}

/// One target record of the manifest.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TargetConfig {
    /// Trigger policy; `virtual` when absent.
    #[serde(rename = "type")]
    pub kind: TriggerKind,

    /// Names of targets that must be executed before this one.
    pub depends_on: Vec<String>,

    /// Commands executed for this target, each in its own subshell. A
    /// non-zero exit aborts the remaining commands unless the command is
    /// prefixed with `?`.
    pub commands: Vec<Command>,

    /// Extra environment entries for every command of this target. Sorted
    /// map, so emission order is deterministic; declared entries override
    /// inherited ones on key collision.
    pub environment: BTreeMap<String, String>,
}

/// A parsed manifest: immutable mapping from target name to definition.
///
/// Top-level tables are the target names, so path-like names only need
/// TOML key quoting (`["target/site"]`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    targets: BTreeMap<String, TargetConfig>,
}

impl Manifest {
    /// Build a manifest directly from a target mapping. This is how tests
    /// and embedding callers sidestep the TOML loader.
    pub fn from_targets(targets: BTreeMap<String, TargetConfig>) -> Self {
        Manifest { targets }
    }

    pub fn get(&self, name: &str) -> Option<&TargetConfig> {
        self.targets.get(name)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Target names in manifest (sorted) order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.targets.keys().map(|s| s.as_str())
    }
}
