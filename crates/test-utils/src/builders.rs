#![allow(dead_code)]

use std::collections::BTreeMap;
use kiln::config::{Command, Manifest, TargetConfig, TriggerKind};

/// Builder for `Manifest` to simplify test setup.
pub struct ManifestBuilder {
    targets: BTreeMap<String, TargetConfig>,
}

impl ManifestBuilder {
    pub fn new() -> Self {
        Self {
            targets: BTreeMap::new(),
        }
    }

    pub fn with_target(mut self, name: &str, target: TargetConfig) -> Self {
        self.targets.insert(name.to_string(), target);
        self
    }

    pub fn build(self) -> Manifest {
        Manifest::from_targets(self.targets)
    }
}

impl Default for ManifestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `TargetConfig`.
pub struct TargetConfigBuilder {
    target: TargetConfig,
}

impl TargetConfigBuilder {
    pub fn new() -> Self {
        Self {
            target: TargetConfig::default(),
        }
    }

    pub fn kind(mut self, kind: TriggerKind) -> Self {
        self.target.kind = kind;
        self
    }

    pub fn depends_on(mut self, dep: &str) -> Self {
        self.target.depends_on.push(dep.to_string());
        self
    }

    pub fn command(mut self, raw: &str) -> Self {
        self.target.commands.push(Command::new(raw));
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.target
            .environment
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn build(self) -> TargetConfig {
        self.target
    }
}

impl Default for TargetConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
