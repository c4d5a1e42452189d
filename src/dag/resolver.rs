// src/dag/resolver.rs

//! Depth-first dependency resolution.
//!
//! Resolution walks each requested target's dependency tree before the
//! target itself, building a [`TargetChain`] in which dependencies always
//! precede their dependents. Targets reached more than once are added only
//! the first time; the first unresolvable reference aborts the whole
//! resolution.

use std::collections::HashSet;
use std::sync::Arc;

use crate::config::Manifest;
use crate::errors::{KilnError, Result};
use crate::logging::{noop_logger, Logger};

use super::chain::{ResolvedTarget, TargetChain};

/// Turns requested target names into a dependency-ordered [`TargetChain`].
#[derive(Debug)]
pub struct Resolver {
    log: Arc<dyn Logger>,
}

impl Resolver {
    pub fn new() -> Self {
        Self { log: noop_logger() }
    }

    /// Replace the logger used for resolution tracing.
    pub fn with_logger(mut self, log: Arc<dyn Logger>) -> Self {
        self.log = log;
        self
    }

    /// Resolve `requested` against `manifest`.
    ///
    /// Requested targets keep their relative order, except that each one is
    /// preceded by whichever of its dependencies are not in the chain yet.
    /// A name requested twice, or already pulled in as a dependency of an
    /// earlier target, is not added again.
    pub fn resolve(&self, manifest: &Manifest, requested: &[String]) -> Result<TargetChain> {
        let mut chain = TargetChain::new();
        let mut in_progress = HashSet::new();

        for name in requested {
            if chain.contains(name) {
                self.log
                    .debug(&format!("target '{name}' already in chain, skipping"));
                continue;
            }
            self.resolve_target(manifest, name, &mut chain, &mut in_progress)?;
        }

        Ok(chain)
    }

    fn resolve_target(
        &self,
        manifest: &Manifest,
        name: &str,
        chain: &mut TargetChain,
        in_progress: &mut HashSet<String>,
    ) -> Result<()> {
        let config = manifest.get(name).ok_or_else(|| KilnError::TargetNotFound {
            name: name.to_string(),
        })?;

        in_progress.insert(name.to_string());

        for dep in &config.depends_on {
            if dep == name {
                return Err(KilnError::SelfDependency {
                    name: name.to_string(),
                });
            }
            if chain.contains(dep) {
                continue;
            }
            // A dependency that is still being resolved further up the
            // stack closes a cycle.
            if in_progress.contains(dep) {
                return Err(KilnError::CyclicDependency { name: dep.clone() });
            }
            self.resolve_target(manifest, dep, chain, in_progress)
                .map_err(|err| KilnError::DependencyResolution {
                    name: dep.clone(),
                    source: Box::new(err),
                })?;
        }

        in_progress.remove(name);

        self.log.debug(&format!("resolved target '{name}'"));
        chain.push(ResolvedTarget {
            name: name.to_string(),
            config: config.clone(),
        });
        Ok(())
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}
