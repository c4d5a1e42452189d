// src/dag/chain.rs

//! Ordered, duplicate-free execution chain.

use crate::config::TargetConfig;

/// A target admitted to the chain, paired with its manifest entry.
#[derive(Debug, Clone)]
pub struct ResolvedTarget {
    pub name: String,
    pub config: TargetConfig,
}

/// Dependency-ordered list of targets produced by resolution.
///
/// Every target appears after all of its dependencies, and at most once no
/// matter how many paths lead to it. The runner walks the chain front to
/// back.
#[derive(Debug, Clone, Default)]
pub struct TargetChain {
    targets: Vec<ResolvedTarget>,
}

impl TargetChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `name` is already part of the chain.
    pub fn contains(&self, name: &str) -> bool {
        self.targets.iter().any(|t| t.name == name)
    }

    pub(crate) fn push(&mut self, target: ResolvedTarget) {
        self.targets.push(target);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResolvedTarget> {
        self.targets.iter()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Target names in chain order.
    pub fn names(&self) -> Vec<&str> {
        self.targets.iter().map(|t| t.name.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a TargetChain {
    type Item = &'a ResolvedTarget;
    type IntoIter = std::slice::Iter<'a, ResolvedTarget>;

    fn into_iter(self) -> Self::IntoIter {
        self.targets.iter()
    }
}
