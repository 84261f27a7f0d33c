//! Traversal limits for the validator walk.

use serde::{Deserialize, Serialize};

/// Hard caps on how much of the syntax tree is walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationLimits {
    pub max_depth: usize,
    pub max_nodes: usize,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            max_depth: 64,
            max_nodes: 10_000,
        }
    }
}

/// Running node count against the limits. Once exhausted, every further
/// `enter` is refused.
#[derive(Debug)]
pub(super) struct Budget {
    limits: ValidationLimits,
    visited: usize,
    exhausted: bool,
}

pub(super) enum Entry {
    Allowed,
    /// The limit was hit by this node; report once.
    JustExhausted,
    Refused,
}

impl Budget {
    pub(super) fn new(limits: &ValidationLimits) -> Self {
        Self {
            limits: *limits,
            visited: 0,
            exhausted: false,
        }
    }

    pub(super) fn enter(&mut self, depth: usize) -> Entry {
        if self.exhausted {
            return Entry::Refused;
        }
        self.visited += 1;
        if depth > self.limits.max_depth || self.visited > self.limits.max_nodes {
            self.exhausted = true;
            return Entry::JustExhausted;
        }
        Entry::Allowed
    }

    pub(super) fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub(super) fn limits(&self) -> &ValidationLimits {
        &self.limits
    }
}
