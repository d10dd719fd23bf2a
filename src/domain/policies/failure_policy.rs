//! Failure Policy
//!
//! Decides what happens when a single source fails to compile. The policy
//! is chosen by the caller (CLI flag, config, env); the pipeline never
//! exits the process itself.

use serde::{Deserialize, Serialize};

/// Reaction to a compile failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Stop at the first failure and return it
    #[default]
    FailFast,
    /// Report the failure and keep going
    Continue,
}

impl FailurePolicy {
    /// Whether a failure should abort the current build or watch
    pub fn aborts(&self) -> bool {
        matches!(self, FailurePolicy::FailFast)
    }

    /// Parse a loose user-supplied value (env vars)
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "fail-fast" | "failfast" | "fast" | "abort" => Some(FailurePolicy::FailFast),
            "continue" | "keep-going" => Some(FailurePolicy::Continue),
            _ => None,
        }
    }
}
