//! Session configuration.

use macrodiff_query::diff::MAX_SUPPORTED_ORDER;
use serde::{Deserialize, Serialize};

/// What happens to the previous result when a query starts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputPolicy {
    /// Clear OUTPUT before running the query; a failed query leaves it empty.
    #[default]
    ClearBeforeQuery,
    /// Keep the previous OUTPUT until a query succeeds.
    ReplaceOnSuccess,
}

/// Configuration for a `Session`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Highest combination order any DIFF may use. Clamped to
    /// `1..=MAX_SUPPORTED_ORDER`.
    pub max_combo_cap: usize,
    pub output_policy: OutputPolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_combo_cap: MAX_SUPPORTED_ORDER,
            output_policy: OutputPolicy::default(),
        }
    }
}

impl SessionConfig {
    /// Sets the combination order cap.
    pub fn with_max_combo_cap(mut self, cap: usize) -> Self {
        self.max_combo_cap = cap;
        self
    }

    /// Sets the output policy.
    pub fn with_output_policy(mut self, policy: OutputPolicy) -> Self {
        self.output_policy = policy;
        self
    }

    /// Returns the cap actually applied to DIFF queries.
    pub fn effective_max_combo_cap(&self) -> usize {
        self.max_combo_cap.clamp(1, MAX_SUPPORTED_ORDER)
    }
}
