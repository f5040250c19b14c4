//! Execution context for query execution.

use crate::diff::{MetricRegistry, MAX_SUPPORTED_ORDER};

/// Execution context: the compare-by metrics a DIFF may name and the highest
/// combination order a DIFF may request.
#[derive(Clone, Debug)]
pub struct ExecutionContext {
    metrics: MetricRegistry,
    max_combo_cap: usize,
}

impl ExecutionContext {
    /// Creates a context with the built-in metrics and the full order cap.
    pub fn new() -> Self {
        Self {
            metrics: MetricRegistry::with_builtins(),
            max_combo_cap: MAX_SUPPORTED_ORDER,
        }
    }

    /// Replaces the metric registry.
    pub fn with_metrics(mut self, metrics: MetricRegistry) -> Self {
        self.metrics = metrics;
        self
    }

    /// Sets the order cap, kept within `1..=MAX_SUPPORTED_ORDER`.
    pub fn with_max_combo_cap(mut self, cap: usize) -> Self {
        self.max_combo_cap = cap.clamp(1, MAX_SUPPORTED_ORDER);
        self
    }

    /// Returns the metric registry.
    #[inline]
    pub fn metrics(&self) -> &MetricRegistry {
        &self.metrics
    }

    /// Returns the metric registry for registering metrics.
    #[inline]
    pub fn metrics_mut(&mut self) -> &mut MetricRegistry {
        &mut self.metrics
    }

    /// Returns the order cap.
    #[inline]
    pub fn max_combo_cap(&self) -> usize {
        self.max_combo_cap
    }
}

impl Default for ExecutionContext {
    fn default() -> Self {
        Self::new()
    }
}
