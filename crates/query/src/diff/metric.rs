//! Compare-by metrics and their registry.
//!
//! A compare-by metric turns the counts of one combination into a score:
//!
//! ```text
//! score(match_outliers, match_total, total_outliers, total_all)
//! ```
//!
//! where `match_total = match_outliers + match_inliers` and
//! `total_all = total_outliers + total_inliers`. Each metric guards its own
//! divisions.

use alloc::string::String;
use alloc::vec::Vec;
use hashbrown::HashMap;
use macrodiff_core::{Error, Result};

/// Signature of a compare-by metric.
pub type CompareByFn = fn(u64, u64, u64, u64) -> f64;

/// Number of matching outliers, as is.
pub fn count(match_outliers: u64, _match_total: u64, _total_outliers: u64, _total_all: u64) -> f64 {
    match_outliers as f64
}

/// Fraction of all outliers that match.
pub fn support(match_outliers: u64, _match_total: u64, total_outliers: u64, _total_all: u64) -> f64 {
    if total_outliers == 0 {
        return 0.0;
    }
    match_outliers as f64 / total_outliers as f64
}

/// Outlier rate among matching rows over the outlier rate among all rows.
pub fn global_ratio(match_outliers: u64, match_total: u64, total_outliers: u64, total_all: u64) -> f64 {
    if match_total == 0 || total_outliers == 0 || total_all == 0 {
        return 0.0;
    }
    let matched_rate = match_outliers as f64 / match_total as f64;
    let global_rate = total_outliers as f64 / total_all as f64;
    matched_rate / global_rate
}

/// Outlier rate among matching rows over the outlier rate among the rest.
pub fn risk_ratio(match_outliers: u64, match_total: u64, total_outliers: u64, total_all: u64) -> f64 {
    let unmatched_total = total_all.saturating_sub(match_total);
    let unmatched_outliers = total_outliers.saturating_sub(match_outliers);

    if match_outliers == 0 || match_total == 0 || unmatched_total == 0 {
        return 0.0;
    }
    if unmatched_outliers == 0 {
        return f64::INFINITY;
    }
    let matched_rate = match_outliers as f64 / match_total as f64;
    let unmatched_rate = unmatched_outliers as f64 / unmatched_total as f64;
    matched_rate / unmatched_rate
}

/// Pointwise mutual information between "matches" and "is an outlier", in
/// bits.
pub fn pmi_ratio(match_outliers: u64, match_total: u64, total_outliers: u64, total_all: u64) -> f64 {
    libm::log2(global_ratio(
        match_outliers,
        match_total,
        total_outliers,
        total_all,
    ))
}

/// Name-keyed lookup of compare-by metrics.
#[derive(Clone, Debug)]
pub struct MetricRegistry {
    metrics: HashMap<String, CompareByFn>,
}

impl MetricRegistry {
    /// Creates a registry with no metrics.
    pub fn empty() -> Self {
        Self {
            metrics: HashMap::new(),
        }
    }

    /// Creates a registry holding the built-in metrics.
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        registry.register("count", count);
        registry.register("support", support);
        registry.register("global_ratio", global_ratio);
        registry.register("risk_ratio", risk_ratio);
        registry.register("pmi_ratio", pmi_ratio);
        registry
    }

    /// Registers a metric, returning the one it replaces.
    pub fn register(&mut self, name: impl Into<String>, metric: CompareByFn) -> Option<CompareByFn> {
        self.metrics.insert(name.into(), metric)
    }

    /// Looks a metric up by name.
    pub fn get(&self, name: &str) -> Result<CompareByFn> {
        self.metrics
            .get(name)
            .copied()
            .ok_or_else(|| Error::unknown_metric(name))
    }

    /// Returns true if a metric is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.metrics.contains_key(name)
    }

    /// Returns the registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.metrics.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for MetricRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_builtin_names() {
        let registry = MetricRegistry::default();
        assert_eq!(
            registry.names(),
            vec!["count", "global_ratio", "pmi_ratio", "risk_ratio", "support"]
        );
    }

    #[test]
    fn test_unknown_metric() {
        let registry = MetricRegistry::with_builtins();
        assert_eq!(
            registry.get("odds_ratio").unwrap_err(),
            Error::unknown_metric("odds_ratio")
        );
        assert!(MetricRegistry::empty().get("count").is_err());
    }

    #[test]
    fn test_register_custom_metric() {
        fn inliers(mo: u64, mt: u64, _: u64, _: u64) -> f64 {
            (mt - mo) as f64
        }
        let mut registry = MetricRegistry::with_builtins();
        assert!(registry.register("inliers", inliers).is_none());
        assert!(registry.contains("inliers"));
        assert_eq!(registry.get("inliers").unwrap()(2, 5, 4, 10), 3.0);
        assert!(registry.register("inliers", count).is_some());
        assert_eq!(registry.get("inliers").unwrap()(2, 5, 4, 10), 2.0);
    }

    #[test]
    fn test_count_and_support() {
        assert_eq!(count(3, 7, 4, 10), 3.0);
        assert!(libm::fabs(support(1, 2, 2, 4) - 0.5) < EPS);
        assert_eq!(support(0, 0, 0, 0), 0.0);
    }

    #[test]
    fn test_global_ratio() {
        // every matching row is an outlier, half of all rows are
        assert!(libm::fabs(global_ratio(2, 2, 5, 10) - 2.0) < EPS);
        assert_eq!(global_ratio(0, 0, 5, 10), 0.0);
    }

    #[test]
    fn test_risk_ratio() {
        // matched: 3/4 outliers; unmatched: 1/6 outliers
        assert!(libm::fabs(risk_ratio(3, 4, 4, 10) - 4.5) < EPS);
        assert_eq!(risk_ratio(0, 4, 4, 10), 0.0);
        assert_eq!(risk_ratio(4, 10, 4, 10), 0.0);
        assert_eq!(risk_ratio(4, 5, 4, 10), f64::INFINITY);
    }

    #[test]
    fn test_pmi_ratio() {
        assert!(libm::fabs(pmi_ratio(2, 2, 5, 10) - 1.0) < EPS);
        assert!(libm::fabs(pmi_ratio(1, 2, 5, 10)) < EPS);
        assert_eq!(pmi_ratio(0, 3, 5, 10), f64::NEG_INFINITY);
    }
}
