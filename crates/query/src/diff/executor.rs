//! Diff executor - scores attribute combinations of outliers against inliers.

use crate::ast::DiffDefinition;
use crate::diff::{CombinationCounter, CompareByFn, MetricRegistry, MAX_SUPPORTED_ORDER};
use crate::executor::Relation;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use macrodiff_core::{Error, Result, Row, Schema};

/// Name of the trailing support column in a diff result.
pub const SUPPORT_COLUMN: &str = "support";

/// Totals gathered while executing a diff.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DiffStats {
    pub outliers: usize,
    pub inliers: usize,
    /// Effective maximum combination order after clamping.
    pub max_order: usize,
    /// Distinct combinations among the outliers, i.e. result rows.
    pub distinct_outlier_keys: usize,
}

/// Result of a diff: the explanation table and its totals.
#[derive(Clone, Debug)]
pub struct DiffOutput {
    pub relation: Relation,
    pub stats: DiffStats,
}

/// Diff executor.
///
/// Built against the schema of the table the outlier and inlier subsets were
/// carved from; both subsets must share that schema.
pub struct DiffExecutor {
    attribute_columns: Vec<String>,
    metric_name: String,
    metric_argument: String,
    metric: CompareByFn,
    counter: CombinationCounter,
}

impl DiffExecutor {
    /// Resolves the metric and the attribute columns of `diff`.
    ///
    /// The requested order is clamped to the number of attribute columns and
    /// to `order_cap` (itself at most `MAX_SUPPORTED_ORDER`).
    pub fn new(
        diff: &DiffDefinition,
        input_schema: &Schema,
        metrics: &MetricRegistry,
        order_cap: usize,
    ) -> Result<Self> {
        let metric = metrics.get(&diff.compare_by.function)?;
        let attr_indices = input_schema.resolve_all(&diff.attribute_columns)?;
        let max_order = diff
            .max_combo
            .min(diff.attribute_columns.len())
            .min(order_cap.min(MAX_SUPPORTED_ORDER));

        Ok(Self {
            attribute_columns: diff.attribute_columns.clone(),
            metric_name: diff.compare_by.function.clone(),
            metric_argument: diff.compare_by.argument.clone(),
            metric,
            counter: CombinationCounter::new(attr_indices, max_order),
        })
    }

    /// Returns the effective maximum combination order.
    pub fn max_order(&self) -> usize {
        self.counter.max_order()
    }

    /// Builds the result schema: attribute columns, then the metric argument,
    /// the score column and `support`.
    ///
    /// The score column is named after the metric. When that name is already
    /// taken by another output column (the built-in `support` metric always
    /// is), it gets a `_score` suffix, so `support` keeps naming the trailing
    /// support column. A metric argument that repeats an attribute or
    /// `support` is rejected.
    pub fn output_schema(&self) -> Result<Schema> {
        let score_column = self.score_column_name();
        Schema::new(
            self.attribute_columns
                .iter()
                .map(String::as_str)
                .chain([
                    self.metric_argument.as_str(),
                    score_column.as_str(),
                    SUPPORT_COLUMN,
                ]),
        )
    }

    fn score_column_name(&self) -> String {
        let taken = |name: &str| {
            name == SUPPORT_COLUMN
                || name == self.metric_argument
                || self.attribute_columns.iter().any(|col| col == name)
        };
        if !taken(&self.metric_name) {
            return self.metric_name.clone();
        }

        let base = format!("{}_score", self.metric_name);
        let mut name = base.clone();
        let mut suffix = 2;
        while taken(&name) {
            name = format!("{}_{}", base, suffix);
            suffix += 1;
        }
        name
    }

    /// Executes the diff over already-selected outliers and inliers.
    ///
    /// Only combinations seen among the outliers are reported, one row each,
    /// in key order.
    ///
    /// Both subsets are read by the attribute positions resolved at
    /// construction. A subset with a different schema (a nested DIFF's
    /// output) is still read by those positions; a position past the end of
    /// its rows reads as an empty cell.
    pub fn execute(&self, outliers: &Relation, inliers: &Relation) -> Result<DiffOutput> {
        let total_outliers = outliers.len() as u64;
        let total_all = total_outliers + inliers.len() as u64;
        if total_outliers == 0 {
            return Err(Error::division_by_zero("outlier count"));
        }

        let schema = self.output_schema()?;

        let outlier_counts = self.counter.count(outliers.rows());
        let inlier_counts = self.counter.count(inliers.rows());

        let rows: Vec<Row> = outlier_counts
            .iter()
            .map(|(key, &match_outliers)| {
                let match_inliers = inlier_counts.get(key).copied().unwrap_or(0);
                let match_total = match_outliers + match_inliers;
                let score = (self.metric)(match_outliers, match_total, total_outliers, total_all);
                let support = match_outliers as f64 / total_outliers as f64;

                let mut cells = key.to_cells();
                cells.push(match_outliers.to_string());
                cells.push(format_ratio(score));
                cells.push(format_ratio(support));
                Row::new(cells)
            })
            .collect();

        let stats = DiffStats {
            outliers: outliers.len(),
            inliers: inliers.len(),
            max_order: self.counter.max_order(),
            distinct_outlier_keys: rows.len(),
        };
        tracing::debug!(
            outliers = stats.outliers,
            inliers = stats.inliers,
            max_order = stats.max_order,
            keys = stats.distinct_outlier_keys,
            metric = %self.metric_name,
            "diff counted"
        );

        Ok(DiffOutput {
            relation: Relation::from_parts(schema, rows),
            stats,
        })
    }
}

/// Formats a ratio with six fractional digits.
fn format_ratio(value: f64) -> String {
    format!("{:.6}", value)
}
