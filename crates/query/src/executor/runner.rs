//! Query runner - routes a SELECT to the filter or the diff executor.
//!
//! A SELECT whose FROM clause is a DIFF runs the diff first; its WHERE clause
//! then filters the explanation rows, not the base rows. Every other FROM
//! clause reads the input table, filtered by WHERE when present. Projection
//! lists pass every column through.

use crate::ast::{DiffDefinition, SelectStatement, TableRef};
use crate::context::ExecutionContext;
use crate::diff::{DiffExecutor, DiffOutput};
use crate::executor::{FilterExecutor, Relation};
use macrodiff_core::{Error, Result};

/// Executes SELECT statements against one input table.
pub struct QueryRunner<'a> {
    ctx: &'a ExecutionContext,
}

impl<'a> QueryRunner<'a> {
    /// Creates a new query runner.
    pub fn new(ctx: &'a ExecutionContext) -> Self {
        Self { ctx }
    }

    /// Runs `stmt` over `input` and returns the result table.
    pub fn run_select(&self, stmt: &SelectStatement, input: &Relation) -> Result<Relation> {
        match &stmt.from {
            TableRef::Diff(diff) => {
                let output = self.run_diff(diff, input)?.relation;
                match &stmt.where_clause {
                    Some(predicate) => FilterExecutor::new(predicate).execute_owned(output),
                    None => Ok(output),
                }
            }
            TableRef::Name(_)
            | TableRef::Select(_)
            | TableRef::Join { .. }
            | TableRef::CrossProduct(_) => match &stmt.where_clause {
                Some(predicate) => FilterExecutor::new(predicate).execute(input),
                None => Ok(input.clone()),
            },
        }
    }

    /// Runs a DIFF over `input`.
    ///
    /// Both subqueries are evaluated over `input` through `run_select`, so
    /// their WHERE clauses (or nested DIFFs) apply normally. Attribute
    /// columns are resolved against `input`'s schema.
    pub fn run_diff(&self, diff: &DiffDefinition, input: &Relation) -> Result<DiffOutput> {
        let second = diff.second.as_ref().ok_or(Error::MissingInlierSubquery)?;
        let executor = DiffExecutor::new(
            diff,
            input.schema(),
            self.ctx.metrics(),
            self.ctx.max_combo_cap(),
        )?;
        tracing::debug!(
            attributes = ?diff.attribute_columns,
            compare_by = %diff.compare_by.function,
            requested = diff.max_combo,
            max_order = executor.max_order(),
            "running diff"
        );

        let outliers = self.run_select(&diff.first, input)?;
        let inliers = self.run_select(second, input)?;
        executor.execute(&outliers, &inliers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{CompareBy, Operator, Predicate};
    use alloc::vec;
    use macrodiff_core::Schema;

    fn input() -> Relation {
        let schema = Schema::new(["usage", "location"]).unwrap();
        let rows = [("10", "us"), ("90", "us"), ("5", "eu"), ("95", "eu")]
            .into_iter()
            .map(|(u, l)| [u, l].into_iter().collect())
            .collect();
        Relation::new(schema, rows).unwrap()
    }

    fn usage_diff(metric: &str) -> DiffDefinition {
        DiffDefinition::new(
            SelectStatement::from_table("input").with_where(Predicate::gt("usage", 50.0)),
            SelectStatement::from_table("input").with_where(Predicate::le("usage", 50.0)),
            ["location"],
            CompareBy::new(metric, "COUNT(*)"),
            1,
        )
    }

    #[test]
    fn test_plain_select_returns_input() {
        let ctx = ExecutionContext::new();
        let stmt = SelectStatement::from_table("input").with_projection(["location"]);
        let result = QueryRunner::new(&ctx).run_select(&stmt, &input()).unwrap();
        // projection is not applied
        assert_eq!(result, input());
    }

    #[test]
    fn test_select_with_where() {
        let ctx = ExecutionContext::new();
        let stmt = SelectStatement::from_table("input").with_where(Predicate::ge("usage", 90.0));
        let result = QueryRunner::new(&ctx).run_select(&stmt, &input()).unwrap();
        assert_eq!(result.column_values("location").unwrap(), vec!["us", "eu"]);
    }

    #[test]
    fn test_non_diff_refs_read_input() {
        let ctx = ExecutionContext::new();
        let runner = QueryRunner::new(&ctx);
        let refs = [
            TableRef::Select(alloc::boxed::Box::new(SelectStatement::from_table("other"))),
            TableRef::CrossProduct(vec![TableRef::Name("a".into()), TableRef::Name("b".into())]),
        ];
        for from in refs {
            let result = runner.run_select(&SelectStatement::new(from), &input()).unwrap();
            assert_eq!(result.len(), 4);
        }
    }

    #[test]
    fn test_diff_select() {
        let ctx = ExecutionContext::new();
        let stmt = SelectStatement::from_diff(usage_diff("count"));
        let result = QueryRunner::new(&ctx).run_select(&stmt, &input()).unwrap();

        assert_eq!(
            result.schema().column_names(),
            &["location", "COUNT(*)", "count", "support"]
        );
        assert_eq!(result.column_values("location").unwrap(), vec!["eu", "us"]);
        assert_eq!(result.column_values("support").unwrap(), vec!["0.500000", "0.500000"]);
    }

    #[test]
    fn test_where_filters_diff_output() {
        let ctx = ExecutionContext::new();
        let stmt = SelectStatement::from_diff(usage_diff("count"))
            .with_where(Predicate::gt("support", 0.9));
        let result = QueryRunner::new(&ctx).run_select(&stmt, &input()).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.schema().len(), 4);

        // the base column is not part of the diff output
        let stmt = SelectStatement::from_diff(usage_diff("count"))
            .with_where(Predicate::new(Operator::Gt, "usage", 0.0));
        let err = QueryRunner::new(&ctx).run_select(&stmt, &input()).unwrap_err();
        assert_eq!(err, Error::unknown_column("usage"));
    }

    #[test]
    fn test_missing_second_subquery() {
        let ctx = ExecutionContext::new();
        let stmt = SelectStatement::from_diff(usage_diff("count").without_second());
        let err = QueryRunner::new(&ctx).run_select(&stmt, &input()).unwrap_err();
        assert_eq!(err, Error::MissingInlierSubquery);
    }

    #[test]
    fn test_diff_propagates_subquery_errors() {
        let ctx = ExecutionContext::new();
        let mut diff = usage_diff("count");
        diff.first = SelectStatement::from_table("input").with_where(Predicate::eq("location", 1.0));
        let err = QueryRunner::new(&ctx)
            .run_select(&SelectStatement::from_diff(diff), &input())
            .unwrap_err();
        assert_eq!(err, Error::numeric_parse("location", "us"));
    }
}
