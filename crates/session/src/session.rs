//! Session state: the imported INPUT table and the OUTPUT of the last query.

use crate::config::{OutputPolicy, SessionConfig};
use macrodiff_core::{Result, Row, Schema};
use macrodiff_query::ast::SelectStatement;
use macrodiff_query::context::ExecutionContext;
use macrodiff_query::diff::MetricRegistry;
use macrodiff_query::executor::{QueryRunner, Relation};
use std::time::Instant;
use tracing::{info, instrument, warn};

/// One interactive session.
///
/// Queries never modify INPUT. Each SELECT replaces OUTPUT wholesale; what a
/// failed SELECT leaves in OUTPUT depends on the configured `OutputPolicy`.
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    ctx: ExecutionContext,
    input: Relation,
    output: Relation,
}

impl Session {
    /// Creates a session with the default configuration and built-in metrics.
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    /// Creates a session with the given configuration.
    pub fn with_config(config: SessionConfig) -> Self {
        let ctx = ExecutionContext::new().with_max_combo_cap(config.effective_max_combo_cap());
        Self {
            config,
            ctx,
            input: Relation::empty(),
            output: Relation::empty(),
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Returns the metric registry, e.g. to register a custom compare-by
    /// function.
    pub fn metrics_mut(&mut self) -> &mut MetricRegistry {
        self.ctx.metrics_mut()
    }

    /// Returns the imported table.
    pub fn input(&self) -> &Relation {
        &self.input
    }

    /// Returns the result of the last query.
    pub fn output(&self) -> &Relation {
        &self.output
    }

    /// Replaces INPUT with the given table.
    ///
    /// On error (a row whose width differs from the schema) INPUT is left as
    /// it was.
    pub fn import_table(&mut self, schema: Schema, rows: Vec<Row>) -> Result<()> {
        let relation = Relation::new(schema, rows)?;
        info!(
            rows = relation.len(),
            columns = relation.schema().len(),
            "imported table"
        );
        self.input = relation;
        Ok(())
    }

    /// Runs a SELECT over INPUT and stores the result as OUTPUT.
    #[instrument(skip_all, fields(diff = stmt.from.as_diff().is_some()))]
    pub fn run_select(&mut self, stmt: &SelectStatement) -> Result<&Relation> {
        if self.config.output_policy == OutputPolicy::ClearBeforeQuery {
            self.output = Relation::empty();
        }

        let start = Instant::now();
        match QueryRunner::new(&self.ctx).run_select(stmt, &self.input) {
            Ok(result) => {
                info!(
                    rows = result.len(),
                    columns = result.schema().len(),
                    elapsed_us = start.elapsed().as_micros() as u64,
                    "query finished"
                );
                self.output = result;
                Ok(&self.output)
            }
            Err(err) => {
                warn!(error = %err, "query failed");
                Err(err)
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
