//! Filter executor.

use crate::ast::{Comparison, Predicate};
use crate::executor::Relation;
use alloc::vec::Vec;
use macrodiff_core::{Result, Row};

/// Filter executor - keeps the rows a WHERE predicate accepts.
pub struct FilterExecutor<'a> {
    predicate: &'a Predicate,
}

impl<'a> FilterExecutor<'a> {
    /// Creates a new filter executor.
    pub fn new(predicate: &'a Predicate) -> Self {
        Self { predicate }
    }

    /// Executes the filter, copying the accepted rows out of `input`.
    pub fn execute(&self, input: &Relation) -> Result<Relation> {
        let Some((index, comparison)) = self.prepare(input)? else {
            return Ok(Relation::from_parts(input.schema().clone(), Vec::new()));
        };

        let mut rows = Vec::new();
        for row in input.iter() {
            if self.accepts(row, index, comparison)? {
                rows.push(row.clone());
            }
        }
        Ok(Relation::from_parts(input.schema().clone(), rows))
    }

    /// Executes the filter on an owned relation without copying rows.
    pub fn execute_owned(&self, input: Relation) -> Result<Relation> {
        let prepared = self.prepare(&input)?;
        let (schema, rows) = input.into_parts();
        let Some((index, comparison)) = prepared else {
            return Ok(Relation::from_parts(schema, Vec::new()));
        };

        let mut kept = Vec::with_capacity(rows.len());
        for row in rows {
            if self.accepts(&row, index, comparison)? {
                kept.push(row);
            }
        }
        Ok(Relation::from_parts(schema, kept))
    }

    /// Resolves the predicate column. The lookup fails for an unknown column
    /// even when the operator cannot filter; `None` means nothing matches.
    fn prepare(&self, input: &Relation) -> Result<Option<(usize, Comparison)>> {
        let index = input.schema().resolve(&self.predicate.column)?;
        tracing::trace!(
            op = ?self.predicate.op,
            column = %self.predicate.column,
            literal = self.predicate.literal,
            "applying where predicate"
        );
        match self.predicate.op.comparison() {
            Some(comparison) => Ok(Some((index, comparison))),
            None => {
                tracing::debug!(op = ?self.predicate.op, "unsupported operator matches no rows");
                Ok(None)
            }
        }
    }

    #[inline]
    fn accepts(&self, row: &Row, index: usize, comparison: Comparison) -> Result<bool> {
        let cell = row.get_f64(index, &self.predicate.column)?;
        Ok(comparison.holds(cell, self.predicate.literal))
    }
}
