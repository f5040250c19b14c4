//! Relation type for query execution.

use alloc::vec::Vec;
use macrodiff_core::{Error, Result, Row, Schema};

/// A table: a schema plus the rows laid out under it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Relation {
    schema: Schema,
    rows: Vec<Row>,
}

impl Relation {
    /// Creates a relation, checking that every row has one cell per column.
    pub fn new(schema: Schema, rows: Vec<Row>) -> Result<Self> {
        if let Some(row) = rows.iter().find(|row| row.len() != schema.len()) {
            return Err(Error::row_width(schema.len(), row.len()));
        }
        Ok(Self { schema, rows })
    }

    /// Creates a relation whose rows are already known to fit the schema.
    pub(crate) fn from_parts(schema: Schema, rows: Vec<Row>) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == schema.len()));
        Self { schema, rows }
    }

    /// Creates an empty relation with no columns.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the schema.
    #[inline]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Returns the rows.
    #[inline]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Splits the relation into its schema and rows.
    pub fn into_parts(self) -> (Schema, Vec<Row>) {
        (self.schema, self.rows)
    }

    /// Returns every cell of the named column, in row order.
    pub fn column_values(&self, name: &str) -> Result<Vec<&str>> {
        let index = self.schema.resolve(name)?;
        Ok(self
            .rows
            .iter()
            .map(|row| row.get(index).unwrap_or_default())
            .collect())
    }

    /// Returns the number of rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the relation has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns an iterator over the rows.
    pub fn iter(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }
}

impl IntoIterator for Relation {
    type Item = Row;
    type IntoIter = alloc::vec::IntoIter<Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}
