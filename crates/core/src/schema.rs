//! Schema definition for macrodiff tables.
//!
//! A schema is the ordered list of column names of a table together with a
//! name lookup. Query results build a fresh schema; a published schema is
//! never mutated.

use crate::error::{Error, Result};
use alloc::string::String;
use alloc::vec::Vec;
use hashbrown::HashMap;

/// Column names of a table and their zero-based positions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Schema {
    /// Column names in position order.
    columns: Vec<String>,
    /// Column name to position.
    positions: HashMap<String, usize>,
}

impl Schema {
    /// Creates a schema from column names in position order.
    ///
    /// Fails if a name appears twice.
    pub fn new<I, S>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        columns
            .into_iter()
            .try_fold(SchemaBuilder::new(), |builder, name| builder.add_column(name))
            .map(SchemaBuilder::build)
    }

    /// Creates a schema with no columns.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the column names in position order.
    #[inline]
    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    /// Returns the name of the column at `index`.
    pub fn column_name(&self, index: usize) -> Option<&str> {
        self.columns.get(index).map(String::as_str)
    }

    /// Gets a column index by name.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// Gets a column index by name, failing with `UnknownColumn`.
    pub fn resolve(&self, name: &str) -> Result<usize> {
        self.index_of(name)
            .ok_or_else(|| Error::unknown_column(name))
    }

    /// Resolves several column names in order.
    pub fn resolve_all<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<usize>> {
        names.iter().map(|name| self.resolve(name.as_ref())).collect()
    }

    /// Returns the number of columns.
    #[inline]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if the schema has no columns.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Builder for creating schemas column by column.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    columns: Vec<String>,
    positions: HashMap<String, usize>,
}

impl SchemaBuilder {
    /// Creates a new schema builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a column at the next position.
    pub fn add_column(mut self, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if self.positions.contains_key(&name) {
            return Err(Error::duplicate_column(name));
        }
        self.positions.insert(name.clone(), self.columns.len());
        self.columns.push(name);
        Ok(self)
    }

    /// Builds the schema.
    pub fn build(self) -> Schema {
        Schema {
            columns: self.columns,
            positions: self.positions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_positions() {
        let schema = Schema::new(["usage", "latency", "location"]).unwrap();
        assert_eq!(schema.len(), 3);
        assert_eq!(schema.index_of("latency"), Some(1));
        assert_eq!(schema.column_name(2), Some("location"));
        assert_eq!(schema.index_of("version"), None);
    }

    #[test]
    fn test_schema_resolve() {
        let schema = Schema::new(["usage", "location"]).unwrap();
        assert_eq!(schema.resolve_all(&["location", "usage"]), Ok(alloc::vec![1, 0]));
        assert_eq!(
            schema.resolve("version"),
            Err(Error::unknown_column("version"))
        );
    }

    #[test]
    fn test_schema_rejects_duplicates() {
        let err = Schema::new(["a", "b", "a"]).unwrap_err();
        assert_eq!(err, Error::duplicate_column("a"));
    }

    #[test]
    fn test_builder() {
        let schema = SchemaBuilder::new()
            .add_column("location")
            .unwrap()
            .add_column("support")
            .unwrap()
            .build();
        assert_eq!(schema.column_names(), &["location", "support"]);
        assert!(Schema::empty().is_empty());
    }
}
