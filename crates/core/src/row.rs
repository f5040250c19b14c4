//! Row structure for macrodiff tables.
//!
//! A row is a fixed-width sequence of text cells. Nothing is typed at rest;
//! numeric comparisons parse a cell when they need it.

use crate::error::{Error, Result};
use alloc::string::String;
use alloc::vec::Vec;

/// A row in a table, one text cell per schema column.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Row {
    values: Vec<String>,
}

impl Row {
    /// Creates a new row from its cells.
    pub fn new(values: Vec<String>) -> Self {
        Self { values }
    }

    /// Returns the cells of this row.
    #[inline]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Consumes the row and returns its cells.
    pub fn into_values(self) -> Vec<String> {
        self.values
    }

    /// Gets the cell at the given column index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    /// Parses the cell at `index` as a number.
    ///
    /// `column` only names the cell in the error. An index past the end of the
    /// row reads as an empty cell and therefore fails to parse.
    pub fn get_f64(&self, index: usize, column: &str) -> Result<f64> {
        parse_number(self.get(index).unwrap_or(""), column)
    }

    /// Returns the number of cells in this row.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if this row has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Row {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// Parses a text cell as an `f64`, ignoring surrounding whitespace.
pub fn parse_number(cell: &str, column: &str) -> Result<f64> {
    cell.trim()
        .parse::<f64>()
        .map_err(|_| Error::numeric_parse(column, cell))
}
