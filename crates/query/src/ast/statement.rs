//! SELECT statement and table reference AST.
//!
//! These are the shapes an external parser hands to the engine. Nothing here
//! parses text.

use crate::ast::Predicate;
use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

/// A SELECT statement.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectStatement {
    /// Projected column names. Accepted but not applied: every column passes
    /// through.
    pub projection: Vec<String>,
    /// The FROM clause.
    pub from: TableRef,
    /// Optional WHERE predicate.
    pub where_clause: Option<Predicate>,
}

impl SelectStatement {
    /// Creates `SELECT * FROM <from>`.
    pub fn new(from: TableRef) -> Self {
        Self {
            projection: Vec::new(),
            from,
            where_clause: None,
        }
    }

    /// Creates `SELECT * FROM <table>`.
    pub fn from_table(name: impl Into<String>) -> Self {
        Self::new(TableRef::Name(name.into()))
    }

    /// Creates `SELECT * FROM DIFF(...)`.
    pub fn from_diff(diff: DiffDefinition) -> Self {
        Self::new(TableRef::Diff(Box::new(diff)))
    }

    /// Sets the WHERE predicate.
    pub fn with_where(mut self, predicate: Predicate) -> Self {
        self.where_clause = Some(predicate);
        self
    }

    /// Sets the projection list.
    pub fn with_projection<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.projection = columns.into_iter().map(Into::into).collect();
        self
    }
}

/// Join kinds the grammar can express.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JoinType {
    Inner,
    LeftOuter,
    RightOuter,
    FullOuter,
    Cross,
    Natural,
}

/// A table reference in a FROM clause.
#[derive(Clone, Debug, PartialEq)]
pub enum TableRef {
    /// A named table.
    Name(String),
    /// A parenthesized sub-select.
    Select(Box<SelectStatement>),
    /// `left JOIN right ON condition`.
    Join {
        left: Box<TableRef>,
        right: Box<TableRef>,
        condition: Option<Predicate>,
        join_type: JoinType,
    },
    /// `a, b, ...`.
    CrossProduct(Vec<TableRef>),
    /// `DIFF (first, second) ON ... COMPARE BY ... MAX COMBO ...`.
    Diff(Box<DiffDefinition>),
}

impl TableRef {
    /// Returns the diff definition if this is a DIFF reference.
    pub fn as_diff(&self) -> Option<&DiffDefinition> {
        match self {
            TableRef::Diff(diff) => Some(diff),
            _ => None,
        }
    }
}

/// The compare-by clause: metric function name and its value-column argument,
/// e.g. `risk_ratio(COUNT(*))`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompareBy {
    pub function: String,
    pub argument: String,
}

impl CompareBy {
    pub fn new(function: impl Into<String>, argument: impl Into<String>) -> Self {
        Self {
            function: function.into(),
            argument: argument.into(),
        }
    }
}

/// A DIFF table reference.
#[derive(Clone, Debug, PartialEq)]
pub struct DiffDefinition {
    /// Subquery selecting the outliers.
    pub first: SelectStatement,
    /// Subquery selecting the inliers. Required at execution time.
    pub second: Option<SelectStatement>,
    /// Attribute columns whose value combinations are candidate explanations.
    pub attribute_columns: Vec<String>,
    pub compare_by: CompareBy,
    /// Requested maximum combination order, before clamping.
    pub max_combo: usize,
}

impl DiffDefinition {
    pub fn new<I, S>(
        first: SelectStatement,
        second: SelectStatement,
        attribute_columns: I,
        compare_by: CompareBy,
        max_combo: usize,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            first,
            second: Some(second),
            attribute_columns: attribute_columns.into_iter().map(Into::into).collect(),
            compare_by,
            max_combo,
        }
    }

    /// Drops the inlier subquery, as a parser does for `DIFF (first) ...`.
    pub fn without_second(mut self) -> Self {
        self.second = None;
        self
    }
}
