//! Predicate AST definitions.

use alloc::string::String;

/// Operators a WHERE clause may carry.
///
/// Only the six comparisons filter anything. The rest are accepted from the
/// parser and evaluate to "matches nothing".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    // Comparison
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    // Logical
    And,
    Or,
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    // String/Pattern
    Like,
    NotLike,
    ILike,
    Concat,
    // Set / ternary
    In,
    Between,
    Case,
    // Unary
    Not,
    Neg,
    IsNull,
    Exists,
    /// No operator was parsed.
    None,
}

/// The comparisons a predicate can actually evaluate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Comparison {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl Comparison {
    /// Compares a cell value against the literal.
    #[inline]
    pub fn holds(self, cell: f64, literal: f64) -> bool {
        match self {
            Comparison::Eq => cell == literal,
            Comparison::Ne => cell != literal,
            Comparison::Lt => cell < literal,
            Comparison::Le => cell <= literal,
            Comparison::Gt => cell > literal,
            Comparison::Ge => cell >= literal,
        }
    }
}

impl Operator {
    /// Returns the comparison this operator evaluates, if it is one.
    pub fn comparison(self) -> Option<Comparison> {
        match self {
            Operator::Eq => Some(Comparison::Eq),
            Operator::Ne => Some(Comparison::Ne),
            Operator::Lt => Some(Comparison::Lt),
            Operator::Le => Some(Comparison::Le),
            Operator::Gt => Some(Comparison::Gt),
            Operator::Ge => Some(Comparison::Ge),
            _ => None,
        }
    }
}

/// A WHERE predicate: one column compared against one numeric literal.
#[derive(Clone, Debug, PartialEq)]
pub struct Predicate {
    pub op: Operator,
    pub column: String,
    pub literal: f64,
}

impl Predicate {
    pub fn new(op: Operator, column: impl Into<String>, literal: f64) -> Self {
        Self {
            op,
            column: column.into(),
            literal,
        }
    }

    pub fn eq(column: impl Into<String>, literal: f64) -> Self {
        Self::new(Operator::Eq, column, literal)
    }

    pub fn ne(column: impl Into<String>, literal: f64) -> Self {
        Self::new(Operator::Ne, column, literal)
    }

    pub fn lt(column: impl Into<String>, literal: f64) -> Self {
        Self::new(Operator::Lt, column, literal)
    }

    pub fn le(column: impl Into<String>, literal: f64) -> Self {
        Self::new(Operator::Le, column, literal)
    }

    pub fn gt(column: impl Into<String>, literal: f64) -> Self {
        Self::new(Operator::Gt, column, literal)
    }

    pub fn ge(column: impl Into<String>, literal: f64) -> Self {
        Self::new(Operator::Ge, column, literal)
    }
}
