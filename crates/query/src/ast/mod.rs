//! AST module for SELECT statements, DIFF definitions and predicates.

mod expr;
mod statement;

pub use expr::{Comparison, Operator, Predicate};
pub use statement::{CompareBy, DiffDefinition, JoinType, SelectStatement, TableRef};
