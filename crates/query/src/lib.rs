//! macrodiff Query - SELECT and DIFF execution for the macrodiff engine.
//!
//! This crate provides:
//!
//! - `ast`: SELECT, table reference, DIFF and predicate definitions
//! - `executor`: the relation type, WHERE filtering and the query runner
//! - `diff`: combination counting, compare-by metrics and the diff executor
//! - `context`: execution context (metric registry, order cap)
//!
//! # Example
//!
//! ```rust
//! use macrodiff_core::Schema;
//! use macrodiff_query::ast::{CompareBy, DiffDefinition, Predicate, SelectStatement};
//! use macrodiff_query::context::ExecutionContext;
//! use macrodiff_query::executor::{QueryRunner, Relation};
//!
//! let schema = Schema::new(["usage", "location"]).unwrap();
//! let rows = [["10", "us"], ["90", "us"], ["5", "eu"], ["95", "eu"]]
//!     .into_iter()
//!     .map(|cells| cells.into_iter().collect())
//!     .collect();
//! let input = Relation::new(schema, rows).unwrap();
//!
//! let diff = DiffDefinition::new(
//!     SelectStatement::from_table("input").with_where(Predicate::gt("usage", 50.0)),
//!     SelectStatement::from_table("input").with_where(Predicate::le("usage", 50.0)),
//!     ["location"],
//!     CompareBy::new("risk_ratio", "COUNT(*)"),
//!     1,
//! );
//!
//! let ctx = ExecutionContext::new();
//! let output = QueryRunner::new(&ctx)
//!     .run_select(&SelectStatement::from_diff(diff), &input)
//!     .unwrap();
//! assert_eq!(output.len(), 2);
//! ```

#![no_std]

extern crate alloc;

pub mod ast;
pub mod context;
pub mod diff;
pub mod executor;
