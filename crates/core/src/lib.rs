//! macrodiff Core - Table model and error types for the macrodiff engine.
//!
//! This crate provides the foundational types shared by the query engine:
//!
//! - `Schema`: Ordered column names with a name lookup
//! - `Row`: A fixed-width row of text cells with on-demand numeric parsing
//! - `Error`: Error types for query execution
//!
//! # Example
//!
//! ```rust
//! use macrodiff_core::{Row, Schema};
//!
//! let schema = Schema::new(["usage", "location"]).unwrap();
//! let row: Row = ["90", "us"].into_iter().collect();
//!
//! let usage = schema.resolve("usage").unwrap();
//! assert_eq!(row.get_f64(usage, "usage").unwrap(), 90.0);
//! assert_eq!(row.get(schema.resolve("location").unwrap()), Some("us"));
//! ```

#![no_std]

extern crate alloc;

mod error;
mod row;
mod schema;

pub use error::{Error, Result};
pub use row::{parse_number, Row};
pub use schema::{Schema, SchemaBuilder};
