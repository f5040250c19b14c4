//! macrodiff Session - the state a front end drives queries through.
//!
//! A `Session` owns the imported INPUT table and the OUTPUT of the last
//! SELECT. The front end (REPL, CSV import, table printing) builds the AST and
//! the rows; the session runs them.
//!
//! # Example
//!
//! ```rust
//! use macrodiff_core::Schema;
//! use macrodiff_query::ast::{CompareBy, DiffDefinition, Predicate, SelectStatement};
//! use macrodiff_session::Session;
//!
//! let mut session = Session::new();
//! let rows = [["10", "us"], ["90", "us"], ["5", "eu"], ["95", "eu"]]
//!     .into_iter()
//!     .map(|cells| cells.into_iter().collect())
//!     .collect();
//! session
//!     .import_table(Schema::new(["usage", "location"]).unwrap(), rows)
//!     .unwrap();
//!
//! let diff = DiffDefinition::new(
//!     SelectStatement::from_table("input").with_where(Predicate::gt("usage", 50.0)),
//!     SelectStatement::from_table("input").with_where(Predicate::le("usage", 50.0)),
//!     ["location"],
//!     CompareBy::new("global_ratio", "COUNT(*)"),
//!     1,
//! );
//! let output = session.run_select(&SelectStatement::from_diff(diff)).unwrap();
//! assert_eq!(output.column_values("support").unwrap(), ["0.500000", "0.500000"]);
//! ```

pub mod config;
pub mod logging;
mod session;

pub use config::{OutputPolicy, SessionConfig};
pub use session::Session;
