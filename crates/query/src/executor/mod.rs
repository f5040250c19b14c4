//! Query executor module.

mod filter;
mod relation;
mod runner;

pub use filter::FilterExecutor;
pub use relation::Relation;
pub use runner::QueryRunner;
