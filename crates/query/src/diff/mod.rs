//! DIFF explanation engine.
//!
//! - `key`: combination keys with an explicit unset slot
//! - `counter`: order 1..=3 combination counting
//! - `metric`: compare-by metrics and their registry
//! - `executor`: joins outlier and inlier counts into the explanation table

mod counter;
mod executor;
mod key;
pub mod metric;

pub use counter::{CombinationCounter, CountMap, MAX_SUPPORTED_ORDER};
pub use executor::{DiffExecutor, DiffOutput, DiffStats, SUPPORT_COLUMN};
pub use key::{CombinationKey, UNSET_MARKER};
pub use metric::{CompareByFn, MetricRegistry};
