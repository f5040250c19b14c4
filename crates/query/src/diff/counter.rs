//! Combination counter.
//!
//! Counts every partial assignment of the attribute columns, of order 1 up to
//! the requested maximum, over one set of rows.

use crate::diff::CombinationKey;
use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use macrodiff_core::Row;

/// Highest combination order the counter supports.
///
/// The number of keys per row grows as `k^order`; orders above 3 are not
/// counted.
pub const MAX_SUPPORTED_ORDER: usize = 3;

/// Occurrence count per combination, iterated in key order.
pub type CountMap<'a> = BTreeMap<CombinationKey<'a>, u64>;

/// Counts attribute-value combinations of order 1..=`max_order`.
#[derive(Clone, Debug)]
pub struct CombinationCounter {
    /// Row positions of the attribute columns, in attribute order.
    attr_indices: Vec<usize>,
    max_order: usize,
}

impl CombinationCounter {
    /// Creates a counter. `max_order` is clamped into `1..=MAX_SUPPORTED_ORDER`.
    pub fn new(attr_indices: Vec<usize>, max_order: usize) -> Self {
        Self {
            attr_indices,
            max_order: max_order.clamp(1, MAX_SUPPORTED_ORDER),
        }
    }

    /// Returns the effective maximum order.
    #[inline]
    pub fn max_order(&self) -> usize {
        self.max_order
    }

    /// Returns the number of attribute columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.attr_indices.len()
    }

    /// Counts the combinations occurring in `rows`.
    ///
    /// Rows are read by the attribute positions given at construction; a
    /// position past the end of a row reads as an empty cell.
    pub fn count<'a>(&self, rows: &'a [Row]) -> CountMap<'a> {
        let mut counts = CountMap::new();
        let width = self.width();

        for row in rows {
            let values: Vec<&'a str> = self
                .attr_indices
                .iter()
                .map(|&idx| row.get(idx).unwrap_or_default())
                .collect();

            for j in 0..width {
                let order_one = CombinationKey::unset(width).with(j, values[j]);

                if self.max_order > 1 {
                    for l in j + 1..width {
                        let order_two = order_one.with(l, values[l]);

                        if self.max_order > 2 {
                            for p in l + 1..width {
                                *counts.entry(order_two.with(p, values[p])).or_insert(0) += 1;
                            }
                        }
                        *counts.entry(order_two).or_insert(0) += 1;
                    }
                }
                *counts.entry(order_one).or_insert(0) += 1;
            }
        }

        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn rows(data: &[&[&str]]) -> Vec<Row> {
        data.iter().map(|cells| cells.iter().copied().collect()).collect()
    }

    fn key<'a>(slots: &[Option<&'a str>]) -> CombinationKey<'a> {
        CombinationKey::from_slots(slots.to_vec())
    }

    #[test]
    fn test_order_one_counts() {
        let data = rows(&[&["10", "us"], &["90", "us"], &["5", "eu"]]);
        let counter = CombinationCounter::new(vec![1], 1);
        let counts = counter.count(&data);

        assert_eq!(counts.len(), 2);
        assert_eq!(counts[&key(&[Some("us")])], 2);
        assert_eq!(counts[&key(&[Some("eu")])], 1);
    }

    #[test]
    fn test_order_two_counts() {
        let data = rows(&[&["us", "v1"], &["us", "v2"], &["us", "v1"]]);
        let counts = CombinationCounter::new(vec![0, 1], 2).count(&data);

        assert_eq!(counts[&key(&[Some("us"), None])], 3);
        assert_eq!(counts[&key(&[None, Some("v1")])], 2);
        assert_eq!(counts[&key(&[Some("us"), Some("v1")])], 2);
        assert_eq!(counts[&key(&[Some("us"), Some("v2")])], 1);
        assert_eq!(counts.len(), 5);
    }

    #[test]
    fn test_order_three_counts() {
        let data = rows(&[&["a1", "b1", "c1"], &["a1", "b1", "c2"]]);
        let counts = CombinationCounter::new(vec![0, 1, 2], 3).count(&data);

        assert_eq!(counts[&key(&[Some("a1"), Some("b1"), None])], 2);
        assert_eq!(counts[&key(&[Some("a1"), Some("b1"), Some("c1")])], 1);
        assert_eq!(counts[&key(&[Some("a1"), Some("b1"), Some("c2")])], 1);
        assert!(counts.keys().all(|k| (1..=3).contains(&k.order())));
    }

    #[test]
    fn test_max_order_is_clamped() {
        assert_eq!(CombinationCounter::new(vec![0, 1, 2, 3], 5).max_order(), 3);
        assert_eq!(CombinationCounter::new(vec![0], 0).max_order(), 1);
    }

    #[test]
    fn test_order_capped_by_max_order() {
        let data = rows(&[&["a", "b", "c"]]);
        let counts = CombinationCounter::new(vec![0, 1, 2], 2).count(&data);
        // 3 singles + 3 pairs
        assert_eq!(counts.len(), 6);
        assert!(counts.keys().all(|k| k.order() <= 2));
    }

    #[test]
    fn test_literal_null_value_is_counted_as_value() {
        let data = rows(&[&["null", "x"]]);
        let counts = CombinationCounter::new(vec![0, 1], 2).count(&data);
        assert_eq!(counts[&key(&[Some("null"), None])], 1);
        assert_eq!(counts[&key(&[Some("null"), Some("x")])], 1);
    }

    #[test]
    fn test_empty_rows() {
        let counts = CombinationCounter::new(vec![0], 3).count(&[]);
        assert!(counts.is_empty());
    }

    #[test]
    fn test_short_rows_read_as_empty() {
        // a nested diff's output can be narrower than the table the
        // attribute positions were resolved against
        let data = rows(&[&["us"]]);
        let counts = CombinationCounter::new(vec![0, 4], 2).count(&data);

        assert_eq!(counts[&key(&[Some("us"), None])], 1);
        assert_eq!(counts[&key(&[None, Some("")])], 1);
        assert_eq!(counts[&key(&[Some("us"), Some("")])], 1);
    }
}
