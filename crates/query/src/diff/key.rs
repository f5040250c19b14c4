//! Combination keys.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

/// Text written for an unset slot when a key becomes an output row.
pub const UNSET_MARKER: &str = "null";

/// A partial assignment of the attribute columns.
///
/// Slot `j` holds the value of the `j`-th attribute column, or `None` when the
/// combination leaves that column free. A key with `k` set slots is a `k`-way
/// combination. Keys borrow their values from the rows they were counted over.
///
/// Ordering is structural: slot by slot, with an unset slot ordered before any
/// value. An unset slot never equals a value, including the text `"null"`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CombinationKey<'a> {
    slots: Vec<Option<&'a str>>,
}

impl<'a> CombinationKey<'a> {
    /// Creates a key with every slot unset.
    pub fn unset(width: usize) -> Self {
        Self {
            slots: vec![None; width],
        }
    }

    /// Creates a key from explicit slots.
    pub fn from_slots(slots: Vec<Option<&'a str>>) -> Self {
        Self { slots }
    }

    /// Returns a copy of this key with slot `position` set to `value`.
    pub fn with(&self, position: usize, value: &'a str) -> Self {
        let mut key = self.clone();
        key.slots[position] = Some(value);
        key
    }

    /// Returns the slots.
    #[inline]
    pub fn slots(&self) -> &[Option<&'a str>] {
        &self.slots
    }

    /// Returns the number of slots, set or not.
    #[inline]
    pub fn width(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of set slots.
    pub fn order(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Renders the slots as output cells, writing `UNSET_MARKER` for unset
    /// slots.
    pub fn to_cells(&self) -> Vec<String> {
        self.slots
            .iter()
            .map(|slot| String::from(slot.unwrap_or(UNSET_MARKER)))
            .collect()
    }
}
