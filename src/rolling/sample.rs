//! Identity-carrying samples

use crate::numeric::Numeric;
use core::cmp::Ordering;

/// A tracked value paired with its insertion sequence id
///
/// The id makes equal values distinguishable, so an ordered set can hold
/// duplicates and remove exactly the one that was evicted. Ordering is by
/// value first, then by id.
#[derive(Clone, Copy, Debug)]
pub struct Sample<T> {
    value: T,
    id: u64,
}

impl<T: Numeric> Sample<T> {
    /// Create a sample
    pub fn new(value: T, id: u64) -> Self {
        Self { value, id }
    }

    /// The tracked value
    #[inline]
    pub fn value(&self) -> T {
        self.value
    }

    /// The sequence id assigned on insertion
    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl<T: Numeric> PartialEq for Sample<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: Numeric> Eq for Sample<T> {}

impl<T: Numeric> PartialOrd for Sample<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Numeric> Ord for Sample<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value
            .total_cmp(&other.value)
            .then_with(|| self.id.cmp(&other.id))
    }
}
