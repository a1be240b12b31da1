//! Ordered multiset of samples
//!
//! One half of the two-partition median structure. Backed by a `BTreeSet`,
//! which gives O(log n) insert, remove, minimum and maximum without any
//! reversed-comparator tricks.

use super::sample::Sample;
use crate::numeric::Numeric;

#[cfg(feature = "std")]
use std::collections::BTreeSet;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::collections::BTreeSet;

/// Samples kept in `(value, id)` order
#[derive(Clone, Debug)]
pub struct Partition<T: Numeric> {
    samples: BTreeSet<Sample<T>>,
}

impl<T: Numeric> Default for Partition<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Numeric> Partition<T> {
    /// Create an empty partition
    pub fn new() -> Self {
        Self {
            samples: BTreeSet::new(),
        }
    }

    /// Insert a sample; ids are unique so this never replaces an existing entry
    pub fn insert(&mut self, sample: Sample<T>) {
        let inserted = self.samples.insert(sample);
        debug_assert!(inserted, "duplicate sample id {}", sample.id());
    }

    /// Remove the exact `(value, id)` sample, returning whether it was present
    pub fn remove(&mut self, sample: &Sample<T>) -> bool {
        self.samples.remove(sample)
    }

    pub fn min(&self) -> Option<&Sample<T>> {
        self.samples.first()
    }

    pub fn max(&self) -> Option<&Sample<T>> {
        self.samples.last()
    }

    pub fn pop_min(&mut self) -> Option<Sample<T>> {
        self.samples.pop_first()
    }

    pub fn pop_max(&mut self) -> Option<Sample<T>> {
        self.samples.pop_last()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Samples in ascending order
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Sample<T>> + '_ {
        self.samples.iter()
    }

    /// The sample at ascending position `rank`
    ///
    /// Walks from whichever end is nearer, so the cost is
    /// O(min(rank, len - rank)).
    pub fn nth(&self, rank: usize) -> Option<&Sample<T>> {
        let len = self.samples.len();
        if rank >= len {
            return None;
        }
        if rank <= len / 2 {
            self.samples.iter().nth(rank)
        } else {
            self.samples.iter().rev().nth(len - 1 - rank)
        }
    }
}
