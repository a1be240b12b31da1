//! FIFO eviction window for bounded mode

use super::sample::Sample;
use crate::numeric::Numeric;

#[cfg(feature = "std")]
use std::collections::VecDeque;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::collections::VecDeque;

/// Insertion-ordered queue of the samples currently tracked
///
/// The window never holds more than `capacity` samples; the caller evicts
/// with [`pop_oldest`](Self::pop_oldest) before pushing into a full window.
#[derive(Clone, Debug)]
pub struct EvictionWindow<T: Numeric> {
    capacity: usize,
    samples: VecDeque<Sample<T>>,
}

impl<T: Numeric> EvictionWindow<T> {
    /// Create a window; `capacity` is validated by the owner
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            samples: VecDeque::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.samples.len() >= self.capacity
    }

    /// Append the newest sample
    pub fn push(&mut self, sample: Sample<T>) {
        debug_assert!(!self.is_full(), "push into a full eviction window");
        self.samples.push_back(sample);
    }

    /// Remove and return the oldest sample
    pub fn pop_oldest(&mut self) -> Option<Sample<T>> {
        self.samples.pop_front()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Samples from oldest to newest
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Sample<T>> + '_ {
        self.samples.iter()
    }

    pub(crate) fn allocated(&self) -> usize {
        self.samples.capacity()
    }
}
