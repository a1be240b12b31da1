//! Coarse equal-width histogram of the tracked values
//!
//! The value range `[min, max]` is padded by a tiny epsilon and cut into
//! `steps` equal-width buckets. Each non-empty bucket reports its count and
//! the exact median of its members as a representative value.
//!
//! Buckets are keyed by index, so two buckets whose medians happen to be
//! equal stay separate.

use core::cmp::Ordering;

use super::engine::RollingOrderStats;
use crate::math;
use crate::numeric::Numeric;
use crate::statistics::median_of_sorted;

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Relative padding added to the covered range
const RELATIVE_EPSILON: f64 = 1e-10;

/// One non-empty bucket of a [`Distribution`]
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Bucket<T> {
    /// Position in `0..steps`
    pub index: usize,
    /// Inclusive lower edge
    pub lower_bound: T,
    /// Exclusive upper edge
    pub upper_bound: T,
    /// Median of the values that fell into this bucket
    pub representative: T,
    /// Number of values in this bucket
    pub count: usize,
}

/// Histogram of a [`RollingOrderStats`] snapshot
///
/// # Example
///
/// ```
/// use rollstats::rolling::RollingOrderStats;
///
/// let mut stats = RollingOrderStats::unbounded();
/// stats.add_values([1.0, 2.0, 3.0, 10.0]).unwrap();
///
/// let histogram = stats.distribution(3);
/// let pairs: Vec<(f64, usize)> = histogram.representatives().collect();
/// assert_eq!(pairs, vec![(2.0, 3), (10.0, 1)]);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Distribution<T> {
    steps: usize,
    buckets: Vec<Bucket<T>>,
}

impl<T: Numeric> Distribution<T> {
    /// Bucket the current contents of `source` into `steps` ranges
    ///
    /// `steps` of zero is treated as one. An empty source gives an empty
    /// distribution.
    pub fn generate(source: &RollingOrderStats<T>, steps: usize) -> Self {
        let sorted: Vec<T> = source.iter().collect();
        Self::from_sorted(&sorted, steps)
    }

    /// Bucket an ascending slice into `steps` ranges
    pub fn from_sorted(sorted: &[T], steps: usize) -> Self {
        let steps = steps.max(1);
        let mut buckets = Vec::new();

        let (Some(&min), Some(&max)) = (sorted.first(), sorted.last()) else {
            return Self { steps, buckets };
        };
        // ascending input, so the covered range is never negative
        let coverage = T::sub(max, min);
        let mut epsilon = T::scale(coverage, RELATIVE_EPSILON);
        if epsilon.total_cmp(&T::smallest_positive()) == Ordering::Less {
            epsilon = T::smallest_positive();
        }
        let span = T::add(coverage, epsilon);

        // sorted input means indices never decrease, so buckets are runs
        let mut run_start = 0;
        let mut run_index = 0;
        for (i, &value) in sorted.iter().enumerate() {
            let fraction = T::ratio(T::sub(value, min), span);
            let index = math::bucket_index(fraction, steps).max(run_index);
            if index != run_index {
                buckets.extend(Self::bucket(&sorted[run_start..i], run_index, min, span, steps));
                run_start = i;
                run_index = index;
            }
        }
        buckets.extend(Self::bucket(&sorted[run_start..], run_index, min, span, steps));

        Self { steps, buckets }
    }

    fn bucket(members: &[T], index: usize, min: T, span: T, steps: usize) -> Option<Bucket<T>> {
        let representative = median_of_sorted(members)?;
        let edge = |i: usize| T::add(min, T::scale(span, i as f64 / steps as f64));
        Some(Bucket {
            index,
            lower_bound: edge(index),
            upper_bound: edge(index + 1),
            representative,
            count: members.len(),
        })
    }

    /// Number of buckets the range was cut into
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Non-empty buckets in ascending order
    pub fn buckets(&self) -> &[Bucket<T>] {
        &self.buckets
    }

    /// Number of non-empty buckets
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of bucketed values
    pub fn total_count(&self) -> usize {
        self.buckets.iter().map(|b| b.count).sum()
    }

    /// `(representative, count)` pairs in bucket order
    pub fn representatives(&self) -> impl Iterator<Item = (T, usize)> + '_ {
        self.buckets.iter().map(|b| (b.representative, b.count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats_with(values: &[f64]) -> RollingOrderStats<f64> {
        let mut stats = RollingOrderStats::unbounded();
        stats.add_values(values.iter().copied()).unwrap();
        stats
    }

    #[test]
    fn test_empty() {
        let stats: RollingOrderStats<f64> = RollingOrderStats::unbounded();
        let histogram = stats.distribution(10);
        assert!(histogram.is_empty());
        assert_eq!(histogram.total_count(), 0);
    }

    #[test]
    fn test_zero_steps_is_one_bucket() {
        let histogram = stats_with(&[1.0, 2.0, 3.0]).distribution(0);
        assert_eq!(histogram.steps(), 1);
        assert_eq!(histogram.len(), 1);
        assert_eq!(histogram.buckets()[0].count, 3);
        assert_eq!(histogram.buckets()[0].representative, 2.0);
    }

    #[test]
    fn test_maximum_stays_in_last_bucket() {
        let values: Vec<f64> = (1..=100).map(f64::from).collect();
        let histogram = stats_with(&values).distribution(10);
        assert_eq!(histogram.len(), 10);
        for (i, bucket) in histogram.buckets().iter().enumerate() {
            assert_eq!(bucket.index, i);
            assert_eq!(bucket.count, 10, "bucket {} has {}", i, bucket.count);
        }
        assert_eq!(histogram.buckets()[9].representative, 95.5);
        assert_eq!(histogram.total_count(), 100);
    }

    #[test]
    fn test_all_equal_values() {
        let histogram = stats_with(&[4.0; 6]).distribution(5);
        assert_eq!(histogram.len(), 1);
        let bucket = &histogram.buckets()[0];
        assert_eq!(bucket.index, 0);
        assert_eq!(bucket.count, 6);
        assert_eq!(bucket.representative, 4.0);
        assert!(!bucket.upper_bound.is_nan());
    }

    #[test]
    fn test_buckets_keyed_by_index() {
        let histogram = Distribution::from_sorted(&[0.0, 0.0, 10.0, 10.0], 2);
        assert_eq!(histogram.len(), 2);
        let histogram = Distribution::from_sorted(&[5.0, 5.0], 3);
        assert_eq!(histogram.len(), 1);
        assert_eq!(histogram.total_count(), 2);
    }

    #[test]
    fn test_bucket_bounds() {
        let histogram = Distribution::<f64>::from_sorted(&[0.0, 1.0, 2.0, 3.0], 2);
        let buckets = histogram.buckets();
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].lower_bound, 0.0);
        assert!((buckets[0].upper_bound - 1.5).abs() < 1e-6);
        assert_eq!(buckets[0].representative, 0.5);
        assert_eq!(buckets[1].representative, 2.5);
    }

    #[test]
    fn test_infinite_range_does_not_panic() {
        let histogram = Distribution::from_sorted(&[f64::NEG_INFINITY, 0.0, f64::INFINITY], 4);
        assert_eq!(histogram.total_count(), 3);
    }

    #[test]
    fn test_reflects_window() {
        let mut stats = RollingOrderStats::bounded(3).unwrap();
        stats.add_values([100.0, 1.0, 2.0, 3.0]).unwrap();
        let histogram = stats.distribution(4);
        assert_eq!(histogram.total_count(), 3);
        assert!(histogram.representatives().all(|(v, _)| v < 100.0));
    }

    #[test]
    fn test_f32_bucketing() {
        let histogram = Distribution::from_sorted(&[1.0_f32, 1.5, 9.0, 10.0], 2);
        assert_eq!(histogram.len(), 2);
        assert_eq!(histogram.buckets()[0].representative, 1.25);
        assert_eq!(histogram.buckets()[1].representative, 9.5);
    }

    #[cfg(feature = "decimal")]
    #[test]
    fn test_decimal_values_closer_than_f64_resolution() {
        use rust_decimal::Decimal;

        // 1e16 + 0.1 and 1e16 + 0.9 are the same f64
        let low = Decimal::new(100_000_000_000_000_001, 1);
        let high = Decimal::new(100_000_000_000_000_009, 1);

        let mut stats = RollingOrderStats::unbounded();
        stats.add_values([low, high]).unwrap();
        let histogram = stats.distribution(2);

        assert_eq!(histogram.len(), 2);
        let buckets = histogram.buckets();
        assert_eq!((buckets[0].index, buckets[0].representative), (0, low));
        assert_eq!((buckets[1].index, buckets[1].representative), (1, high));
        assert_eq!(buckets[0].lower_bound, low);
        assert!(buckets[0].upper_bound > low && buckets[0].upper_bound < high);
        assert!(buckets[1].upper_bound > high);
    }

    #[cfg(feature = "decimal")]
    #[test]
    fn test_decimal_extreme_range_does_not_panic() {
        use rust_decimal::Decimal;

        let histogram = Distribution::from_sorted(&[Decimal::MIN, Decimal::ZERO, Decimal::MAX], 4);
        assert_eq!(histogram.total_count(), 3);
        assert_eq!(histogram.buckets()[0].representative, Decimal::MIN);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize() {
        let histogram = Distribution::from_sorted(&[1.0, 2.0], 1);
        let json = serde_json::to_value(&histogram).unwrap();
        assert_eq!(json["steps"], 1);
        assert_eq!(json["buckets"][0]["count"], 2);
        assert_eq!(json["buckets"][0]["representative"], 1.5);
    }
}
