//! Exact rolling median and percentiles
//!
//! Values are split across two ordered partitions: `lower` holds the smaller
//! half and `upper` the larger half, with `lower` never behind and never more
//! than one sample ahead. The median is read off the partition boundary;
//! percentiles index into the logical concatenation `lower ++ upper`.
//!
//! In bounded mode an [`EvictionWindow`] remembers insertion order so the
//! oldest sample can be removed from whichever partition holds it.
//!
//! # Complexity
//!
//! | operation            | cost                                   |
//! |----------------------|----------------------------------------|
//! | `add`                | O(log n)                               |
//! | `median`/`min`/`max` | O(log n)                               |
//! | `percentile(p)`      | O(min(k, n − k)) for the bracketing rank k, O(n) worst case |
//! | `distribution`       | O(n)                                   |
//!
//! # Thread Safety
//!
//! No internal synchronization. Wrap the whole structure (not its parts) in a
//! `Mutex` or `RwLock` to share it; rebalancing touches both partitions.

use super::distribution::Distribution;
use super::partition::Partition;
use super::sample::Sample;
use super::window::EvictionWindow;
use crate::config::RollingConfig;
use crate::math;
use crate::numeric::Numeric;
use crate::traits::{OrderStatistics, Result, RollingStatistic, StatsError};
use core::cmp::Ordering;

#[cfg(not(feature = "std"))]
extern crate alloc;

// Helper macro for format! in both std and no_std
macro_rules! fmt {
    ($($arg:tt)*) => {{
        #[cfg(feature = "std")]
        { format!($($arg)*) }
        #[cfg(not(feature = "std"))]
        { alloc::format!($($arg)*) }
    }};
}

/// Exact order statistics over all values, or over the most recent `capacity`
///
/// # Example
///
/// ```
/// use rollstats::rolling::RollingOrderStats;
/// use rollstats::traits::{OrderStatistics, RollingStatistic};
///
/// let mut stats = RollingOrderStats::bounded(3).unwrap();
/// for value in [10.0, 20.0, 30.0, 40.0] {
///     stats.add(value).unwrap();
/// }
///
/// // 10.0 was evicted; the window is [20, 30, 40]
/// assert_eq!(stats.median().unwrap(), 30.0);
/// assert_eq!(stats.min().unwrap(), 20.0);
/// assert_eq!(stats.percentile(0.25).unwrap(), 25.0);
/// ```
#[derive(Clone, Debug)]
pub struct RollingOrderStats<T: Numeric> {
    /// Smaller half; its maximum is the lower median
    lower: Partition<T>,
    /// Larger half
    upper: Partition<T>,
    /// Present only in bounded mode
    window: Option<EvictionWindow<T>>,
    /// Id for the next inserted sample
    next_id: u64,
}

impl<T: Numeric> Default for RollingOrderStats<T> {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl<T: Numeric> RollingOrderStats<T> {
    /// Create a structure, bounded when `capacity` is given
    ///
    /// Fails with [`StatsError::Configuration`] for `Some(0)`.
    pub fn new(capacity: Option<usize>) -> Result<Self> {
        Self::with_config(RollingConfig { capacity })
    }

    /// Create a structure from a validated configuration
    pub fn with_config(config: RollingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    /// Track every value ever added
    pub fn unbounded() -> Self {
        Self::from_valid_config(RollingConfig::unbounded())
    }

    fn from_valid_config(config: RollingConfig) -> Self {
        tracing::debug!(capacity = ?config.capacity, "creating rolling order statistics");
        Self {
            lower: Partition::new(),
            upper: Partition::new(),
            window: config.capacity.map(EvictionWindow::new),
            next_id: 0,
        }
    }

    /// Track only the `capacity` most recent values
    pub fn bounded(capacity: usize) -> Result<Self> {
        Self::with_config(RollingConfig::bounded(capacity))
    }

    /// Window size in bounded mode, `None` when unbounded
    pub fn capacity(&self) -> Option<usize> {
        self.window.as_ref().map(EvictionWindow::capacity)
    }

    /// The configuration this structure was built with
    pub fn config(&self) -> RollingConfig {
        RollingConfig {
            capacity: self.capacity(),
        }
    }

    /// Bounded and holding `capacity` values, so the next add evicts
    pub fn is_full(&self) -> bool {
        self.window.as_ref().is_some_and(EvictionWindow::is_full)
    }

    /// True iff at least one value is tracked
    pub fn contains_values(&self) -> bool {
        !self.is_empty()
    }

    /// Sequence id the next inserted value will receive
    pub fn next_sequence_id(&self) -> u64 {
        self.next_id
    }

    /// Sizes of the (lower, upper) partitions
    pub fn partition_sizes(&self) -> (usize, usize) {
        (self.lower.len(), self.upper.len())
    }

    /// Add values in order, stopping at the first error
    ///
    /// Values before the failing one remain tracked.
    pub fn add_values<I>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        values.into_iter().try_for_each(|value| self.add(value))
    }

    /// Tracked values in ascending order
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.lower
            .iter()
            .chain(self.upper.iter())
            .map(|sample| sample.value())
    }

    /// Tracked values oldest first; `None` when unbounded
    pub fn window_values(&self) -> Option<impl Iterator<Item = T> + '_> {
        self.window
            .as_ref()
            .map(|window| window.iter().map(|sample| sample.value()))
    }

    /// Spread between the 75th and 25th percentiles
    pub fn interquartile_range(&self) -> Result<T> {
        let q1 = self.percentile(0.25)?;
        let q3 = self.percentile(0.75)?;
        Ok(T::sub(q3, q1))
    }

    /// Bucket the tracked values into `steps` equal-width ranges
    pub fn distribution(&self, steps: usize) -> Distribution<T> {
        Distribution::generate(self, steps)
    }

    /// Value at ascending position `rank` across `lower ++ upper`
    fn value_at(&self, rank: usize) -> Result<T> {
        let lower_len = self.lower.len();
        let sample = if rank < lower_len {
            self.lower.nth(rank)
        } else {
            self.upper.nth(rank - lower_len)
        };
        sample.map(Sample::value).ok_or(StatsError::EmptyState)
    }

    fn evict_oldest(&mut self) {
        let Some(window) = self.window.as_mut() else {
            return;
        };
        if !window.is_full() {
            return;
        }
        if let Some(oldest) = window.pop_oldest() {
            if !self.lower.remove(&oldest) {
                let removed = self.upper.remove(&oldest);
                debug_assert!(removed, "evicted sample {} not in any partition", oldest.id());
            }
            tracing::trace!(id = oldest.id(), "evicted oldest sample");
        }
        self.rebalance();
    }

    /// Restore `|lower| - |upper|` to 0 or 1
    fn rebalance(&mut self) {
        while self.lower.len() > self.upper.len() + 1 {
            let Some(sample) = self.lower.pop_max() else {
                break;
            };
            tracing::trace!(id = sample.id(), "moving lower maximum to upper partition");
            self.upper.insert(sample);
        }
        while self.upper.len() > self.lower.len() {
            let Some(sample) = self.upper.pop_min() else {
                break;
            };
            tracing::trace!(id = sample.id(), "moving upper minimum to lower partition");
            self.lower.insert(sample);
        }
    }

    #[cfg(test)]
    fn invariants_hold(&self) -> bool {
        let (lower, upper) = self.partition_sizes();
        let balanced = lower == upper || lower == upper + 1;
        let ordered = match (self.lower.max(), self.upper.min()) {
            (Some(l), Some(u)) => l.value().total_cmp(&u.value()) != Ordering::Greater,
            _ => true,
        };
        let windowed = self
            .window
            .as_ref()
            .map_or(true, |w| w.len() == lower + upper && w.len() <= w.capacity());
        balanced && ordered && windowed
    }
}

impl<T: Numeric> RollingStatistic for RollingOrderStats<T> {
    type Value = T;

    fn add(&mut self, value: T) -> Result<()> {
        if value.is_nan() {
            tracing::warn!("rejected NaN value");
            return Err(StatsError::invalid_argument(
                "NaN cannot be placed in a total order",
            ));
        }
        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or_else(|| {
            tracing::warn!(id, "sequence id counter exhausted");
            StatsError::CounterExhausted
        })?;

        self.evict_oldest();

        let sample = Sample::new(value, id);
        let into_lower = match self.lower.max() {
            None => true,
            Some(max) => value.total_cmp(&max.value()) != Ordering::Greater,
        };
        if into_lower {
            self.lower.insert(sample);
        } else {
            self.upper.insert(sample);
        }
        if let Some(window) = self.window.as_mut() {
            window.push(sample);
        }

        self.rebalance();
        Ok(())
    }

    fn clear(&mut self) {
        self.lower.clear();
        self.upper.clear();
        if let Some(window) = self.window.as_mut() {
            window.clear();
        }
        self.next_id = 0;
        tracing::debug!(capacity = ?self.capacity(), "cleared rolling order statistics");
    }

    fn len(&self) -> usize {
        self.lower.len() + self.upper.len()
    }

    fn size_bytes(&self) -> usize {
        let window = self.window.as_ref().map_or(0, EvictionWindow::allocated);
        core::mem::size_of::<Self>() + (self.len() + window) * core::mem::size_of::<Sample<T>>()
    }
}

impl<T: Numeric> OrderStatistics for RollingOrderStats<T> {
    fn median(&self) -> Result<T> {
        let low = self.lower.max().ok_or(StatsError::EmptyState)?.value();
        if self.lower.len() == self.upper.len() {
            let high = self.upper.min().ok_or(StatsError::EmptyState)?.value();
            Ok(T::midpoint(low, high))
        } else {
            Ok(low)
        }
    }

    fn percentile(&self, p: f64) -> Result<T> {
        if !(0.0..=1.0).contains(&p) {
            tracing::warn!(p, "rejected percentile outside [0, 1]");
            return Err(StatsError::invalid_argument(fmt!(
                "percentile must be within [0, 1], got {}",
                p
            )));
        }
        if p == 0.0 {
            return self.min();
        }
        if p == 1.0 {
            return self.max();
        }

        let n = self.len();
        if n == 0 {
            return Err(StatsError::EmptyState);
        }
        let rank = (n - 1) as f64 * p;
        let floor = math::floor(rank);
        let weight = rank - floor;
        let lower_index = floor as usize;

        let low = self.value_at(lower_index)?;
        if weight == 0.0 || lower_index + 1 >= n {
            return Ok(low);
        }
        let high = self.value_at(lower_index + 1)?;
        Ok(T::interpolate(low, high, weight))
    }

    fn min(&self) -> Result<T> {
        self.lower
            .min()
            .map(Sample::value)
            .ok_or(StatsError::EmptyState)
    }

    fn max(&self) -> Result<T> {
        self.upper
            .max()
            .or_else(|| self.lower.max())
            .map(Sample::value)
            .ok_or(StatsError::EmptyState)
    }
}
