//! Core traits for rolling statistics
//!
//! Every rolling structure implements the base [`RollingStatistic`] trait,
//! with [`OrderStatistics`] layered on top for structures that can answer
//! rank-based queries (median, percentiles, extremes).

use core::fmt::Debug;

#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};

/// Errors raised by rolling statistics
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatsError {
    /// Constructor arguments are unusable (e.g. zero capacity)
    #[error("invalid configuration: {message}")]
    Configuration { message: String },

    /// A query needs at least one tracked value
    #[error("no values are being tracked")]
    EmptyState,

    /// An argument is outside its domain (NaN input, percentile outside [0, 1])
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// The per-instance sequence counter cannot issue another id
    #[error("sequence id counter exhausted; clear() the structure to reset it")]
    CounterExhausted,
}

impl StatsError {
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        StatsError::Configuration {
            message: message.into(),
        }
    }

    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        StatsError::InvalidArgument {
            message: message.into(),
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = core::result::Result<T, StatsError>;

/// Core trait for all rolling statistics
pub trait RollingStatistic: Clone + Debug {
    /// The type of value this statistic consumes
    type Value;

    /// Add a value, evicting the oldest one if the structure is bounded and full
    fn add(&mut self, value: Self::Value) -> Result<()>;

    /// Reset to the empty state, keeping configuration
    fn clear(&mut self);

    /// Number of values currently tracked
    fn len(&self) -> usize;

    /// Approximate memory usage in bytes
    fn size_bytes(&self) -> usize;

    /// Check if nothing is tracked
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Exact order-statistic queries over the tracked values
pub trait OrderStatistics: RollingStatistic {
    /// Median of the tracked values
    fn median(&self) -> Result<Self::Value>;

    /// Linearly interpolated percentile, `p` in `[0, 1]`
    ///
    /// p=0.5 agrees with the median
    fn percentile(&self, p: f64) -> Result<Self::Value>;

    /// Smallest tracked value
    fn min(&self) -> Result<Self::Value>;

    /// Largest tracked value
    fn max(&self) -> Result<Self::Value>;

    /// Several percentiles at once, failing on the first invalid rank
    fn percentiles(&self, ps: &[f64]) -> Result<Vec<Self::Value>> {
        ps.iter().map(|&p| self.percentile(p)).collect()
    }
}
