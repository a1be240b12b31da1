//! Exact rolling order statistics
//!
//! This module provides a two-partition structure that keeps every tracked
//! value, in sorted halves, so median and percentile queries are exact rather
//! than estimated. It runs either unbounded (every value ever added) or over
//! a sliding window of the most recent `capacity` values.
//!
//! # Types
//!
//! - [`RollingOrderStats`]: the engine (median, percentiles, min, max)
//! - [`Distribution`]: equal-width histogram of a snapshot
//! - [`Partition`], [`EvictionWindow`], [`Sample`]: building blocks
//!
//! # Example
//!
//! ```
//! use rollstats::rolling::RollingOrderStats;
//! use rollstats::traits::{OrderStatistics, RollingStatistic};
//!
//! let mut latencies = RollingOrderStats::bounded(1000).unwrap();
//!
//! for ms in [12.0, 15.0, 11.0, 80.0, 14.0] {
//!     latencies.add(ms).unwrap();
//! }
//!
//! assert_eq!(latencies.median().unwrap(), 14.0);
//! println!("p99: {}", latencies.percentile(0.99).unwrap());
//! ```

mod distribution;
mod engine;
mod partition;
mod sample;
mod window;

pub use distribution::{Bucket, Distribution};
pub use engine::RollingOrderStats;
pub use partition::Partition;
pub use sample::Sample;
pub use window::EvictionWindow;
