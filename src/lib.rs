//! # Rollstats
//!
//! Exact rolling order statistics for Rust.
//!
//! Rollstats tracks a stream of numeric values and answers median,
//! percentile, extreme-value and coarse-distribution queries at any point,
//! either over everything seen so far or over a sliding window of the most
//! recent values. Results are exact: values are kept in two ordered halves
//! rather than summarized into a sketch.
//!
//! ## Features
//!
//! - **Rolling Median**: O(log n) insert and median with FIFO eviction
//! - **Percentiles**: linear interpolation between ranked neighbours
//! - **Distribution**: equal-width histogram with per-bucket medians
//! - **Generic Values**: `f64`, `f32`, and fixed-point decimals
//! - **no_std**: works with `alloc` only
//!
//! ## Quick Start
//!
//! ```rust
//! use rollstats::prelude::*;
//!
//! let mut window = RollingOrderStats::bounded(3).unwrap();
//! for value in [10.0, 20.0, 30.0, 40.0] {
//!     window.add(value).unwrap();
//! }
//!
//! // 10.0 has been evicted
//! assert_eq!(window.median().unwrap(), 30.0);
//! assert_eq!(window.percentile(0.0).unwrap(), window.min().unwrap());
//! ```
//!
//! ## Errors
//!
//! Every fallible operation returns [`Result`](traits::Result) with a
//! [`StatsError`](traits::StatsError): bad configuration, queries on an
//! empty structure, out-of-domain arguments (NaN values, percentiles outside
//! `[0, 1]`), and sequence-counter exhaustion.
//!
//! ## Logging
//!
//! Construction, eviction, rebalancing and rejected input are reported
//! through [`tracing`](https://docs.rs/tracing). Install a subscriber to
//! see them; nothing is emitted otherwise.
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support
//! - `serde`: Serialize configuration and distribution reports
//! - `decimal`: [`Numeric`](numeric::Numeric) for `rust_decimal::Decimal`
//! - `full`: Enable all of the above

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Core traits always available
pub mod traits;

pub mod config;
pub mod numeric;
pub mod rolling;
pub mod statistics;

mod math;

pub mod prelude {
    pub use crate::config::RollingConfig;
    pub use crate::numeric::Numeric;
    pub use crate::rolling::{Bucket, Distribution, RollingOrderStats};
    pub use crate::traits::{OrderStatistics, RollingStatistic, StatsError};
}

pub use config::RollingConfig;
pub use rolling::{Distribution, RollingOrderStats};
pub use traits::{OrderStatistics, Result, RollingStatistic, StatsError};
