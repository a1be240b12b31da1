//! Batch statistics over finite sequences
//!
//! Helpers that work on a plain slice rather than a stream. The rolling
//! structures use them for per-bucket summaries.
//!
//! # Example
//!
//! ```
//! use rollstats::statistics::{median_of, median_of_sorted};
//!
//! assert_eq!(median_of(&[9.0, 1.0, 5.0]), Some(5.0));
//! assert_eq!(median_of_sorted(&[1.0, 2.0, 3.0, 4.0]), Some(2.5));
//! ```

mod median;

pub use median::{median_of, median_of_sorted};
