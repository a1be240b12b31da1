//! Median of a finite sequence
//!
//! The batch counterpart of the rolling structures: sort once, read the
//! middle. Used to pick a representative value for each distribution bucket.

use crate::numeric::Numeric;

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Median of an already ascending slice, `None` when empty
///
/// Even lengths average the two middle values.
pub fn median_of_sorted<T: Numeric>(sorted: &[T]) -> Option<T> {
    let len = sorted.len();
    if len == 0 {
        return None;
    }
    let mid = len / 2;
    if len % 2 == 0 {
        Some(T::midpoint(sorted[mid - 1], sorted[mid]))
    } else {
        Some(sorted[mid])
    }
}

/// Median of values in any order, `None` when empty or when a NaN is present
///
/// # Example
///
/// ```
/// use rollstats::statistics::median_of;
///
/// assert_eq!(median_of(&[5.0, 1.0, 9.0, 3.0]), Some(4.0));
/// assert_eq!(median_of::<f64>(&[]), None);
/// ```
pub fn median_of<T: Numeric>(values: &[T]) -> Option<T> {
    if values.iter().any(|v| v.is_nan()) {
        return None;
    }
    let mut sorted: Vec<T> = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    median_of_sorted(&sorted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_odd_and_even() {
        assert_eq!(median_of(&[3.0, 1.0, 2.0]), Some(2.0));
        assert_eq!(median_of(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
        assert_eq!(median_of(&[7.5]), Some(7.5));
    }

    #[test]
    fn test_empty_and_nan() {
        assert_eq!(median_of::<f64>(&[]), None);
        assert_eq!(median_of_sorted::<f64>(&[]), None);
        assert_eq!(median_of(&[1.0, f64::NAN, 2.0]), None);
    }

    #[test]
    fn test_sorted_input_not_resorted() {
        assert_eq!(median_of_sorted(&[1.0, 2.0, 10.0, 20.0]), Some(6.0));
    }
}
