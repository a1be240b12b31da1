//! Math function wrappers for std/no_std compatibility
//!
//! Uses standard library math when available, falls back to libm for no_std.

#[cfg(feature = "std")]
#[inline]
pub fn floor(x: f64) -> f64 {
    x.floor()
}

#[cfg(not(feature = "std"))]
#[inline]
pub fn floor(x: f64) -> f64 {
    libm::floor(x)
}

/// Bucket position `floor(fraction * buckets)` clamped into `[0, buckets - 1]`.
///
/// `fraction` is the offset of a value inside the padded range divided by the
/// width of that range. Non-finite or negative positions land in the nearest
/// edge bucket.
#[inline]
pub fn bucket_index(fraction: f64, buckets: usize) -> usize {
    let last = buckets.saturating_sub(1);
    let position = floor(fraction * buckets as f64);
    if position.is_nan() || position <= 0.0 {
        0
    } else if position >= last as f64 {
        last
    } else {
        position as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor() {
        assert_eq!(floor(2.7), 2.0);
        assert_eq!(floor(-0.5), -1.0);
    }

    #[test]
    fn test_bucket_index_clamps() {
        assert_eq!(bucket_index(0.0, 4), 0);
        assert_eq!(bucket_index(0.6, 4), 2);
        assert_eq!(bucket_index(0.999_999, 4), 3);
        assert_eq!(bucket_index(2.5, 4), 3);
        assert_eq!(bucket_index(-0.1, 4), 0);
        assert_eq!(bucket_index(f64::NAN, 4), 0);
        assert_eq!(bucket_index(f64::INFINITY, 4), 3);
    }
}
