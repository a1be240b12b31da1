//! Numeric value types accepted by the rolling structures
//!
//! Rolling order statistics need a total order, averaging of two neighbours,
//! linear interpolation, and enough arithmetic to cut the value range into
//! equal-width buckets. [`Numeric`] captures exactly that so the same engine
//! serves IEEE floats and (with the `decimal` feature) fixed-point decimals.
//!
//! All arithmetic stays in the value type. Only the position of a value
//! inside the range is handed out as an `f64` ratio.

use core::cmp::Ordering;
use core::fmt::Debug;

/// A value that can be ordered, averaged, interpolated and bucketed
pub trait Numeric: Copy + PartialOrd + Debug {
    /// Total order used for sorting and identity inside partitions
    fn total_cmp(&self, other: &Self) -> Ordering;

    /// True for values that break total ordering and must be rejected
    fn is_nan(&self) -> bool {
        false
    }

    /// Average of two values (even-count median)
    fn midpoint(a: Self, b: Self) -> Self;

    /// Linear interpolation, `low` at a weight of 0 and `high` at 1
    fn interpolate(low: Self, high: Self, weight: f64) -> Self;

    /// `a + b`, saturating where the type cannot represent the result
    fn add(a: Self, b: Self) -> Self;

    /// `a - b`, saturating where the type cannot represent the result
    fn sub(a: Self, b: Self) -> Self;

    /// `self * factor`
    fn scale(self, factor: f64) -> Self;

    /// Smallest strictly positive value used to pad an empty range
    fn smallest_positive() -> Self;

    /// `num / den` as an `f64`
    fn ratio(num: Self, den: Self) -> f64;
}

impl Numeric for f64 {
    #[inline]
    fn total_cmp(&self, other: &Self) -> Ordering {
        f64::total_cmp(self, other)
    }

    #[inline]
    fn is_nan(&self) -> bool {
        f64::is_nan(*self)
    }

    #[inline]
    fn midpoint(a: Self, b: Self) -> Self {
        let sum = a + b;
        if sum.is_finite() {
            sum / 2.0
        } else {
            a * 0.5 + b * 0.5
        }
    }

    #[inline]
    fn interpolate(low: Self, high: Self, weight: f64) -> Self {
        low * (1.0 - weight) + high * weight
    }

    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a + b
    }

    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a - b
    }

    #[inline]
    fn scale(self, factor: f64) -> Self {
        self * factor
    }

    #[inline]
    fn smallest_positive() -> Self {
        // normal, not subnormal: dividing a subnormal span underflows to zero
        f64::MIN_POSITIVE
    }

    #[inline]
    fn ratio(num: Self, den: Self) -> f64 {
        num / den
    }
}

impl Numeric for f32 {
    #[inline]
    fn total_cmp(&self, other: &Self) -> Ordering {
        f32::total_cmp(self, other)
    }

    #[inline]
    fn is_nan(&self) -> bool {
        f32::is_nan(*self)
    }

    #[inline]
    fn midpoint(a: Self, b: Self) -> Self {
        let sum = a + b;
        if sum.is_finite() {
            sum / 2.0
        } else {
            a * 0.5 + b * 0.5
        }
    }

    #[inline]
    fn interpolate(low: Self, high: Self, weight: f64) -> Self {
        (low as f64 * (1.0 - weight) + high as f64 * weight) as f32
    }

    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a + b
    }

    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a - b
    }

    #[inline]
    fn scale(self, factor: f64) -> Self {
        (self as f64 * factor) as f32
    }

    #[inline]
    fn smallest_positive() -> Self {
        f32::MIN_POSITIVE
    }

    #[inline]
    fn ratio(num: Self, den: Self) -> f64 {
        num as f64 / den as f64
    }
}

#[cfg(feature = "decimal")]
#[cfg_attr(docsrs, doc(cfg(feature = "decimal")))]
impl Numeric for rust_decimal::Decimal {
    #[inline]
    fn total_cmp(&self, other: &Self) -> Ordering {
        Ord::cmp(self, other)
    }

    #[inline]
    fn midpoint(a: Self, b: Self) -> Self {
        use rust_decimal::Decimal;

        if a == b {
            return a;
        }
        match a.checked_add(b) {
            Some(sum) => sum / Decimal::TWO,
            None => (a / Decimal::TWO).saturating_add(b / Decimal::TWO),
        }
    }

    /// Computed as `low + (high - low) * weight` so equal ends round-trip
    fn interpolate(low: Self, high: Self, weight: f64) -> Self {
        if weight <= 0.0 {
            return low;
        }
        if weight >= 1.0 {
            return high;
        }
        high.checked_sub(low)
            .map(|span| Numeric::scale(span, weight))
            .and_then(|offset| low.checked_add(offset))
            .unwrap_or(low)
    }

    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a.saturating_add(b)
    }

    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a.saturating_sub(b)
    }

    fn scale(self, factor: f64) -> Self {
        use rust_decimal::prelude::FromPrimitive;
        use rust_decimal::Decimal;

        Decimal::from_f64(factor)
            .and_then(|f| self.checked_mul(f))
            .unwrap_or(Decimal::ZERO)
    }

    #[inline]
    fn smallest_positive() -> Self {
        rust_decimal::Decimal::new(1, 28)
    }

    fn ratio(num: Self, den: Self) -> f64 {
        use rust_decimal::prelude::ToPrimitive;

        num.checked_div(den)
            .and_then(|r| r.to_f64())
            .unwrap_or(0.0)
    }
}
