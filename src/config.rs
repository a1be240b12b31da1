//! Construction parameters for rolling structures

use crate::traits::{Result, StatsError};

/// Configuration for a [`RollingOrderStats`](crate::rolling::RollingOrderStats)
///
/// `capacity: None` tracks every value ever added ("running" mode);
/// `capacity: Some(k)` keeps only the `k` most recent values ("moving" mode).
///
/// # Example
///
/// ```
/// use rollstats::config::RollingConfig;
///
/// assert!(RollingConfig::bounded(64).validate().is_ok());
/// assert!(RollingConfig::bounded(0).validate().is_err());
/// assert_eq!(RollingConfig::default(), RollingConfig::unbounded());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RollingConfig {
    /// Maximum number of tracked values, `None` for unbounded
    #[cfg_attr(feature = "serde", serde(default))]
    pub capacity: Option<usize>,
}

impl RollingConfig {
    /// Track every value ever added
    pub fn unbounded() -> Self {
        Self { capacity: None }
    }

    /// Track only the `capacity` most recent values
    pub fn bounded(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity),
        }
    }

    /// Check the configuration is usable
    pub fn validate(&self) -> Result<()> {
        match self.capacity {
            Some(0) => Err(StatsError::configuration(
                "capacity must be positive when provided",
            )),
            _ => Ok(()),
        }
    }

    /// Whether this configuration evicts old values
    pub fn is_bounded(&self) -> bool {
        self.capacity.is_some()
    }
}
