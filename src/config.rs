//! Washer tuning parameters
//!
//! Values default to the factory constants and can be overridden when
//! building a [`DishWasher`](crate::app::service::DishWasher).

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Minimum remaining clean capacity (percent) the dirt filter must report
/// before a wash may start.  Readings below this mean the filter is too
/// clogged to circulate water safely.
pub const DEFAULT_MIN_FILTER_CAPACITY: f64 = 50.0;

/// Full scale of the filter capacity reading (a clean filter).
pub const FILTER_CAPACITY_FULL_SCALE: f64 = 100.0;

/// Core washer configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WasherConfig {
    /// Lowest acceptable filter capacity reading (0-100%)
    pub min_filter_capacity: f64,
}

impl Default for WasherConfig {
    fn default() -> Self {
        Self {
            min_filter_capacity: DEFAULT_MIN_FILTER_CAPACITY,
        }
    }
}

impl WasherConfig {
    /// Reject out-of-range values rather than clamping them.
    pub fn validate(&self) -> Result<()> {
        let t = self.min_filter_capacity;
        if !t.is_finite() || !(0.0..=FILTER_CAPACITY_FULL_SCALE).contains(&t) {
            return Err(Error::Config("min_filter_capacity must be within 0-100"));
        }
        Ok(())
    }

    /// True if `reading` is too low to wash.  NaN counts as too low.
    pub fn filter_too_dirty(&self, reading: f64) -> bool {
        reading.is_nan() || reading < self.min_filter_capacity
    }

    /// Compact binary form for storage.
    pub fn encode(&self) -> Result<Vec<u8>> {
        postcard::to_allocvec(self).map_err(|_| Error::Config("encode failed"))
    }

    /// Decode and validate a blob produced by [`encode`](Self::encode).
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let config: Self =
            postcard::from_bytes(bytes).map_err(|_| Error::Config("corrupted config blob"))?;
        config.validate()?;
        Ok(config)
    }
}
