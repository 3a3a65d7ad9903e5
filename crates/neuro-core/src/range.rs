//! Frequency ranges used to define pass and stop bands

use crate::error::{check_sampling_rate, Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered pair of frequencies `(f_lo, f_hi)` in Hz
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrequencyRange {
    /// Lower edge of the band in Hz
    pub f_lo: f64,
    /// Upper edge of the band in Hz
    pub f_hi: f64,
}

impl FrequencyRange {
    /// Create a new range without checking it against a sampling rate
    ///
    /// Use [`FrequencyRange::validate`] once the sampling rate is known.
    pub fn new(f_lo: f64, f_hi: f64) -> Self {
        Self { f_lo, f_hi }
    }

    /// Check that the band is usable at sampling rate `fs`
    ///
    /// Both edges must be positive and finite, `f_lo < f_hi`, and `f_hi` must
    /// lie strictly below the Nyquist frequency.
    pub fn validate(&self, fs: f64) -> Result<()> {
        check_sampling_rate(fs)?;
        let nyquist = fs / 2.0;
        let ok = self.f_lo.is_finite()
            && self.f_hi.is_finite()
            && self.f_lo > 0.0
            && self.f_lo < self.f_hi
            && self.f_hi < nyquist;
        if ok {
            Ok(())
        } else {
            Err(Error::invalid_range(self.f_lo, self.f_hi, fs))
        }
    }

    /// Width of the band in Hz
    pub fn bandwidth(&self) -> f64 {
        self.f_hi - self.f_lo
    }

    /// Arithmetic centre of the band in Hz
    pub fn center(&self) -> f64 {
        0.5 * (self.f_lo + self.f_hi)
    }

    /// Whether `freq` lies inside the closed band
    pub fn contains(&self, freq: f64) -> bool {
        freq >= self.f_lo && freq <= self.f_hi
    }
}

impl From<(f64, f64)> for FrequencyRange {
    fn from((f_lo, f_hi): (f64, f64)) -> Self {
        Self::new(f_lo, f_hi)
    }
}

impl fmt::Display for FrequencyRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) Hz", self.f_lo, self.f_hi)
    }
}
