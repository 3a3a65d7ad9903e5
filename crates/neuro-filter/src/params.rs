//! Filter types and design parameters

use neuro_core::{check_sampling_rate, Error, FrequencyRange, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which frequencies a filter passes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PassType {
    /// Pass `(f_lo, f_hi)`, attenuate everything else
    Bandpass { f_lo: f64, f_hi: f64 },
    /// Attenuate `(f_lo, f_hi)`, pass everything else
    Bandstop { f_lo: f64, f_hi: f64 },
    /// Pass frequencies below `cutoff`
    Lowpass { cutoff: f64 },
    /// Pass frequencies above `cutoff`
    Highpass { cutoff: f64 },
}

impl PassType {
    /// Bandpass between `f_lo` and `f_hi` Hz
    pub fn bandpass(f_lo: f64, f_hi: f64) -> Self {
        Self::Bandpass { f_lo, f_hi }
    }

    /// Bandstop between `f_lo` and `f_hi` Hz
    pub fn bandstop(f_lo: f64, f_hi: f64) -> Self {
        Self::Bandstop { f_lo, f_hi }
    }

    /// Lowpass with a single cutoff in Hz
    pub fn lowpass(cutoff: f64) -> Self {
        Self::Lowpass { cutoff }
    }

    /// Highpass with a single cutoff in Hz
    pub fn highpass(cutoff: f64) -> Self {
        Self::Highpass { cutoff }
    }

    /// Short lowercase name, e.g. `"bandpass"`
    pub fn name(&self) -> &'static str {
        match self {
            PassType::Bandpass { .. } => "bandpass",
            PassType::Bandstop { .. } => "bandstop",
            PassType::Lowpass { .. } => "lowpass",
            PassType::Highpass { .. } => "highpass",
        }
    }

    /// Check the frequencies against the Nyquist frequency of `fs`
    pub fn validate(&self, fs: f64) -> Result<()> {
        check_sampling_rate(fs)?;
        match *self {
            PassType::Bandpass { f_lo, f_hi } | PassType::Bandstop { f_lo, f_hi } => {
                FrequencyRange::new(f_lo, f_hi).validate(fs)
            }
            PassType::Lowpass { cutoff } | PassType::Highpass { cutoff } => {
                if cutoff.is_finite() && cutoff > 0.0 && cutoff < fs / 2.0 {
                    Ok(())
                } else {
                    Err(Error::invalid_range(cutoff, cutoff, fs))
                }
            }
        }
    }

    /// Frequency that sets the kernel length when it is given in cycles
    pub fn reference_frequency(&self) -> f64 {
        match *self {
            PassType::Bandpass { f_lo, .. } | PassType::Bandstop { f_lo, .. } => f_lo,
            PassType::Lowpass { cutoff } | PassType::Highpass { cutoff } => cutoff,
        }
    }

    /// Ideal pass bands as fractions of the Nyquist frequency
    pub fn normalized_bands(&self, fs: f64) -> Vec<(f64, f64)> {
        let nyquist = fs / 2.0;
        match *self {
            PassType::Bandpass { f_lo, f_hi } => vec![(f_lo / nyquist, f_hi / nyquist)],
            PassType::Bandstop { f_lo, f_hi } => {
                vec![(0.0, f_lo / nyquist), (f_hi / nyquist, 1.0)]
            }
            PassType::Lowpass { cutoff } => vec![(0.0, cutoff / nyquist)],
            PassType::Highpass { cutoff } => vec![(cutoff / nyquist, 1.0)],
        }
    }

    /// Width in Hz of the band the filter is designed around
    ///
    /// This is the passband for bandpass and lowpass filters and the stopband
    /// for bandstop filters.
    pub fn band_width(&self, fs: f64) -> f64 {
        match *self {
            PassType::Bandpass { f_lo, f_hi } | PassType::Bandstop { f_lo, f_hi } => f_hi - f_lo,
            PassType::Lowpass { cutoff } => cutoff,
            PassType::Highpass { cutoff } => fs / 2.0 - cutoff,
        }
    }
}

impl From<FrequencyRange> for PassType {
    fn from(range: FrequencyRange) -> Self {
        PassType::Bandpass {
            f_lo: range.f_lo,
            f_hi: range.f_hi,
        }
    }
}

impl fmt::Display for PassType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PassType::Bandpass { f_lo, f_hi } | PassType::Bandstop { f_lo, f_hi } => {
                write!(f, "{} ({f_lo}, {f_hi}) Hz", self.name())
            }
            PassType::Lowpass { cutoff } | PassType::Highpass { cutoff } => {
                write!(f, "{} {cutoff} Hz", self.name())
            }
        }
    }
}

/// FIR design and application parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterParameters {
    /// Kernel length in cycles of the reference frequency
    pub n_cycles: f64,
    /// Kernel length in seconds; takes precedence over `n_cycles`
    pub n_seconds: Option<f64>,
    /// Set the samples within half a kernel of either edge to NaN
    pub remove_edge_artifacts: bool,
    /// Measure and log the transition bandwidth of the designed kernel
    pub compute_transition_band: bool,
}

impl Default for FilterParameters {
    fn default() -> Self {
        Self {
            n_cycles: 3.0,
            n_seconds: None,
            remove_edge_artifacts: true,
            compute_transition_band: true,
        }
    }
}

impl FilterParameters {
    /// Set the kernel length in cycles of the reference frequency
    pub fn with_cycles(mut self, n_cycles: f64) -> Self {
        self.n_cycles = n_cycles;
        self.n_seconds = None;
        self
    }

    /// Set the kernel length in seconds
    pub fn with_seconds(mut self, n_seconds: f64) -> Self {
        self.n_seconds = Some(n_seconds);
        self
    }

    /// Enable or disable edge-artifact invalidation
    pub fn with_edge_removal(mut self, remove: bool) -> Self {
        self.remove_edge_artifacts = remove;
        self
    }

    /// Enable or disable the transition band report
    pub fn with_transition_band(mut self, compute: bool) -> Self {
        self.compute_transition_band = compute;
        self
    }

    /// Number of taps for `pass_type` at sampling rate `fs`, always odd
    pub fn kernel_length(&self, fs: f64, pass_type: &PassType) -> Result<usize> {
        let raw = match self.n_seconds {
            Some(seconds) => {
                if !(seconds.is_finite() && seconds > 0.0) {
                    return Err(Error::InvalidParameter(format!(
                        "Filter length {seconds} s must be finite and positive"
                    )));
                }
                (fs * seconds).ceil()
            }
            None => {
                if !(self.n_cycles.is_finite() && self.n_cycles > 0.0) {
                    return Err(Error::InvalidParameter(format!(
                        "Filter length {} cycles must be finite and positive",
                        self.n_cycles
                    )));
                }
                (fs * self.n_cycles / pass_type.reference_frequency()).ceil()
            }
        };

        let n = (raw as usize).max(1);
        Ok(if n % 2 == 0 { n + 1 } else { n })
    }
}
