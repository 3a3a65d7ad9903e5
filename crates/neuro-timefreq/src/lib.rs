//! Time-resolved phase, amplitude and frequency of neural oscillations
//!
//! Given a raw signal, a sampling rate and a frequency band, this crate
//! estimates how the band's oscillation evolves sample by sample:
//!
//! 1. **Bandpass** the signal with a windowed-sinc FIR filter
//!    ([`neuro_filter`]); samples within half a kernel of either edge become
//!    NaN.
//! 2. **Analytic signal** via the FFT Hilbert transform ([`hilbert_tf`]),
//!    computed separately on each NaN-free run.
//! 3. **Extract** phase (`arg z`), amplitude (`|z|`) or frequency (the scaled
//!    first difference of unwrapped phase).
//!
//! Invalid samples stay local at every step: a NaN in the input never turns
//! the whole output into NaN.
//!
//! # Frequency convention
//!
//! [`freq_by_time`] returns a series of the same length as the input. Sample
//! 0 is always NaN and sample `t` holds the phase advance between `t − 1` and
//! `t`, scaled to Hz. A sample is NaN whenever either phase sample is NaN.
//!
//! # Usage
//!
//! ```rust
//! use neuro_timefreq::{amp_by_time, freq_by_time, phase_by_time};
//!
//! let fs = 1000.0;
//! let signal: Vec<f64> = (0..3000)
//!     .map(|i| (2.0 * std::f64::consts::PI * 20.0 * i as f64 / fs).sin())
//!     .collect();
//!
//! let pha = phase_by_time(&signal, fs, (13.0, 30.0)).unwrap();
//! let amp = amp_by_time(&signal, fs, (13.0, 30.0)).unwrap();
//! let freq = freq_by_time(&signal, fs, (13.0, 30.0)).unwrap();
//!
//! assert_eq!(pha.len(), signal.len());
//! assert!(amp[1500] > 0.9);
//! assert!((freq[1500] - 20.0).abs() < 0.5);
//! ```

pub mod extract;
pub mod params;
pub mod pipeline;

pub use extract::{amplitude, frequency, phase, unwrap_phase};
pub use params::TimeFrequencyParameters;
pub use pipeline::{TimeFrequency, TimeFrequencyResult};

use neuro_core::{FrequencyRange, Result};

/// Instantaneous phase of the `f_range` oscillation with default parameters
///
/// See [`TimeFrequency::phase_by_time`].
pub fn phase_by_time(
    signal: &[f64],
    fs: f64,
    f_range: impl Into<FrequencyRange>,
) -> Result<Vec<f64>> {
    TimeFrequency::default().phase_by_time(signal, fs, f_range)
}

/// Instantaneous amplitude of the `f_range` oscillation with default parameters
///
/// See [`TimeFrequency::amp_by_time`].
pub fn amp_by_time(
    signal: &[f64],
    fs: f64,
    f_range: impl Into<FrequencyRange>,
) -> Result<Vec<f64>> {
    TimeFrequency::default().amp_by_time(signal, fs, f_range)
}

/// Instantaneous frequency of the `f_range` oscillation with default parameters
///
/// See [`TimeFrequency::freq_by_time`].
pub fn freq_by_time(
    signal: &[f64],
    fs: f64,
    f_range: impl Into<FrequencyRange>,
) -> Result<Vec<f64>> {
    TimeFrequency::default().freq_by_time(signal, fs, f_range)
}
