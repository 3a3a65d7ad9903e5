//! Filter → analytic signal → feature pipeline

use crate::extract::{amplitude, frequency, phase};
use crate::params::TimeFrequencyParameters;
use hilbert_tf::HilbertTransform;
use neuro_core::{nan::count_valid, Error, FrequencyRange, Result};
use neuro_filter::{filter, PassType};
use num_complex::Complex;
use tracing::{debug, instrument};

/// Phase, amplitude and frequency computed from one analytic signal
#[derive(Debug, Clone)]
pub struct TimeFrequencyResult {
    /// Instantaneous phase in radians, (−π, π]
    pub phase: Vec<f64>,
    /// Instantaneous amplitude
    pub amplitude: Vec<f64>,
    /// Instantaneous frequency in Hz; sample 0 is always NaN
    pub frequency: Vec<f64>,
}

impl TimeFrequencyResult {
    /// Number of samples in each series
    pub fn len(&self) -> usize {
        self.phase.len()
    }

    /// Whether the series are empty
    pub fn is_empty(&self) -> bool {
        self.phase.is_empty()
    }

    /// Number of non-NaN samples in the phase (and amplitude) series
    pub fn valid_samples(&self) -> usize {
        count_valid(&self.phase)
    }
}

/// Time-resolved phase, amplitude and frequency of a band-limited oscillation
///
/// Every method runs the same pipeline: bandpass the raw signal (edge
/// artifacts become NaN), compute the analytic signal on each NaN-free run,
/// then extract the requested feature. Nothing is cached between calls.
///
/// # Example
///
/// ```rust
/// use neuro_timefreq::{TimeFrequency, TimeFrequencyParameters};
///
/// let fs = 1000.0;
/// let signal: Vec<f64> = (0..3000)
///     .map(|i| (2.0 * std::f64::consts::PI * 20.0 * i as f64 / fs).sin())
///     .collect();
///
/// let tf = TimeFrequency::new(TimeFrequencyParameters::default());
/// let result = tf.compute(&signal, fs, (13.0, 30.0)).unwrap();
///
/// assert_eq!(result.len(), signal.len());
/// assert!(result.phase[0].is_nan());
/// assert!((result.amplitude[1500] - 1.0).abs() < 0.05);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TimeFrequency {
    params: TimeFrequencyParameters,
}

impl TimeFrequency {
    /// Create a pipeline with the given parameters
    pub fn new(params: TimeFrequencyParameters) -> Self {
        Self { params }
    }

    /// Pipeline parameters
    pub fn parameters(&self) -> &TimeFrequencyParameters {
        &self.params
    }

    fn hilbert(&self) -> HilbertTransform {
        HilbertTransform::new().with_padding(self.params.pad_to_power_of_two)
    }

    /// Bandpass `signal` to `f_range`
    pub fn filtered(
        &self,
        signal: &[f64],
        fs: f64,
        f_range: impl Into<FrequencyRange>,
    ) -> Result<Vec<f64>> {
        let f_range = f_range.into();
        f_range.validate(fs)?;
        if signal.is_empty() {
            return Err(Error::EmptySignal);
        }
        filter(signal, fs, PassType::from(f_range), &self.params.filter)
    }

    /// Analytic signal of `signal` band-limited to `f_range`
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidRange`] / [`Error::InvalidParameter`] for a bad band
    ///   or sampling rate
    /// - [`Error::EmptySignal`] for a zero-length signal
    /// - [`Error::SignalTooShort`] when the bandpass kernel exceeds the signal
    /// - [`Error::AllInvalid`] when no sample survives filtering
    pub fn analytic_by_time(
        &self,
        signal: &[f64],
        fs: f64,
        f_range: impl Into<FrequencyRange>,
    ) -> Result<Vec<Complex<f64>>> {
        self.analytic(signal, fs, f_range.into())
    }

    #[instrument(skip(self, signal), fields(len = signal.len()))]
    fn analytic(&self, signal: &[f64], fs: f64, f_range: FrequencyRange) -> Result<Vec<Complex<f64>>> {
        let filtered = self.filtered(signal, fs, f_range)?;
        debug!(
            "{} of {} samples valid after bandpass filtering",
            count_valid(&filtered),
            filtered.len()
        );
        self.hilbert().analytic_signal(&filtered)
    }

    /// Instantaneous phase of the `f_range` oscillation, in (−π, π]
    pub fn phase_by_time(
        &self,
        signal: &[f64],
        fs: f64,
        f_range: impl Into<FrequencyRange>,
    ) -> Result<Vec<f64>> {
        Ok(phase(&self.analytic_by_time(signal, fs, f_range)?))
    }

    /// Instantaneous amplitude of the `f_range` oscillation
    pub fn amp_by_time(
        &self,
        signal: &[f64],
        fs: f64,
        f_range: impl Into<FrequencyRange>,
    ) -> Result<Vec<f64>> {
        Ok(amplitude(&self.analytic_by_time(signal, fs, f_range)?))
    }

    /// Instantaneous frequency of the `f_range` oscillation in Hz
    ///
    /// Same length as `signal`; sample 0 is NaN and sample `t` is the phase
    /// advance from `t − 1` to `t`.
    pub fn freq_by_time(
        &self,
        signal: &[f64],
        fs: f64,
        f_range: impl Into<FrequencyRange>,
    ) -> Result<Vec<f64>> {
        let pha = self.phase_by_time(signal, fs, f_range)?;
        Ok(frequency(&pha, fs))
    }

    /// All three features from a single filter and Hilbert pass
    pub fn compute(
        &self,
        signal: &[f64],
        fs: f64,
        f_range: impl Into<FrequencyRange>,
    ) -> Result<TimeFrequencyResult> {
        let analytic = self.analytic_by_time(signal, fs, f_range)?;
        let pha = phase(&analytic);
        let frequency = frequency(&pha, fs);
        Ok(TimeFrequencyResult {
            amplitude: amplitude(&analytic),
            phase: pha,
            frequency,
        })
    }

    /// Run [`compute`](Self::compute) on independent signals
    ///
    /// Results are returned in input order. With the `parallel` feature the
    /// signals are processed on the rayon thread pool.
    pub fn compute_batch<S>(
        &self,
        signals: &[S],
        fs: f64,
        f_range: impl Into<FrequencyRange>,
    ) -> Vec<Result<TimeFrequencyResult>>
    where
        S: AsRef<[f64]> + Sync,
    {
        let f_range = f_range.into();
        debug!("Computing time-frequency features for {} signals", signals.len());

        #[cfg(feature = "parallel")]
        let results = {
            use rayon::prelude::*;
            signals
                .par_iter()
                .map(|s| self.compute(s.as_ref(), fs, f_range))
                .collect()
        };

        #[cfg(not(feature = "parallel"))]
        let results = signals
            .iter()
            .map(|s| self.compute(s.as_ref(), fs, f_range))
            .collect();

        results
    }
}
