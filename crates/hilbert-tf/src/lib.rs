//! # Hilbert Transform Library
//!
//! FFT-based analytic signals for band-limited neural recordings that may
//! contain invalid (NaN) samples.
//!
//! The Hilbert transform shifts the phase of every frequency component by 90
//! degrees. Pairing a real signal with its Hilbert transform gives the
//! *analytic signal* `z(t) = x(t) + j·H[x(t)]`, whose modulus is the
//! instantaneous amplitude and whose argument is the instantaneous phase.
//!
//! ## Mathematical Background
//!
//! In the frequency domain the analytic signal keeps only non-negative
//! frequencies. For an N-point FFT the bins are weighted by:
//! - k = 0 (DC): 1
//! - 0 < k < N/2 (positive frequencies): 2
//! - k = N/2 (Nyquist, even N only): 1
//! - remaining bins (negative frequencies): 0
//!
//! ## NaN Handling
//!
//! The transform is global: every output sample depends on every input
//! sample, so a single NaN would poison the whole result. Instead the input
//! is split into *valid runs* (maximal stretches of finite samples) and the
//! exact transform is computed on each run independently. NaN and infinite
//! inputs map to `NaN + NaN·j` and no other sample is affected. For a signal
//! whose only NaNs are filter edge artifacts this equals the transform of the
//! trimmed signal.
//!
//! ## Basic Usage
//!
//! ```rust
//! use hilbert_tf::HilbertTransform;
//!
//! // Filter edge artifacts at both ends
//! let mut signal: Vec<f64> = (0..256)
//!     .map(|i| (2.0 * std::f64::consts::PI * 5.0 * i as f64 / 256.0).cos())
//!     .collect();
//! signal[..8].fill(f64::NAN);
//! signal[248..].fill(f64::NAN);
//!
//! let analytic = HilbertTransform::new().analytic_signal(&signal).unwrap();
//! assert!(analytic[0].re.is_nan());
//! assert!(analytic[128].norm().is_finite());
//!
//! // Extract envelope
//! let envelope = hilbert_tf::envelope(&signal).unwrap();
//! assert_eq!(envelope.len(), 256);
//! ```

use neuro_core::{nan::valid_runs, Error, Result};
use num_complex::Complex;
use rustfft::FftPlanner;
use std::f64::consts::PI;
use tracing::debug;

pub use num_complex;

/// The invalid analytic sample
pub const NAN_COMPLEX: Complex<f64> = Complex::new(f64::NAN, f64::NAN);

/// FFT-based analytic signal estimator
///
/// The estimator holds only configuration, so one instance can be shared
/// freely between threads and calls.
///
/// ## Zero Padding
///
/// With padding enabled, each valid run of length `n` is zero-padded to
/// `2^(floor(log2 n) + 1)` samples before the FFT and the result is truncated
/// back to `n`. Power-of-two lengths are faster for long recordings with
/// awkward lengths, at the cost of slightly different values near the run
/// ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HilbertTransform {
    pad_to_power_of_two: bool,
}

impl HilbertTransform {
    /// Create an estimator that transforms each run at its exact length
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable power-of-two zero padding
    pub fn with_padding(mut self, pad_to_power_of_two: bool) -> Self {
        self.pad_to_power_of_two = pad_to_power_of_two;
        self
    }

    /// FFT length used for a valid run of `n` samples
    pub fn fft_length(&self, n: usize) -> usize {
        if self.pad_to_power_of_two && n > 0 {
            1usize << (n.ilog2() + 1)
        } else {
            n
        }
    }

    /// Compute the analytic signal of a real signal
    ///
    /// # Returns
    /// A complex signal of the same length whose real part reproduces the
    /// valid input samples and whose imaginary part is their Hilbert
    /// transform, computed per valid run. NaN and infinite inputs give
    /// `NaN + NaN·j`.
    ///
    /// # Errors
    /// - [`Error::EmptySignal`] if the signal has no samples
    /// - [`Error::AllInvalid`] if no sample is finite
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hilbert_tf::HilbertTransform;
    /// use std::f64::consts::PI;
    ///
    /// let n = 256;
    /// let omega = 2.0 * PI * 10.0 / n as f64;
    /// let signal: Vec<f64> = (0..n).map(|i| (omega * i as f64).cos()).collect();
    ///
    /// let analytic = HilbertTransform::new().analytic_signal(&signal).unwrap();
    ///
    /// // cos(ωt) + j·sin(ωt)
    /// for (i, z) in analytic.iter().enumerate() {
    ///     assert!((z.im - (omega * i as f64).sin()).abs() < 1e-9);
    /// }
    /// ```
    pub fn analytic_signal(&self, signal: &[f64]) -> Result<Vec<Complex<f64>>> {
        if signal.is_empty() {
            return Err(Error::EmptySignal);
        }
        let runs = valid_runs(signal);
        if runs.is_empty() {
            return Err(Error::all_invalid(signal.len()));
        }
        debug!(
            "Computing analytic signal over {} valid run(s) of {} samples",
            runs.len(),
            signal.len()
        );

        let mut analytic = vec![NAN_COMPLEX; signal.len()];
        // Runs of equal length reuse the plan cached by this planner
        let mut planner = FftPlanner::<f64>::new();
        for run in runs {
            let segment = self.analytic_run(&mut planner, &signal[run.clone()]);
            analytic[run].copy_from_slice(&segment);
        }
        Ok(analytic)
    }

    /// Analytic signal of a NaN-free segment
    fn analytic_run(&self, planner: &mut FftPlanner<f64>, segment: &[f64]) -> Vec<Complex<f64>> {
        let n = segment.len();
        let n_fft = self.fft_length(n);

        // Zero-pad the real input to the FFT length
        let mut spectrum: Vec<Complex<f64>> = segment
            .iter()
            .map(|&x| Complex::new(x, 0.0))
            .chain(std::iter::repeat(Complex::new(0.0, 0.0)))
            .take(n_fft)
            .collect();

        planner.plan_fft_forward(n_fft).process(&mut spectrum);

        for (k, bin) in spectrum.iter_mut().enumerate() {
            *bin *= analytic_gain(k, n_fft);
        }

        planner.plan_fft_inverse(n_fft).process(&mut spectrum);

        // RustFFT leaves the inverse unnormalized
        let norm_factor = 1.0 / n_fft as f64;
        spectrum.truncate(n);
        spectrum.iter_mut().for_each(|z| *z *= norm_factor);
        spectrum
    }

    /// Compute the Hilbert transform (imaginary part of the analytic signal)
    ///
    /// # Mathematical Properties
    ///
    /// On a valid run holding whole cycles:
    /// - H[cos(ωt)] = sin(ωt)
    /// - H[sin(ωt)] = -cos(ωt)
    /// - H[constant] = 0
    pub fn transform(&self, signal: &[f64]) -> Result<Vec<f64>> {
        Ok(self.analytic_signal(signal)?.iter().map(|z| z.im).collect())
    }

    /// Extract the instantaneous envelope |z(t)|
    pub fn envelope(&self, signal: &[f64]) -> Result<Vec<f64>> {
        Ok(self
            .analytic_signal(signal)?
            .into_iter()
            .map(amplitude_of)
            .collect())
    }

    /// Extract the instantaneous phase arg(z(t)) in (−π, π]
    ///
    /// # Note
    /// To get instantaneous frequency, take the derivative of the unwrapped
    /// phase.
    pub fn instantaneous_phase(&self, signal: &[f64]) -> Result<Vec<f64>> {
        Ok(self
            .analytic_signal(signal)?
            .into_iter()
            .map(phase_of)
            .collect())
    }
}

/// Weight applied to FFT bin `k` of an `n`-point spectrum
fn analytic_gain(k: usize, n: usize) -> f64 {
    if k == 0 || (n % 2 == 0 && k == n / 2) {
        1.0
    } else if k < n.div_ceil(2) {
        2.0
    } else {
        0.0
    }
}

/// Whether either component of an analytic sample is NaN or infinite
pub fn is_invalid(z: Complex<f64>) -> bool {
    !(z.re.is_finite() && z.im.is_finite())
}

/// Phase of an analytic sample in (−π, π]; NaN for invalid samples
pub fn phase_of(z: Complex<f64>) -> f64 {
    if is_invalid(z) {
        return f64::NAN;
    }
    let phase = z.im.atan2(z.re);
    // atan2 returns -π for a negative real axis approached from below
    if phase <= -PI {
        PI
    } else {
        phase
    }
}

/// Modulus of an analytic sample; NaN for invalid samples
pub fn amplitude_of(z: Complex<f64>) -> f64 {
    if is_invalid(z) {
        f64::NAN
    } else {
        z.norm()
    }
}

/// Convenience function for one-off analytic signal computation
pub fn analytic_signal(signal: &[f64]) -> Result<Vec<Complex<f64>>> {
    HilbertTransform::new().analytic_signal(signal)
}

/// Convenience function for one-off Hilbert transforms
///
/// # Examples
///
/// ```rust
/// use hilbert_tf::hilbert_transform;
///
/// let signal = vec![1.0, 0.0, -1.0, 0.0];
/// let hilbert = hilbert_transform(&signal).unwrap();
/// assert!((hilbert[1] - 1.0).abs() < 1e-12);
/// ```
pub fn hilbert_transform(signal: &[f64]) -> Result<Vec<f64>> {
    HilbertTransform::new().transform(signal)
}

/// Convenience function for one-off envelope extraction
pub fn envelope(signal: &[f64]) -> Result<Vec<f64>> {
    HilbertTransform::new().envelope(signal)
}

/// Convenience function for one-off phase extraction
pub fn instantaneous_phase(signal: &[f64]) -> Result<Vec<f64>> {
    HilbertTransform::new().instantaneous_phase(signal)
}
