//! Designed FIR filters and their application to NaN-marked signals

use crate::convolve::convolve_same;
use crate::design::firwin;
use crate::params::{FilterParameters, PassType};
use crate::response::{frequency_response, transition_band, FrequencyResponse};
use neuro_core::{Error, Result};
use tracing::{debug, warn};

/// Lower and upper gain bounds (dB) delimiting a transition region
const TRANSITION_LOW_DB: f64 = -20.0;
const TRANSITION_HIGH_DB: f64 = -3.0;

/// Number of grid points used for the transition band report
const RESPONSE_POINTS: usize = 2049;

/// A linear-phase FIR filter designed for one sampling rate
#[derive(Debug, Clone)]
pub struct FirFilter {
    fs: f64,
    pass_type: PassType,
    kernel: Vec<f64>,
    remove_edge_artifacts: bool,
}

impl FirFilter {
    /// Design a Hamming-windowed sinc filter
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidParameter`] for a bad sampling rate or kernel length
    /// - [`Error::InvalidRange`] for frequencies outside `(0, fs / 2)` or an
    ///   inverted band
    pub fn design(fs: f64, pass_type: PassType, params: &FilterParameters) -> Result<Self> {
        pass_type.validate(fs)?;
        let n_taps = params.kernel_length(fs, &pass_type)?;
        let kernel = firwin(n_taps, &pass_type.normalized_bands(fs));
        debug!("Designed {pass_type} FIR kernel with {n_taps} taps at {fs} Hz");

        let filter = Self {
            fs,
            pass_type,
            kernel,
            remove_edge_artifacts: params.remove_edge_artifacts,
        };

        if params.compute_transition_band {
            filter.report_transition_band();
        }
        Ok(filter)
    }

    /// Filter taps
    pub fn kernel(&self) -> &[f64] {
        &self.kernel
    }

    /// Number of taps
    pub fn len(&self) -> usize {
        self.kernel.len()
    }

    /// Always false; a designed kernel has at least one tap
    pub fn is_empty(&self) -> bool {
        self.kernel.is_empty()
    }

    /// Sampling rate the kernel was designed for
    pub fn sampling_rate(&self) -> f64 {
        self.fs
    }

    /// Pass type the kernel was designed for
    pub fn pass_type(&self) -> PassType {
        self.pass_type
    }

    /// Number of samples invalidated at each edge when edge removal is on
    pub fn edge_length(&self) -> usize {
        self.kernel.len().div_ceil(2)
    }

    /// Magnitude response of the kernel
    pub fn frequency_response(&self, n_points: usize) -> FrequencyResponse {
        frequency_response(&self.kernel, self.fs, n_points)
    }

    /// Widest region where the gain lies between −20 dB and −3 dB, in Hz
    pub fn transition_band(&self) -> Option<f64> {
        let response = self.frequency_response(RESPONSE_POINTS);
        transition_band(&response, TRANSITION_LOW_DB, TRANSITION_HIGH_DB)
    }

    fn report_transition_band(&self) {
        let band_width = self.pass_type.band_width(self.fs);
        match self.transition_band() {
            Some(width) => {
                debug!(
                    "Transition bandwidth is {width:.1} Hz; pass/stop bandwidth is {band_width:.1} Hz"
                );
                if width > band_width {
                    warn!(
                        "Transition bandwidth ({width:.1} Hz) exceeds the pass/stop bandwidth \
                         ({band_width:.1} Hz); consider a longer filter"
                    );
                }
            }
            None => debug!("No transition band found in the kernel response"),
        }
    }

    /// Filter a signal, returning a new signal of the same length
    ///
    /// NaN or infinite samples in the input invalidate every output whose
    /// kernel support covers them; invalid outputs are always NaN. With edge
    /// removal enabled, the first and last
    /// [`edge_length`](Self::edge_length) samples are set to NaN.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptySignal`] for a zero-length signal
    /// - [`Error::SignalTooShort`] when the kernel is longer than the signal
    pub fn apply(&self, signal: &[f64]) -> Result<Vec<f64>> {
        if signal.is_empty() {
            return Err(Error::EmptySignal);
        }
        if self.kernel.len() > signal.len() {
            return Err(Error::SignalTooShort {
                required: self.kernel.len(),
                actual: signal.len(),
            });
        }

        let mut filtered = convolve_same(signal, &self.kernel);
        filtered
            .iter_mut()
            .filter(|v| !v.is_finite())
            .for_each(|v| *v = f64::NAN);

        if self.remove_edge_artifacts {
            let edge = self.edge_length().min(filtered.len());
            let n = filtered.len();
            filtered[..edge].fill(f64::NAN);
            filtered[n - edge..].fill(f64::NAN);
        }

        Ok(filtered)
    }
}
