//! FIR filtering for neural signals
//!
//! This crate band-limits a sampled signal with a Hamming-windowed sinc FIR
//! kernel and marks filter edge artifacts as invalid.
//!
//! # Behaviour
//!
//! - The kernel length defaults to three cycles of the lowest cutoff
//!   ([`FilterParameters::n_cycles`]) and is always odd.
//! - Filtering is zero-phase ("same"-mode convolution), so the output has the
//!   same length as the input.
//! - The first and last `ceil(N / 2)` output samples are set to NaN, because
//!   the kernel is not fully supported there.
//! - A NaN or infinite input sample only invalidates (sets to NaN) the
//!   outputs whose kernel covers it.
//!
//! # Example
//!
//! ```rust
//! use neuro_filter::{filter, FilterParameters, PassType};
//!
//! let fs = 1000.0;
//! let signal: Vec<f64> = (0..2000)
//!     .map(|i| (2.0 * std::f64::consts::PI * 20.0 * i as f64 / fs).sin())
//!     .collect();
//!
//! let beta = filter(&signal, fs, PassType::bandpass(13.0, 30.0), &FilterParameters::default())
//!     .unwrap();
//! assert_eq!(beta.len(), signal.len());
//! assert!(beta[0].is_nan());
//! assert!(beta[1000].is_finite());
//! ```

pub mod convolve;
pub mod design;
pub mod fir;
pub mod params;
pub mod response;

pub use fir::FirFilter;
pub use params::{FilterParameters, PassType};
pub use response::{frequency_response, transition_band, FrequencyResponse};

use neuro_core::Result;
use tracing::instrument;

/// Filter `signal` sampled at `fs` Hz
///
/// Designs a [`FirFilter`] for `pass_type` and applies it. See
/// [`FirFilter::design`] and [`FirFilter::apply`] for the error cases.
#[instrument(skip(signal, params), fields(len = signal.len()))]
pub fn filter(
    signal: &[f64],
    fs: f64,
    pass_type: PassType,
    params: &FilterParameters,
) -> Result<Vec<f64>> {
    if signal.is_empty() {
        return Err(neuro_core::Error::EmptySignal);
    }
    FirFilter::design(fs, pass_type, params)?.apply(signal)
}
