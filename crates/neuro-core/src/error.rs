//! Error types for neural time-frequency analysis
//!
//! Provides a unified error type for all neuro-dsp crates.

use thiserror::Error;

/// Core error type for filtering and time-frequency operations
#[derive(Error, Debug)]
pub enum Error {
    /// Frequency bounds are not usable for the requested filter
    #[error("Invalid frequency range: ({f_lo}, {f_hi}) Hz with Nyquist frequency {nyquist} Hz")]
    InvalidRange { f_lo: f64, f_hi: f64, nyquist: f64 },

    /// Zero-length input
    #[error("Empty signal")]
    EmptySignal,

    /// Every sample of the input is NaN
    #[error("All {length} samples are invalid (NaN)")]
    AllInvalid { length: usize },

    /// Signal is shorter than the filter kernel
    #[error("Signal too short: filter requires at least {required} samples, got {actual}")]
    SignalTooShort { required: usize, actual: usize },

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Malformed reference array file
    #[error("Reference data error: {0}")]
    Reference(String),

    /// IO error (for reference files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for frequency bounds that a single cutoff or band cannot use
    pub fn invalid_range(f_lo: f64, f_hi: f64, fs: f64) -> Self {
        Self::InvalidRange {
            f_lo,
            f_hi,
            nyquist: fs / 2.0,
        }
    }

    /// Create an error for a non-positive or non-finite sampling rate
    pub fn invalid_sampling_rate(fs: f64) -> Self {
        Self::InvalidParameter(format!("Sampling rate {fs} must be finite and positive"))
    }

    /// Create an error for a signal consisting only of NaN samples
    pub fn all_invalid(length: usize) -> Self {
        Self::AllInvalid { length }
    }
}

/// Check that a sampling rate is finite and positive
pub fn check_sampling_rate(fs: f64) -> Result<()> {
    if fs.is_finite() && fs > 0.0 {
        Ok(())
    } else {
        Err(Error::invalid_sampling_rate(fs))
    }
}
