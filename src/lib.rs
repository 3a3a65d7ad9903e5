//! Time-frequency analysis of neural oscillations
//!
//! Umbrella crate re-exporting the workspace:
//!
//! - [`neuro_core`]: shared error type, frequency ranges, NaN-run helpers and
//!   the golden reference store
//! - [`neuro_filter`]: windowed-sinc FIR design and edge-artifact removal
//! - [`hilbert_tf`]: NaN-aware analytic signal
//! - [`neuro_timefreq`]: `phase_by_time`, `amp_by_time` and `freq_by_time`
//!
//! ```rust
//! use neuro_dsp::prelude::*;
//!
//! let fs = 1000.0;
//! let signal: Vec<f64> = (0..3000)
//!     .map(|i| (2.0 * std::f64::consts::PI * 10.0 * i as f64 / fs).sin())
//!     .collect();
//!
//! let amp = amp_by_time(&signal, fs, (8.0, 12.0)).unwrap();
//! assert!(amp[0].is_nan());
//! assert!((amp[1500] - 1.0).abs() < 0.05);
//! ```

pub use hilbert_tf;
pub use neuro_core;
pub use neuro_filter;
pub use neuro_timefreq;

pub mod prelude {
    pub use hilbert_tf::HilbertTransform;
    pub use neuro_core::{Error, FrequencyRange, ReferenceStore, Result};
    pub use neuro_filter::{filter, FilterParameters, FirFilter, PassType};
    pub use neuro_timefreq::{
        amp_by_time, freq_by_time, phase_by_time, TimeFrequency, TimeFrequencyParameters,
        TimeFrequencyResult,
    };
}
