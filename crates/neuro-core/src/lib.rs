//! Core types and utilities for neural time-frequency analysis
//!
//! This crate holds what every stage of the pipeline shares:
//!
//! - [`Error`] and [`Result`]: the error taxonomy used across the workspace
//! - [`FrequencyRange`]: validated pass/stop bands
//! - [`nan`]: discovery of valid (non-NaN) runs in a signal
//! - [`reference`]: golden reference arrays for regression tests
//!
//! # NaN convention
//!
//! Signals are plain `f64` slices. A NaN sample marks an invalid sample, for
//! example a filter edge artifact; infinities are invalid as well. Stages keep invalidity local: only samples
//! whose computation touches a NaN become NaN.
//!
//! # Example
//!
//! ```rust
//! use neuro_core::{nan::valid_runs, FrequencyRange};
//!
//! let band = FrequencyRange::new(13.0, 30.0);
//! assert!(band.validate(1000.0).is_ok());
//!
//! let x = [f64::NAN, 0.5, 0.25, f64::NAN];
//! assert_eq!(valid_runs(&x), vec![1..3]);
//! ```

pub mod error;
pub mod nan;
pub mod range;
pub mod reference;

pub use error::{check_sampling_rate, Error, Result};
pub use range::FrequencyRange;
pub use reference::ReferenceStore;
