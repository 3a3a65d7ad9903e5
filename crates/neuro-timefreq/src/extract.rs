//! Feature extraction from analytic signals
//!
//! Each extractor is a pure function of its input: it allocates a new series
//! of the same length and never touches shared state.

use hilbert_tf::{amplitude_of, phase_of};
use neuro_core::nan::valid_runs;
use num_complex::Complex;
use std::f64::consts::PI;

/// Instantaneous phase in radians, in (−π, π]
///
/// Invalid analytic samples give NaN.
pub fn phase(analytic: &[Complex<f64>]) -> Vec<f64> {
    analytic.iter().map(|&z| phase_of(z)).collect()
}

/// Instantaneous amplitude (envelope), non-negative
///
/// Invalid analytic samples give NaN.
pub fn amplitude(analytic: &[Complex<f64>]) -> Vec<f64> {
    analytic.iter().map(|&z| amplitude_of(z)).collect()
}

/// Unwrap a phase series by removing jumps larger than π
///
/// Each valid run is unwrapped on its own, starting from its first sample;
/// unwrapping never bridges a NaN gap. Jumps of exactly ±π are left as is.
pub fn unwrap_phase(phase: &[f64]) -> Vec<f64> {
    let mut unwrapped = vec![f64::NAN; phase.len()];

    for run in valid_runs(phase) {
        let mut correction = 0.0;
        unwrapped[run.start] = phase[run.start];
        for i in run.start + 1..run.end {
            let delta = phase[i] - phase[i - 1];
            if delta.abs() >= PI {
                let mut wrapped = (delta + PI).rem_euclid(2.0 * PI) - PI;
                if wrapped == -PI && delta > 0.0 {
                    wrapped = PI;
                }
                correction += wrapped - delta;
            }
            unwrapped[i] = phase[i] + correction;
        }
    }
    unwrapped
}

/// Instantaneous frequency in Hz from a phase series sampled at `fs`
///
/// The output has the same length as `phase`. Sample 0 is always NaN, and
/// sample `t` holds `fs / 2π · (u[t] − u[t−1])` where `u` is the unwrapped
/// phase. Any difference that involves a NaN phase sample is NaN, so a valid
/// run of `m` samples contributes `m − 1` finite frequencies.
pub fn frequency(phase: &[f64], fs: f64) -> Vec<f64> {
    let unwrapped = unwrap_phase(phase);
    let scale = fs / (2.0 * PI);

    std::iter::once(f64::NAN)
        .chain(unwrapped.windows(2).map(|w| scale * (w[1] - w[0])))
        .take(phase.len())
        .collect()
}
