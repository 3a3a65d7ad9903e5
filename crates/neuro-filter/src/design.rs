//! Windowed-sinc FIR kernel design
//!
//! Kernels follow `scipy.signal.firwin` with a Hamming window: each ideal
//! band `(left, right)` contributes `right·sinc(right·m) − left·sinc(left·m)`
//! at tap offset `m`, the sum is windowed, and the result is scaled to unit
//! gain at a reference frequency inside the first pass band.

use std::f64::consts::PI;

/// Symmetric Hamming window of length `n`
pub fn hamming(n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![1.0];
    }
    let denom = (n - 1) as f64;
    (0..n)
        .map(|i| 0.54 - 0.46 * (2.0 * PI * i as f64 / denom).cos())
        .collect()
}

/// Normalized sinc, `sin(πx) / (πx)`
pub fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        let px = PI * x;
        px.sin() / px
    }
}

/// Design a linear-phase FIR kernel with `n` taps
///
/// `bands` are ideal pass bands in units of the Nyquist frequency, with
/// `0 <= left < right <= 1`. A band reaching 1.0 passes Nyquist, which needs
/// an odd `n`; callers size kernels through
/// [`FilterParameters::kernel_length`](crate::FilterParameters::kernel_length),
/// which always returns odd lengths.
pub fn firwin(n: usize, bands: &[(f64, f64)]) -> Vec<f64> {
    let alpha = 0.5 * (n as f64 - 1.0);
    let window = hamming(n);

    let mut h: Vec<f64> = (0..n)
        .map(|i| {
            let m = i as f64 - alpha;
            let ideal: f64 = bands
                .iter()
                .map(|&(left, right)| right * sinc(right * m) - left * sinc(left * m))
                .sum();
            ideal * window[i]
        })
        .collect();

    // Unit gain at DC, Nyquist, or the centre of the first band
    if let Some(&(left, right)) = bands.first() {
        let scale_frequency = if left == 0.0 {
            0.0
        } else if right == 1.0 {
            1.0
        } else {
            0.5 * (left + right)
        };
        let gain: f64 = h
            .iter()
            .enumerate()
            .map(|(i, &v)| v * (PI * (i as f64 - alpha) * scale_frequency).cos())
            .sum();
        h.iter_mut().for_each(|v| *v /= gain);
    }

    h
}
