//! Frequency response and transition band of FIR kernels

use num_complex::Complex;
use rustfft::FftPlanner;

/// Magnitude response of a kernel on a uniform grid from DC to Nyquist
#[derive(Debug, Clone)]
pub struct FrequencyResponse {
    /// Frequencies in Hz
    pub frequencies: Vec<f64>,
    /// Gain in dB at each frequency
    pub gain_db: Vec<f64>,
}

impl FrequencyResponse {
    /// Gain in dB at the grid point closest to `freq`
    pub fn gain_at(&self, freq: f64) -> Option<f64> {
        self.frequencies
            .iter()
            .zip(&self.gain_db)
            .min_by(|(a, _), (b, _)| {
                (*a - freq)
                    .abs()
                    .partial_cmp(&(*b - freq).abs())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|(_, &g)| g)
    }
}

/// Compute the response of `kernel` at `n_points` frequencies from 0 to `fs / 2`
///
/// The kernel is zero-padded to an FFT of `2 · (n_points − 1)` bins, or to the
/// next power of two above the kernel length if that is larger.
pub fn frequency_response(kernel: &[f64], fs: f64, n_points: usize) -> FrequencyResponse {
    let n_points = n_points.max(2);
    let n_fft = (2 * (n_points - 1)).max(kernel.len().next_power_of_two());

    let mut buffer: Vec<Complex<f64>> = kernel
        .iter()
        .map(|&v| Complex::new(v, 0.0))
        .chain(std::iter::repeat(Complex::new(0.0, 0.0)))
        .take(n_fft)
        .collect();

    let mut planner = FftPlanner::<f64>::new();
    planner.plan_fft_forward(n_fft).process(&mut buffer);

    let bins = n_fft / 2 + 1;
    let frequencies = (0..bins).map(|k| k as f64 * fs / n_fft as f64).collect();
    let gain_db = buffer[..bins]
        .iter()
        .map(|c| 20.0 * c.norm().log10())
        .collect();

    FrequencyResponse {
        frequencies,
        gain_db,
    }
}

/// Widest transition band of a response, in Hz
///
/// A transition region is a stretch of the grid where the gain lies strictly
/// between `low_db` and `high_db` (by default −20 dB and −3 dB). Returns
/// `None` when the response never enters that window.
pub fn transition_band(response: &FrequencyResponse, low_db: f64, high_db: f64) -> Option<f64> {
    let in_band: Vec<bool> = response
        .gain_db
        .iter()
        .map(|&g| g > low_db && g < high_db)
        .collect();

    let mut widest: Option<f64> = None;
    let mut start: Option<usize> = None;
    for (i, &inside) in in_band.iter().enumerate() {
        match (inside, start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                let width = response.frequencies[i - 1] - response.frequencies[s];
                widest = Some(widest.map_or(width, |w| w.max(width)));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        let last = in_band.len() - 1;
        let width = response.frequencies[last] - response.frequencies[s];
        widest = Some(widest.map_or(width, |w| w.max(width)));
    }
    widest
}
