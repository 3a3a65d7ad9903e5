//! Separating two rhythms of one recording by frequency band

use approx::assert_relative_eq;
use neuro_core::nan::count_valid;
use neuro_filter::{filter, FilterParameters, PassType};
use neuro_timefreq::{amp_by_time, freq_by_time, TimeFrequency};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;
use std::f64::consts::PI;

const FS: f64 = 1000.0;

/// 6 Hz theta at amplitude 2 plus 40 Hz gamma at amplitude 0.5, lightly noisy
fn theta_gamma(n: usize) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    (0..n)
        .map(|i| {
            let t = i as f64 / FS;
            let noise: f64 = rng.sample(StandardNormal);
            2.0 * (2.0 * PI * 6.0 * t).sin() + 0.5 * (2.0 * PI * 40.0 * t).sin() + 0.01 * noise
        })
        .collect()
}

#[test]
fn test_bands_separate_rhythms() {
    let x = theta_gamma(8000);

    let theta = amp_by_time(&x, FS, (4.0, 8.0)).unwrap();
    let gamma = amp_by_time(&x, FS, (30.0, 50.0)).unwrap();

    assert_relative_eq!(theta[4000], 2.0, epsilon = 0.1);
    assert_relative_eq!(gamma[4000], 0.5, epsilon = 0.05);

    // Wider kernel for the lower band leaves fewer valid samples
    assert!(count_valid(&theta) < count_valid(&gamma));
}

#[test]
fn test_theta_frequency_tracks_carrier() {
    let x = theta_gamma(8000);
    let i_f = freq_by_time(&x, FS, (4.0, 8.0)).unwrap();

    let window = &i_f[3000..5000];
    let mean = window.iter().sum::<f64>() / window.len() as f64;
    assert_relative_eq!(mean, 6.0, epsilon = 0.05);
}

#[test]
fn test_filter_matches_pipeline_stage() {
    let x = theta_gamma(4000);
    let direct = filter(&x, FS, PassType::bandpass(30.0, 50.0), &FilterParameters::default()).unwrap();
    let staged = TimeFrequency::default().filtered(&x, FS, (30.0, 50.0)).unwrap();

    assert_eq!(direct.len(), staged.len());
    for (a, b) in direct.iter().zip(&staged) {
        assert_eq!(a.to_bits(), b.to_bits());
    }
}
