//! Consistency of beta-band phase, amplitude and frequency with stored references
//!
//! `tests/data` holds a 5 s recording sampled at 1 kHz (`sample_data_1_sig`)
//! together with its phase, amplitude and frequency in the 13-30 Hz band,
//! computed by an independent implementation of the same filter and Hilbert
//! definitions. Every computation must reproduce them within a total absolute
//! deviation of 1e-5.

use neuro_core::nan::valid_runs;
use neuro_core::reference::{total_abs_deviation, total_abs_deviation_ignore_nan};
use neuro_core::ReferenceStore;
use neuro_timefreq::{amp_by_time, freq_by_time, phase_by_time};
use std::f64::consts::PI;

const FS: f64 = 1000.0;
const F_RANGE: (f64, f64) = (13.0, 30.0);
const DATASET: usize = 1;
const TOLERANCE: f64 = 1e-5;

fn reference_store() -> ReferenceStore {
    ReferenceStore::new(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data"))
}

fn example_signal() -> Vec<f64> {
    reference_store().load(DATASET, "sig").unwrap()
}

#[test]
fn test_phase_by_time_consistent() {
    let x = example_signal();
    let pha_true = reference_store().load(DATASET, "pha").unwrap();

    let pha = phase_by_time(&x, FS, F_RANGE).unwrap();

    assert_eq!(pha.len(), pha_true.len());
    assert_eq!(valid_runs(&pha), valid_runs(&pha_true));
    assert!(total_abs_deviation_ignore_nan(&pha, &pha_true).unwrap() <= TOLERANCE);
}

#[test]
fn test_amp_by_time_consistent() {
    let x = example_signal();
    let amp_true = reference_store().load(DATASET, "amp").unwrap();

    let amp = amp_by_time(&x, FS, F_RANGE).unwrap();

    assert_eq!(valid_runs(&amp), vec![116..4884]);
    assert!(total_abs_deviation_ignore_nan(&amp, &amp_true).unwrap() <= TOLERANCE);
}

#[test]
fn test_freq_by_time_consistent() {
    let x = example_signal();
    let i_f_true = reference_store().load(DATASET, "i_f").unwrap();

    let i_f = freq_by_time(&x, FS, F_RANGE).unwrap();

    // NaN placement must agree as well as the values
    let nan_positions = |s: &[f64]| s.iter().map(|v| v.is_nan()).collect::<Vec<_>>();
    assert_eq!(nan_positions(&i_f), nan_positions(&i_f_true));
    assert!(total_abs_deviation_ignore_nan(&i_f, &i_f_true).unwrap() <= TOLERANCE);
}

#[test]
fn test_sinusoid_matches_closed_form() {
    // For sin(ωt) the analytic signal is -j·e^{jωt}: phase ωt − π/2, unit
    // amplitude (times the filter gain) and constant frequency.
    let omega = 2.0 * PI * 20.0 / FS;
    let x: Vec<f64> = (0..2000).map(|i| (omega * i as f64).sin()).collect();

    let pha = phase_by_time(&x, FS, F_RANGE).unwrap();
    let amp = amp_by_time(&x, FS, F_RANGE).unwrap();
    let i_f = freq_by_time(&x, FS, F_RANGE).unwrap();

    let expected_phase: Vec<f64> = (300..1700)
        .map(|i| {
            let p = (omega * i as f64 - PI / 2.0 + PI).rem_euclid(2.0 * PI) - PI;
            if p == -PI { PI } else { p }
        })
        .collect();
    for (got, want) in pha[300..1700].iter().zip(&expected_phase) {
        let diff = (got - want + PI).rem_euclid(2.0 * PI) - PI;
        assert!(diff.abs() < 0.01, "phase off by {diff}");
    }

    assert!(amp[300..1700].iter().all(|a| (a - 1.0).abs() < 0.02));
    // Truncation ripple decays slowly away from the run ends
    assert!(i_f[300..1700].iter().all(|f| (f - 20.0).abs() < 0.5));
    let mean_freq = i_f[300..1700].iter().sum::<f64>() / 1400.0;
    assert!((mean_freq - 20.0).abs() < 0.05, "mean frequency {mean_freq}");

    // Exact repeat of the same computation
    let again = amp_by_time(&x, FS, F_RANGE).unwrap();
    assert_eq!(total_abs_deviation_ignore_nan(&amp, &again).unwrap(), 0.0);
    assert!(total_abs_deviation(&amp[300..1700], &again[300..1700]).unwrap() == 0.0);
}
