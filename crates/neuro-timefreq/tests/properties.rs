//! Property-based tests for the time-resolved extractors

use neuro_core::nan::nan_mask;
use neuro_timefreq::{TimeFrequency, TimeFrequencyParameters};
use proptest::prelude::*;
use std::f64::consts::PI;

const FS: f64 = 500.0;

fn band() -> impl Strategy<Value = (f64, f64)> {
    (8.0..40.0f64, 2.0..30.0f64).prop_map(|(f_lo, width)| (f_lo, f_lo + width))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    // Property: amplitude is non-negative and phase lies in (−π, π]
    #[test]
    fn prop_feature_ranges(
        signal in prop::collection::vec(-50.0..50.0f64, 400..1200),
        f_range in band(),
    ) {
        let result = TimeFrequency::default().compute(&signal, FS, f_range).unwrap();

        prop_assert_eq!(result.phase.len(), signal.len());
        prop_assert_eq!(result.amplitude.len(), signal.len());
        prop_assert_eq!(result.frequency.len(), signal.len());
        prop_assert!(result.frequency[0].is_nan());

        for &a in result.amplitude.iter().filter(|a| !a.is_nan()) {
            prop_assert!(a >= 0.0);
        }
        for &p in result.phase.iter().filter(|p| !p.is_nan()) {
            prop_assert!(p > -PI && p <= PI, "phase {} out of range", p);
        }
    }

    // Property: repeated calls give bit-identical output
    #[test]
    fn prop_repeat_is_identical(
        signal in prop::collection::vec(-5.0..5.0f64, 400..800),
        pad in any::<bool>(),
    ) {
        let tf = TimeFrequency::new(TimeFrequencyParameters::default().with_padding(pad));
        let first = tf.compute(&signal, FS, (8.0, 12.0)).unwrap();
        let second = tf.compute(&signal, FS, (8.0, 12.0)).unwrap();

        let bits = |s: &[f64]| s.iter().map(|v| v.to_bits()).collect::<Vec<_>>();
        prop_assert_eq!(bits(&first.phase), bits(&second.phase));
        prop_assert_eq!(bits(&first.amplitude), bits(&second.amplitude));
        prop_assert_eq!(bits(&first.frequency), bits(&second.frequency));
    }

    // Property: scaling the input scales the envelope and keeps the phase
    #[test]
    fn prop_amplitude_scales_linearly(
        signal in prop::collection::vec(-5.0..5.0f64, 400..800),
        scale in 0.5..4.0f64,
    ) {
        let tf = TimeFrequency::default();
        let scaled: Vec<f64> = signal.iter().map(|x| x * scale).collect();

        let amp = tf.amp_by_time(&signal, FS, (8.0, 12.0)).unwrap();
        let amp_scaled = tf.amp_by_time(&scaled, FS, (8.0, 12.0)).unwrap();

        prop_assert_eq!(nan_mask(&amp), nan_mask(&amp_scaled));
        for (a, b) in amp.iter().zip(&amp_scaled).filter(|(a, _)| !a.is_nan()) {
            prop_assert!((a * scale - b).abs() <= 1e-8 * (1.0 + b.abs()));
        }
    }
}
