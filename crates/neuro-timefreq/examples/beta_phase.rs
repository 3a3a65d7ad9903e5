//! Beta-band phase, amplitude and frequency of a synthetic recording
//!
//! Run with `RUST_LOG=debug` to follow the filter and Hilbert stages.

use anyhow::Result;
use neuro_core::nan::valid_span;
use neuro_filter::FilterParameters;
use neuro_timefreq::{TimeFrequency, TimeFrequencyParameters};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;
use std::f64::consts::PI;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let fs = 1000.0;
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    // A 20 Hz burst between 1 s and 3 s over white background noise
    let signal: Vec<f64> = (0..4000)
        .map(|i| {
            let t = i as f64 / fs;
            let burst = if (1.0..3.0).contains(&t) { 2.0 } else { 0.2 };
            let noise: f64 = rng.sample(StandardNormal);
            burst * (2.0 * PI * 20.0 * t).sin() + 0.5 * noise
        })
        .collect();

    let params = TimeFrequencyParameters::default()
        .with_filter(FilterParameters::default().with_cycles(4.0));
    let tf = TimeFrequency::new(params);
    let result = tf.compute(&signal, fs, (13.0, 30.0))?;

    match valid_span(&result.phase) {
        Some(span) => info!("valid samples {}..{} of {}", span.start, span.end, result.len()),
        None => info!("no valid samples"),
    }

    for i in (0..result.len()).step_by(250) {
        println!(
            "t = {:4.2} s  phase = {:8.4}  amplitude = {:7.4}  frequency = {:8.3} Hz",
            i as f64 / fs,
            result.phase[i],
            result.amplitude[i],
            result.frequency[i]
        );
    }

    Ok(())
}
