//! Analytic signal of a signal with invalidated edges and an interior gap
//!
//! Run with `RUST_LOG=debug` to see the valid runs being processed.

use anyhow::Result;
use hilbert_tf::{amplitude_of, phase_of, HilbertTransform};
use std::f64::consts::PI;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let fs = 250.0;
    let n = 1000;
    // 10 Hz carrier with a slow 0.5 Hz amplitude modulation
    let mut signal: Vec<f64> = (0..n)
        .map(|i| {
            let t = i as f64 / fs;
            (1.0 + 0.5 * (2.0 * PI * 0.5 * t).sin()) * (2.0 * PI * 10.0 * t).cos()
        })
        .collect();
    signal[..50].fill(f64::NAN);
    signal[480..500].fill(f64::NAN);
    signal[950..].fill(f64::NAN);

    for padded in [false, true] {
        let transformer = HilbertTransform::new().with_padding(padded);
        let analytic = transformer.analytic_signal(&signal)?;

        println!("padding = {padded}");
        for i in (0..n).step_by(100) {
            let z = analytic[i];
            println!(
                "  t = {:5.2} s  amplitude = {:8.4}  phase = {:8.4}",
                i as f64 / fs,
                amplitude_of(z),
                phase_of(z)
            );
        }
    }

    Ok(())
}
