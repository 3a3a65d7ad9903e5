//! Utilities for working with NaN-marked signals
//!
//! NaN is the sentinel for an invalid sample throughout the workspace, and
//! infinities are treated the same way. Stages that cannot operate across an
//! invalid sample split the signal into *valid runs*: maximal contiguous
//! stretches of finite samples.

use std::ops::Range;

/// Whether a sample is usable (finite)
#[inline]
pub fn is_valid(x: f64) -> bool {
    x.is_finite()
}

/// Find the maximal contiguous runs of finite samples
///
/// Runs are returned in order as half-open index ranges.
///
/// # Examples
///
/// ```rust
/// use neuro_core::nan::valid_runs;
///
/// let x = [f64::NAN, 1.0, 2.0, f64::NAN, 3.0];
/// assert_eq!(valid_runs(&x), vec![1..3, 4..5]);
/// ```
pub fn valid_runs(signal: &[f64]) -> Vec<Range<usize>> {
    let mut runs = Vec::new();
    let mut start = None;

    for (i, x) in signal.iter().enumerate() {
        match (!is_valid(*x), start) {
            (false, None) => start = Some(i),
            (true, Some(s)) => {
                runs.push(s..i);
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        runs.push(s..signal.len());
    }
    runs
}

/// Number of valid samples
pub fn count_valid(signal: &[f64]) -> usize {
    signal.iter().filter(|&&x| is_valid(x)).count()
}

/// Index of the first and one past the last valid sample
///
/// Returns `None` when the signal holds no valid samples.
pub fn valid_span(signal: &[f64]) -> Option<Range<usize>> {
    let first = signal.iter().position(|&x| is_valid(x))?;
    let last = signal.iter().rposition(|&x| is_valid(x))?;
    Some(first..last + 1)
}

/// Boolean mask that is `true` where the sample is invalid
pub fn nan_mask(signal: &[f64]) -> Vec<bool> {
    signal.iter().map(|&x| !is_valid(x)).collect()
}

/// Copy the valid samples, dropping invalid ones
pub fn drop_nan(signal: &[f64]) -> Vec<f64> {
    signal.iter().copied().filter(|&x| is_valid(x)).collect()
}
