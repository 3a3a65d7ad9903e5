//! Direct "same"-mode convolution
//!
//! The output has the length of the signal and is centred on the kernel, so a
//! symmetric kernel introduces no phase shift. Samples beyond the signal are
//! treated as zero. The sum is computed directly rather than through an FFT so
//! that a NaN sample only reaches the outputs whose kernel support covers it.

/// Convolve `signal` with an odd-length `kernel`, keeping the signal length
pub fn convolve_same(signal: &[f64], kernel: &[f64]) -> Vec<f64> {
    let n = signal.len();
    if n == 0 || kernel.is_empty() {
        return vec![0.0; n];
    }
    let half = (kernel.len() - 1) / 2;

    let sample = |i: usize| -> f64 {
        // out[i] = sum_j kernel[j] * signal[i + half - j]
        let hi = i + half;
        let j_min = hi.saturating_sub(n - 1);
        let j_max = hi.min(kernel.len() - 1);
        (j_min..=j_max).map(|j| kernel[j] * signal[hi - j]).sum()
    };

    #[cfg(feature = "parallel")]
    let filtered: Vec<f64> = {
        use rayon::prelude::*;
        (0..n).into_par_iter().map(sample).collect()
    };

    #[cfg(not(feature = "parallel"))]
    let filtered: Vec<f64> = (0..n).map(sample).collect();

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity_kernel() {
        let x = [1.0, -2.0, 3.5, 4.0];
        assert_eq!(convolve_same(&x, &[0.0, 1.0, 0.0]), x.to_vec());
    }

    #[test]
    fn test_moving_average_with_zero_padding() {
        let x = [3.0, 3.0, 3.0, 3.0, 3.0];
        let k = [1.0 / 3.0; 3];
        let y = convolve_same(&x, &k);
        assert_relative_eq!(y[0], 2.0, epsilon = 1e-12);
        assert_relative_eq!(y[2], 3.0, epsilon = 1e-12);
        assert_relative_eq!(y[4], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_asymmetric_kernel_orientation() {
        // Matches numpy.convolve(k, x, 'same')
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let k = [1.0, 2.0, 3.0];
        assert_eq!(convolve_same(&x, &k), vec![4.0, 10.0, 16.0, 22.0, 22.0]);
    }

    #[test]
    fn test_nan_stays_within_kernel_support() {
        let mut x = vec![1.0; 11];
        x[5] = f64::NAN;
        let y = convolve_same(&x, &[0.25, 0.5, 0.25]);
        for (i, v) in y.iter().enumerate() {
            assert_eq!(v.is_nan(), (4..=6).contains(&i), "sample {i}");
        }
    }

    #[test]
    fn test_kernel_longer_than_signal() {
        let y = convolve_same(&[1.0, 1.0], &[1.0; 5]);
        assert_eq!(y, vec![2.0, 2.0]);
    }
}
