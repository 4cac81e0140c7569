//! Fourier-method resampling.
//!
//! Used to bring a discrete signal to an output device's sample rate before
//! playback or WAV export. The spectrum of the input is truncated or
//! zero-padded to the target length and transformed back, which assumes the
//! input is one period of a periodic sequence.

use num_complex::Complex;
use rustfft::FftPlanner;

/// Resamples `samples` to exactly `num` samples using the FFT.
///
/// For an even-length retained band the Nyquist bin is split in half when
/// upsampling and doubled when downsampling, so the output stays real. The
/// result is scaled by `num / samples.len()` to preserve amplitude.
///
/// # Example
/// ```rust
/// use wave_scaler::resample;
///
/// let constant = vec![0.5; 8];
/// let upsampled = resample(&constant, 20);
/// assert_eq!(upsampled.len(), 20);
/// assert!(upsampled.iter().all(|x| (x - 0.5).abs() < 1e-12));
/// ```
pub fn resample(samples: &[f64], num: usize) -> Vec<f64> {
    let input_len = samples.len();
    if input_len == 0 || num == 0 {
        return vec![0.0; num];
    }
    if num == input_len {
        return samples.to_vec();
    }

    let mut planner = FftPlanner::<f64>::new();

    let mut spectrum: Vec<Complex<f64>> = samples.iter().map(|&x| Complex::new(x, 0.0)).collect();
    planner.plan_fft_forward(input_len).process(&mut spectrum);

    // Half spectrum of the output, bins 0..=num/2
    let kept = input_len.min(num);
    let nyquist = kept / 2 + 1;
    let mut half = vec![Complex::new(0.0, 0.0); num / 2 + 1];
    half[..nyquist].copy_from_slice(&spectrum[..nyquist]);
    if kept % 2 == 0 {
        if num < input_len {
            half[kept / 2] *= 2.0;
        } else {
            half[kept / 2] *= 0.5;
        }
    }

    // Rebuild the full Hermitian spectrum
    let mut full = vec![Complex::new(0.0, 0.0); num];
    for (k, bin) in full.iter_mut().enumerate() {
        *bin = if k <= num / 2 {
            half[k]
        } else {
            half[num - k].conj()
        };
    }
    full[0].im = 0.0;
    if num % 2 == 0 {
        full[num / 2].im = 0.0;
    }

    planner.plan_fft_inverse(num).process(&mut full);

    // rustfft is unnormalised: divide by num for the inverse, multiply by
    // num / input_len for the amplitude scaling
    let scale = 1.0 / input_len as f64;
    full.into_iter().map(|c| c.re * scale).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx_eq::assert_approx_eq;
    use std::f64::consts::PI;

    fn tone(len: usize, cycles: f64) -> Vec<f64> {
        (0..len)
            .map(|i| (2.0 * PI * cycles * i as f64 / len as f64).sin())
            .collect()
    }

    #[test]
    fn test_same_length_is_identity() {
        let input = tone(16, 3.0);
        assert_eq!(resample(&input, 16), input);
    }

    #[test]
    fn test_empty_input() {
        assert!(resample(&[], 0).is_empty());
        assert_eq!(resample(&[], 4), vec![0.0; 4]);
        assert!(resample(&[1.0, 2.0], 0).is_empty());
    }

    #[test]
    fn test_upsampling_band_limited_tone() {
        let input = tone(32, 3.0);
        let output = resample(&input, 80);
        let expected = tone(80, 3.0);
        assert_eq!(output.len(), 80);
        for (actual, expected) in output.iter().zip(&expected) {
            assert!((actual - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_downsampling_band_limited_tone() {
        let input = tone(100, 2.0);
        let output = resample(&input, 25);
        let expected = tone(25, 2.0);
        for (actual, expected) in output.iter().zip(&expected) {
            assert!((actual - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_preserves_mean() {
        let input = vec![1.0, 3.0, 2.0, 6.0, 4.0, 2.0, 3.0];
        let mean = input.iter().sum::<f64>() / input.len() as f64;
        let output = resample(&input, 19);
        let output_mean = output.iter().sum::<f64>() / output.len() as f64;
        assert_approx_eq!(output_mean, mean, 1e-9);
    }
}
