//! Amplitude and time scaling for Signal.
//!
//! Time scaling resamples by linear interpolation, with different policies
//! for the two signal families:
//!
//! - Discrete signals change their sample count to `floor(len / factor)`
//!   (capped at [`MAX_TIME_SCALED_SAMPLES`]). The output grid spans
//!   `[t0, duration / factor]` while the values are pulled from an equally
//!   sized query grid spanning the original support `[t0, duration]`.
//! - Continuous signals keep their point count. Each output time `τ` over
//!   `[t0, duration / factor]` takes the interpolated value at `τ * factor`.

use tracing::{debug, trace};

use super::traits::SignalScaling;
use crate::utils::interpolation::{LinearInterpolator, linspace};
use crate::{MAX_TIME_SCALED_SAMPLES, Signal};

impl SignalScaling for Signal {
    fn scale_amplitude(&self, factor: f64) -> Signal {
        self.with_amplitude(self.amplitude().mapv(|x| x * factor))
    }

    fn scale_time(&self, factor: f64) -> Signal {
        if factor == 1.0 || self.len() < 2 {
            return self.clone();
        }

        let time = self.time_slice();
        let amplitude = self.amplitude_slice();
        let num_samples = time.len();
        let start = time[0];
        let original_duration = time[num_samples - 1] - start;
        let new_duration = original_duration / factor;
        let scaled_frequency = self.frequency().map(|f| f * factor);

        let interpolator = LinearInterpolator::new(&time, &amplitude, 0.0);

        if self.is_discrete() {
            let num_new_samples = time_scaled_len(num_samples, factor);
            trace!(factor, num_samples, num_new_samples, "time scaling discrete signal");

            // A collapsed signal keeps its original frequency
            if num_new_samples < 2 {
                return self.with_axes(
                    ndarray::arr1(&[start]),
                    ndarray::arr1(&[amplitude[0]]),
                    self.frequency(),
                );
            }

            let new_time = linspace(start, new_duration, num_new_samples);
            let queries = linspace(start, original_duration, num_new_samples);
            let new_amplitude = interpolator.eval_all(&queries);
            self.with_axes(new_time, new_amplitude, scaled_frequency)
        } else {
            trace!(factor, num_samples, "time scaling continuous signal");

            let new_time = linspace(start, new_duration, num_samples);
            let new_amplitude = new_time.mapv(|tau| interpolator.eval(tau * factor));
            self.with_axes(new_time, new_amplitude, scaled_frequency)
        }
    }
}

/// Sample count of a discrete signal after time scaling.
///
/// `floor(num_samples / factor)`, capped at [`MAX_TIME_SCALED_SAMPLES`].
/// Non-finite or negative requests saturate (NaN and negatives become 0,
/// infinity hits the cap).
pub fn time_scaled_len(num_samples: usize, factor: f64) -> usize {
    let requested = num_samples as f64 / factor;
    // `as` truncates toward zero and saturates at the integer bounds
    let count = requested as usize;
    if count > MAX_TIME_SCALED_SAMPLES {
        debug!(
            requested,
            cap = MAX_TIME_SCALED_SAMPLES,
            "time-scaled sample count capped"
        );
        MAX_TIME_SCALED_SAMPLES
    } else {
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::SignalStatistics;
    use crate::{GenerationParams, WaveformKind, synthesize};
    use approx_eq::assert_approx_eq;
    use ndarray::array;
    use std::f64::consts::PI;

    /// 1000 samples of a 2 Hz sine at 1 kHz.
    fn discrete_sine() -> Signal {
        let params = GenerationParams::default()
            .with_sample_rate(1_000)
            .with_duration(1.0);
        synthesize(WaveformKind::SampledSine, &params).expect("signal")
    }

    fn continuous_sine() -> Signal {
        synthesize(WaveformKind::Sine, &GenerationParams::default()).expect("signal")
    }

    #[test]
    fn test_scale_amplitude_identity() {
        let signal = discrete_sine();
        let same = signal.scale_amplitude(1.0);
        assert_eq!(same.amplitude(), signal.amplitude());
        assert!(same.shares_time_axis(&signal));
    }

    #[test]
    fn test_scale_amplitude_round_trip() {
        let signal = continuous_sine();
        let round_trip = signal.scale_amplitude(2.0).scale_amplitude(0.5);
        assert_eq!(round_trip.amplitude(), signal.amplitude());
        assert_eq!(round_trip.frequency(), signal.frequency());
        assert_eq!(round_trip.is_discrete(), signal.is_discrete());
    }

    #[test]
    fn test_scale_amplitude_leaves_input_untouched() {
        let signal = Signal::new(array![0.0, 1.0], array![1.0, -2.0], true, None, 8_000)
            .expect("valid");
        let scaled = signal.scale_amplitude(-3.0);
        assert_eq!(scaled.amplitude(), array![-3.0, 6.0]);
        assert_eq!(signal.amplitude(), array![1.0, -2.0]);
    }

    #[test]
    fn test_scale_time_identity() {
        let discrete = discrete_sine();
        assert_eq!(discrete.scale_time(1.0), discrete);

        let continuous = continuous_sine();
        assert_eq!(continuous.scale_time(1.0), continuous);
    }

    #[test]
    fn test_scale_time_short_signal_is_unchanged() {
        let single = Signal::new(array![0.0], array![4.0], true, Some(2.0), 8_000).expect("valid");
        assert_eq!(single.scale_time(3.0), single);
    }

    #[test]
    fn test_discrete_sample_count_cap() {
        assert_eq!(time_scaled_len(1_000, 0.001), MAX_TIME_SCALED_SAMPLES);
        assert_eq!(time_scaled_len(1_000, 0.0), MAX_TIME_SCALED_SAMPLES);
        assert_eq!(time_scaled_len(1_000, -2.0), 0);
        assert_eq!(time_scaled_len(1_000, f64::NAN), 0);

        let stretched = discrete_sine().scale_time(0.001);
        assert_eq!(stretched.len(), MAX_TIME_SCALED_SAMPLES);
        assert_eq!(stretched.time().len(), MAX_TIME_SCALED_SAMPLES);
    }

    #[test]
    fn test_discrete_sample_counts() {
        let signal = discrete_sine();
        assert_eq!(signal.len(), 1_000);
        for (factor, expected) in [(2.0, 500), (0.5, 2_000), (3.0, 333), (0.003, 250_000)] {
            let scaled = signal.scale_time(factor);
            assert_eq!(scaled.len(), expected, "factor {factor}");
            assert!(scaled.is_discrete());
        }
    }

    #[test]
    fn test_discrete_compression_grids() {
        let signal = discrete_sine();
        let original_duration = signal.duration();
        let scaled = signal.scale_time(2.0);

        assert_eq!(scaled.time()[0], 0.0);
        assert_eq!(scaled.time()[scaled.len() - 1], original_duration / 2.0);
        // The query grid spans the original support, so both ends are preserved
        assert_eq!(scaled.amplitude()[0], signal.amplitude()[0]);
        assert_approx_eq!(
            scaled.amplitude()[scaled.len() - 1],
            signal.amplitude()[signal.len() - 1],
            1e-9
        );
        assert_approx_eq!(scaled.frequency().expect("frequency"), 4.0, 1e-12);
        assert_eq!(scaled.sample_rate(), signal.sample_rate());
    }

    #[test]
    fn test_discrete_extreme_compression_degenerates() {
        let signal = discrete_sine().scale_amplitude(3.0).scale_time(0.5);
        let degenerate = signal.scale_time(5_000.0);
        assert_eq!(degenerate.len(), 1);
        assert_eq!(degenerate.time()[0], signal.time()[0]);
        assert_eq!(degenerate.amplitude()[0], signal.amplitude()[0]);
        assert_eq!(degenerate.frequency(), signal.frequency());
    }

    #[test]
    fn test_collapsed_signal_keeps_period() {
        let signal = Signal::new(array![0.0, 0.5, 1.0], array![1.0, 2.0, 3.0], true, Some(2.0), 2)
            .expect("valid");
        let collapsed = signal.scale_time(5_000.0);
        assert_eq!(collapsed.len(), 1);
        assert_eq!(collapsed.amplitude()[0], 1.0);
        assert_eq!(collapsed.frequency(), Some(2.0));
        assert_eq!(collapsed.stats().period, "0.500 s");
    }

    #[test]
    fn test_continuous_keeps_point_count() {
        let signal = continuous_sine();
        for factor in [0.2, 0.5, 2.0, 3.7] {
            let scaled = signal.scale_time(factor);
            assert_eq!(scaled.time().len(), signal.time().len(), "factor {factor}");
            assert_approx_eq!(
                scaled.time()[scaled.len() - 1],
                signal.duration() / factor,
                1e-12
            );
            assert!(!scaled.is_discrete());
        }
    }

    #[test]
    fn test_continuous_compression_doubles_frequency() {
        let signal = continuous_sine();
        let scaled = signal.scale_time(2.0);

        assert_approx_eq!(scaled.frequency().expect("frequency"), 4.0, 1e-12);
        for (tau, x) in scaled.iter().take(scaled.len() - 1) {
            let expected = (2.0 * PI * 4.0 * tau).sin();
            assert!((x - expected).abs() < 1e-3, "t = {tau}: {x} vs {expected}");
        }
    }

    #[test]
    fn test_continuous_dilation_halves_frequency() {
        let signal = continuous_sine();
        let scaled = signal.scale_time(0.5);

        assert_approx_eq!(scaled.frequency().expect("frequency"), 1.0, 1e-12);
        assert_approx_eq!(scaled.duration(), 2.0 * signal.duration(), 1e-12);
        for (tau, x) in scaled.iter() {
            let expected = (2.0 * PI * 1.0 * tau).sin();
            assert!((x - expected).abs() < 1e-3, "t = {tau}: {x} vs {expected}");
        }
    }

    #[test]
    fn test_missing_frequency_stays_missing() {
        let signal = Signal::new(
            array![0.0, 0.5, 1.0],
            array![0.0, 1.0, 0.0],
            false,
            None,
            44_100,
        )
        .expect("valid");
        assert_eq!(signal.scale_time(2.0).frequency(), None);
    }

    #[test]
    fn test_combined_scale_applies_amplitude_then_time() {
        let signal = discrete_sine();
        let combined = signal.scale(2.0, 4.0);
        let stepwise = signal.scale_amplitude(2.0).scale_time(4.0);
        assert_eq!(combined, stepwise);
        assert_eq!(combined.len(), 250);
        assert_eq!(signal.len(), 1_000);
    }
}
