//! Core trait definitions for signal operations.
//!
//! Each trait has a single responsibility. Neither trait mutates its
//! receiver: every operation returns a fresh value, so a signal held as an
//! "original" can never be altered through a transformed copy.

use super::types::{Classification, SignalStats};
use crate::Signal;

/// Derived statistics of a signal.
///
/// The numeric methods return `None` when a value is undefined for the
/// signal at hand (no samples, zero duration, no nominal frequency).
pub trait SignalStatistics {
    /// Largest amplitude sample.
    fn max(&self) -> Option<f64>;

    /// Smallest amplitude sample.
    fn min(&self) -> Option<f64>;

    /// Arithmetic mean of the amplitude samples.
    fn mean(&self) -> Option<f64>;

    /// Root mean square, `sqrt(mean(x^2))`.
    fn rms(&self) -> Option<f64>;

    /// Signal energy.
    ///
    /// Discrete signals use the plain sum `Σ|x|²`. Continuous signals use the
    /// Riemann sum `dt · Σ|x|²` with `dt = t[1] - t[0]` (1.0 for a single sample).
    fn energy(&self) -> Option<f64>;

    /// Energy divided by duration.
    ///
    /// Duration is `t[last] - t[0]`, or 1.0 for a single sample; a non-positive
    /// duration leaves power undefined.
    fn power(&self) -> Option<f64>;

    /// Period `1 / f` in seconds, when the signal has a positive nominal frequency.
    fn period(&self) -> Option<f64>;

    /// Whether the signal is discrete or continuous.
    fn classification(&self) -> Classification;

    /// All statistics formatted for display.
    fn stats(&self) -> SignalStats;
}

/// Amplitude and time scaling transforms.
pub trait SignalScaling {
    /// Multiplies every amplitude sample by `factor`.
    ///
    /// The time axis and metadata are unchanged; the time buffer is shared
    /// with the input rather than copied.
    fn scale_amplitude(&self, factor: f64) -> Signal;

    /// Compresses (`factor > 1`) or dilates (`factor < 1`) the time axis.
    ///
    /// The duration becomes `duration / factor` and a nominal frequency `f`
    /// becomes `f * factor`. A factor of exactly 1.0, or a signal with fewer
    /// than two samples, returns an unchanged copy.
    ///
    /// Discrete signals are resampled to `floor(len / factor)` samples, capped
    /// at [`MAX_TIME_SCALED_SAMPLES`](crate::MAX_TIME_SCALED_SAMPLES).
    /// Continuous signals keep their point count.
    fn scale_time(&self, factor: f64) -> Signal;

    /// Applies amplitude scaling followed by time scaling.
    fn scale(&self, amplitude_factor: f64, time_factor: f64) -> Signal {
        self.scale_amplitude(amplitude_factor)
            .scale_time(time_factor)
    }
}
