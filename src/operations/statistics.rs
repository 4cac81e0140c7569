//! Statistical analysis operations for Signal.
//!
//! This module implements the SignalStatistics trait using ndarray
//! reductions over the amplitude axis, and provides [`compute_stats`] for
//! callers that may not hold a signal at all.

use super::traits::SignalStatistics;
use super::types::{APERIODIC, Classification, NOT_AVAILABLE, SignalStats};
use crate::Signal;

impl SignalStatistics for Signal {
    fn max(&self) -> Option<f64> {
        self.amplitude().iter().copied().reduce(nan_max)
    }

    fn min(&self) -> Option<f64> {
        self.amplitude().iter().copied().reduce(nan_min)
    }

    fn mean(&self) -> Option<f64> {
        self.amplitude().mean()
    }

    /// RMS = sqrt(mean(x^2)) where x is the amplitude axis.
    fn rms(&self) -> Option<f64> {
        self.amplitude().mapv(|x| x * x).mean().map(f64::sqrt)
    }

    fn energy(&self) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        let sum_of_squares: f64 = self.amplitude().iter().map(|x| x.abs().powi(2)).sum();
        if self.is_discrete() {
            Some(sum_of_squares)
        } else {
            let time = self.time();
            let dt = if time.len() > 1 {
                time[1] - time[0]
            } else {
                1.0
            };
            Some(sum_of_squares * dt)
        }
    }

    fn power(&self) -> Option<f64> {
        let energy = self.energy()?;
        let duration = if self.len() > 1 {
            self.duration()
        } else {
            1.0
        };
        (duration > 0.0).then(|| energy / duration)
    }

    fn period(&self) -> Option<f64> {
        self.frequency().filter(|&f| f > 0.0).map(|f| 1.0 / f)
    }

    fn classification(&self) -> Classification {
        if self.is_discrete() {
            Classification::Discrete
        } else {
            Classification::Continuous
        }
    }

    fn stats(&self) -> SignalStats {
        if self.is_empty() {
            return SignalStats::unavailable();
        }

        SignalStats {
            max: fixed(self.max()),
            min: fixed(self.min()),
            mean: fixed(self.mean()),
            rms: fixed(self.rms()),
            energy: fixed(self.energy()),
            power: fixed(self.power()),
            period: self
                .period()
                .map_or_else(|| APERIODIC.to_string(), |p| format!("{p:.3} s")),
            classification: self.classification().to_string(),
        }
    }
}

/// Computes display statistics, treating a missing signal like an empty one.
///
/// # Examples
/// ```rust
/// use wave_scaler::{Signal, compute_stats};
///
/// let signal = Signal::from_vecs(vec![0.0, 1.0, 2.0, 3.0], vec![-1.0, 1.0, -1.0, 1.0], true, None, 1).unwrap();
/// let stats = compute_stats(Some(&signal));
/// assert_eq!(stats.rms, "1.000");
/// assert_eq!(compute_stats(None).rms, "N/A");
/// ```
pub fn compute_stats(signal: Option<&Signal>) -> SignalStats {
    signal.map_or_else(SignalStats::unavailable, |s| s.stats())
}

// NaN propagates through the extrema, unlike `f64::max` / `f64::min`
fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

fn fixed(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| format!("{v:.3}"))
}
