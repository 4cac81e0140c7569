//! Core signal representation.
//!
//! A [`Signal`] pairs a time axis with an amplitude axis and records whether
//! the samples carry sampling-theory meaning (discrete) or are a dense
//! rendering of an analytic waveform (continuous).

use std::borrow::Cow;
use std::fmt::{self, Display};

use ndarray::{ArcArray1, Array1, ArrayView1};

use crate::{SignalError, SignalResult};

/// A one-dimensional signal: time coordinates, amplitudes and metadata.
///
/// Signals are immutable. Every transform returns a new `Signal`; the axes
/// are reference counted so an untouched axis is shared rather than copied
/// (amplitude scaling never duplicates the time axis).
///
/// # Fields
/// - `time`: non-decreasing time coordinates in seconds
/// - `amplitude`: one amplitude per time coordinate
/// - `is_discrete`: sample-based (true) or interpolation-based (false) semantics
/// - `frequency`: nominal fundamental in Hz, `None` for aperiodic signals
/// - `sample_rate`: sampling rate in Hz; only meaningful for discrete signals
///
/// # Examples
/// ```rust
/// use wave_scaler::Signal;
/// use ndarray::array;
///
/// let signal = Signal::new(array![0.0, 0.5, 1.0], array![1.0, -1.0, 1.0], true, Some(1.0), 2).unwrap();
/// assert_eq!(signal.len(), 3);
/// assert_eq!(signal.duration(), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    time: ArcArray1<f64>,
    amplitude: ArcArray1<f64>,
    is_discrete: bool,
    frequency: Option<f64>,
    sample_rate: u32,
}

impl Signal {
    /// Creates a signal from owned time and amplitude arrays.
    ///
    /// # Errors
    /// Returns [`SignalError::DimensionMismatch`] if the axes differ in length.
    pub fn new(
        time: Array1<f64>,
        amplitude: Array1<f64>,
        is_discrete: bool,
        frequency: Option<f64>,
        sample_rate: u32,
    ) -> SignalResult<Self> {
        Self::from_shared(
            time.into_shared(),
            amplitude.into_shared(),
            is_discrete,
            frequency,
            sample_rate,
        )
    }

    /// Creates a signal from plain vectors.
    ///
    /// # Errors
    /// Returns [`SignalError::DimensionMismatch`] if the vectors differ in length.
    pub fn from_vecs(
        time: Vec<f64>,
        amplitude: Vec<f64>,
        is_discrete: bool,
        frequency: Option<f64>,
        sample_rate: u32,
    ) -> SignalResult<Self> {
        Self::new(
            Array1::from_vec(time),
            Array1::from_vec(amplitude),
            is_discrete,
            frequency,
            sample_rate,
        )
    }

    pub(crate) fn from_shared(
        time: ArcArray1<f64>,
        amplitude: ArcArray1<f64>,
        is_discrete: bool,
        frequency: Option<f64>,
        sample_rate: u32,
    ) -> SignalResult<Self> {
        if time.len() != amplitude.len() {
            return Err(SignalError::DimensionMismatch {
                time: time.len(),
                amplitude: amplitude.len(),
            });
        }
        Ok(Self {
            time,
            amplitude,
            is_discrete,
            frequency,
            sample_rate,
        })
    }

    /// Returns a copy of this signal with new amplitudes on the same time axis.
    ///
    /// The caller guarantees `amplitude.len() == self.len()`.
    pub(crate) fn with_amplitude(&self, amplitude: Array1<f64>) -> Self {
        debug_assert_eq!(amplitude.len(), self.time.len());
        Self {
            time: self.time.clone(),
            amplitude: amplitude.into_shared(),
            is_discrete: self.is_discrete,
            frequency: self.frequency,
            sample_rate: self.sample_rate,
        }
    }

    /// Returns a copy of this signal with both axes replaced.
    ///
    /// The caller guarantees both arrays have the same length.
    pub(crate) fn with_axes(
        &self,
        time: Array1<f64>,
        amplitude: Array1<f64>,
        frequency: Option<f64>,
    ) -> Self {
        debug_assert_eq!(time.len(), amplitude.len());
        Self {
            time: time.into_shared(),
            amplitude: amplitude.into_shared(),
            is_discrete: self.is_discrete,
            frequency,
            sample_rate: self.sample_rate,
        }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.amplitude.len()
    }

    /// Returns true if the signal holds no samples.
    pub fn is_empty(&self) -> bool {
        self.amplitude.is_empty()
    }

    /// Time coordinates in seconds.
    pub fn time(&self) -> ArrayView1<'_, f64> {
        self.time.view()
    }

    /// Amplitude samples.
    pub fn amplitude(&self) -> ArrayView1<'_, f64> {
        self.amplitude.view()
    }

    /// Time coordinates as a contiguous slice.
    pub fn time_slice(&self) -> Cow<'_, [f64]> {
        contiguous(&self.time)
    }

    /// Amplitude samples as a contiguous slice.
    pub fn amplitude_slice(&self) -> Cow<'_, [f64]> {
        contiguous(&self.amplitude)
    }

    /// Whether the signal uses sample-based semantics.
    pub const fn is_discrete(&self) -> bool {
        self.is_discrete
    }

    /// Nominal fundamental frequency in Hz, if any.
    pub const fn frequency(&self) -> Option<f64> {
        self.frequency
    }

    /// Sample rate in Hz.
    pub const fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Span of the time axis, `t[last] - t[0]`, or 0 with fewer than two samples.
    pub fn duration(&self) -> f64 {
        let n = self.time.len();
        if n > 1 {
            self.time[n - 1] - self.time[0]
        } else {
            0.0
        }
    }

    /// Iterates over `(time, amplitude)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.time
            .iter()
            .copied()
            .zip(self.amplitude.iter().copied())
    }

    /// Returns true if both signals share the same time-axis buffer.
    pub fn shares_time_axis(&self, other: &Signal) -> bool {
        self.time.as_ptr() == other.time.as_ptr() && self.time.len() == other.time.len()
    }
}

fn contiguous(array: &ArcArray1<f64>) -> Cow<'_, [f64]> {
    match array.as_slice() {
        Some(slice) => Cow::Borrowed(slice),
        None => Cow::Owned(array.to_vec()),
    }
}

impl Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_discrete {
            "Discrete"
        } else {
            "Continuous"
        };
        write!(
            f,
            "Signal ({kind}): {} samples over {:.3} s",
            self.len(),
            self.duration()
        )?;
        if self.is_discrete {
            write!(f, " @ {} Hz", self.sample_rate)?;
        }
        if let Some(freq) = self.frequency {
            write!(f, ", f = {freq} Hz")?;
        }

        // Alternate (#) lists a short preview of the samples
        if f.alternate() {
            let preview = 5.min(self.len());
            write!(f, "\n  [")?;
            for (i, (t, x)) in self.iter().take(preview).enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "({t:.4}, {x:.4})")?;
            }
            if self.len() > preview {
                write!(f, ", ...")?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_new_rejects_mismatched_axes() {
        let result = Signal::new(array![0.0, 1.0], array![1.0], true, None, 8000);
        assert!(matches!(
            result,
            Err(SignalError::DimensionMismatch {
                time: 2,
                amplitude: 1
            })
        ));
    }

    #[test]
    fn test_duration() {
        let signal = Signal::new(array![0.5, 1.0, 2.5], array![0.0, 1.0, 0.0], false, None, 44100)
            .expect("valid signal");
        assert_eq!(signal.duration(), 2.0);

        let single = Signal::new(array![3.0], array![1.0], true, None, 8000).expect("valid signal");
        assert_eq!(single.duration(), 0.0);
    }

    #[test]
    fn test_with_amplitude_shares_time_axis() {
        let signal = Signal::from_vecs(vec![0.0, 1.0], vec![1.0, 2.0], true, None, 8000)
            .expect("valid signal");
        let scaled = signal.with_amplitude(array![2.0, 4.0]);

        assert!(scaled.shares_time_axis(&signal));
        assert_eq!(signal.amplitude(), array![1.0, 2.0]);
        assert_eq!(scaled.amplitude(), array![2.0, 4.0]);
    }

    #[test]
    fn test_display() {
        let signal = Signal::from_vecs(vec![0.0, 0.5], vec![1.0, -1.0], true, Some(2.0), 2)
            .expect("valid signal");
        let text = format!("{signal}");
        assert!(text.starts_with("Signal (Discrete): 2 samples"));
        assert!(text.contains("@ 2 Hz"));

        let detailed = format!("{signal:#}");
        assert!(detailed.contains("(0.5000, -1.0000)"));
    }
}
