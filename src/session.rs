//! Original/working signal pair.
//!
//! A [`SignalSession`] keeps the signal as it was synthesized next to the
//! signal currently being transformed. Scaling replaces the working signal
//! with a new one; reset restores it from the original. The original is
//! never modified.

use tracing::trace;

use crate::Signal;
use crate::operations::SignalScaling;

/// Holds an immutable original signal and a replaceable working copy.
///
/// # Examples
/// ```rust
/// use wave_scaler::{GenerationParams, SignalSession, WaveformKind, synthesize};
///
/// let signal = synthesize(WaveformKind::SampledCosine, &GenerationParams::default()).unwrap();
/// let mut session = SignalSession::new(signal);
///
/// session.apply_scaling(2.0, 4.0);
/// assert_eq!(session.current().len(), session.original().len() / 4);
///
/// session.reset();
/// assert!(!session.is_modified());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SignalSession {
    original: Signal,
    current: Signal,
}

impl SignalSession {
    /// Starts a session whose working signal is a copy of `original`.
    pub fn new(original: Signal) -> Self {
        let current = original.clone();
        Self { original, current }
    }

    /// The signal as it was when the session started.
    pub const fn original(&self) -> &Signal {
        &self.original
    }

    /// The working signal after any scaling applied so far.
    pub const fn current(&self) -> &Signal {
        &self.current
    }

    /// Scales the working signal: amplitude first, then time.
    ///
    /// Returns the new working signal.
    pub fn apply_scaling(&mut self, amplitude_factor: f64, time_factor: f64) -> &Signal {
        trace!(amplitude_factor, time_factor, "applying scaling to working signal");
        self.current = self.current.scale(amplitude_factor, time_factor);
        &self.current
    }

    /// Replaces the working signal with a fresh copy of the original.
    pub fn reset(&mut self) -> &Signal {
        self.current = self.original.clone();
        &self.current
    }

    /// Returns true if the working signal differs from the original.
    pub fn is_modified(&self) -> bool {
        self.current != self.original
    }

    /// Consumes the session, returning `(original, current)`.
    pub fn into_parts(self) -> (Signal, Signal) {
        (self.original, self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GenerationParams, WaveformKind, synthesize};

    fn session() -> SignalSession {
        let params = GenerationParams::default()
            .with_sample_rate(8_000)
            .with_duration(0.5);
        SignalSession::new(synthesize(WaveformKind::SampledSine, &params).expect("signal"))
    }

    #[test]
    fn test_new_session_is_unmodified() {
        let session = session();
        assert!(!session.is_modified());
        assert_eq!(session.current(), session.original());
    }

    #[test]
    fn test_scaling_accumulates_on_current() {
        let mut session = session();
        let original_len = session.original().len();
        assert_eq!(original_len, 4_000);

        session.apply_scaling(2.0, 2.0);
        session.apply_scaling(1.0, 2.0);

        assert!(session.is_modified());
        assert_eq!(session.current().len(), 1_000);
        assert_eq!(session.original().len(), original_len);
        assert_eq!(session.current().frequency(), Some(8.0));
        assert_eq!(session.original().frequency(), Some(2.0));
    }

    #[test]
    fn test_reset_restores_original() {
        let mut session = session();
        let before = session.original().clone();

        session.apply_scaling(0.5, 0.25);
        let restored = session.reset().clone();

        assert_eq!(restored, before);
        assert!(!session.is_modified());

        let (original, current) = session.into_parts();
        assert_eq!(original, current);
    }
}
