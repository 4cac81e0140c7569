//! Error types and result utilities for signal operations.

use thiserror::Error;

/// Convenience type alias for results that may contain SignalError
pub type SignalResult<T> = Result<T, SignalError>;

/// Error types that can occur while building, synthesizing or exporting signals.
///
/// The scaling transforms and statistics never produce these; they degrade
/// to documented fallbacks instead.
#[derive(Error, Debug)]
pub enum SignalError {
    /// A waveform name outside the supported set.
    #[error("Unknown waveform kind: {0}")]
    UnknownWaveform(String),

    /// Custom sample data could not be parsed into a list of numbers.
    #[error("Invalid custom data {input:?}: {reason}")]
    InvalidCustomData {
        /// The raw text that was supplied.
        input: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Error that occurs when invalid parameters are provided to an operation.
    #[error("Invalid parameter '{parameter}': {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// Description of the constraint that was violated.
        reason: String,
    },

    /// Error that occurs when the time and amplitude axes differ in length.
    #[error("Dimension mismatch error: {time} time points but {amplitude} amplitude samples")]
    DimensionMismatch {
        /// Length of the time axis.
        time: usize,
        /// Length of the amplitude axis.
        amplitude: usize,
    },

    /// Audio rendering was requested for a continuous signal.
    #[error("Operation requires a discrete signal")]
    NotDiscrete,

    /// Generation parameters could not be decoded.
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// Underlying I/O failure while writing an export.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure reported by the WAV encoder.
    #[cfg(feature = "wav")]
    #[error("WAV encoding error: {0}")]
    Wav(#[from] hound::Error),
}

impl SignalError {
    /// Create an invalid custom data error
    pub fn invalid_custom_data(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidCustomData {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter,
            reason: reason.into(),
        }
    }
}
