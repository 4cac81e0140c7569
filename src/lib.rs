// Correctness and logic
#![warn(clippy::unit_cmp)] // Detects comparing unit types
#![warn(clippy::match_same_arms)]
// Duplicate match arms

// Performance-focused
#![warn(clippy::inefficient_to_string)] // `format!("{}", x)` vs `x.to_string()`
#![warn(clippy::map_clone)] // Cloning inside `map()` unnecessarily
#![warn(clippy::unnecessary_to_owned)] // Detects redundant `.to_owned()` or `.clone()`
#![warn(clippy::large_stack_arrays)] // Helps avoid stack overflows
#![warn(clippy::box_collection)] // Warns on boxed `Vec`, `String`, etc.
#![warn(clippy::vec_box)] // Avoids using `Vec<Box<T>>` when unnecessary
#![warn(clippy::needless_collect)] // Avoids `.collect().iter()` chains

// Style and idiomatic Rust
#![warn(clippy::redundant_clone)] // Detects unnecessary `.clone()`
#![warn(clippy::identity_op)] // e.g., `x + 0`, `x * 1`
#![warn(clippy::needless_return)] // Avoids `return` at the end of functions
#![warn(clippy::let_unit_value)] // Avoids binding `()` to variables
#![warn(clippy::manual_map)] // Use `.map()` instead of manual `match`
#![warn(clippy::unwrap_used)] // Avoids using `unwrap()`

// Maintainability
#![warn(clippy::missing_panics_doc)] // Docs for functions that might panic
#![warn(clippy::missing_safety_doc)] // Docs for `unsafe` functions
#![allow(clippy::too_many_arguments)]
// Allow functions with many parameters (very few and far between)
#![deny(missing_docs)] // Documentation is a must for release

//! # WaveScaler
//!
//! Generate one-dimensional signals, inspect their statistics and apply
//! amplitude and time scaling.
//!
//! ## Overview
//!
//! A [`Signal`] is a time axis plus an amplitude axis, flagged as either
//! *continuous* (a dense rendering of an analytic waveform) or *discrete*
//! (samples spaced `1 / Fs` apart that mean something for playback). The
//! crate provides:
//!
//! - **Synthesis**: [`synthesize`] / [`generate`] for sine, cosine, decaying
//!   exponential, triangle and sawtooth waves (continuous and sampled), plus
//!   custom comma-separated data.
//! - **Scaling**: [`SignalScaling::scale_amplitude`] and
//!   [`SignalScaling::scale_time`], which always return new signals.
//! - **Statistics**: [`SignalStatistics`] and [`compute_stats`] for max, min,
//!   mean, RMS, energy, power, period and classification.
//! - **Sessions**: [`SignalSession`] keeps an original next to a working copy.
//! - **Export**: CSV text, 16-bit PCM buffers and WAV files.
//!
//! ## Error Handling
//!
//! Synthesis reports "no signal" as `None`; use [`try_synthesize`] to get the
//! reason as a [`SignalError`]. Scaling and statistics never fail: degenerate
//! inputs fall back to documented results.
//!
//! ```rust
//! use wave_scaler::{GenerationParams, SignalError, WaveformKind, try_synthesize};
//!
//! let params = GenerationParams::default().with_custom_data("abc");
//! match try_synthesize(WaveformKind::CustomDiscrete, &params) {
//!     Ok(_) => unreachable!(),
//!     Err(SignalError::InvalidCustomData { reason, .. }) => eprintln!("Rejected: {reason}"),
//!     Err(other) => eprintln!("Other error: {other}"),
//! }
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use wave_scaler::{GenerationParams, SignalScaling, SignalStatistics, WaveformKind, synthesize};
//!
//! let params = GenerationParams::default()
//!     .with_amplitude(2.0)
//!     .with_frequency(5.0)
//!     .with_sample_rate(8_000);
//! let signal = synthesize(WaveformKind::SampledSine, &params).unwrap();
//!
//! let scaled = signal.scale_amplitude(0.5).scale_time(2.0);
//! assert_eq!(scaled.len(), signal.len() / 2);
//! assert_eq!(scaled.frequency(), Some(10.0));
//!
//! let stats = scaled.stats();
//! println!("RMS {} / Energy {} / Period {}", stats.rms, stats.energy, stats.period);
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (debug level when synthesis yields no
//! signal or the time-scaling sample cap engages, trace level for routine
//! operations). Install any subscriber to see them.
//!
//! ## License
//!
//! MIT License

mod error;

pub mod export;
pub mod operations;
mod repr;
pub mod resampling;
pub mod session;
pub mod utils;

pub use crate::error::{SignalError, SignalResult};
#[cfg(feature = "wav")]
pub use crate::export::{wav_bytes, write_wav};
pub use crate::export::{CSV_HEADER, pcm16_buffer, to_csv, write_csv};
pub use crate::operations::{
    APERIODIC, Classification, NOT_AVAILABLE, SignalScaling, SignalStatistics, SignalStats,
    compute_stats,
};
pub use crate::repr::Signal;
pub use crate::resampling::resample;
pub use crate::session::SignalSession;
pub use crate::utils::generation::{
    GenerationParams, WaveShape, WaveformKind, generate, generate_named, parse_custom_data,
    synthesize, try_synthesize,
};

/// Default signal duration in seconds.
pub const DEFAULT_DURATION: f64 = 2.0;
/// Default sample rate in Hz for sampled waveforms.
pub const DEFAULT_SAMPLE_RATE: u32 = 16_000;
/// Nominal output device rate in Hz, recorded on continuous signals.
pub const DEFAULT_DEVICE_SAMPLE_RATE: u32 = 44_100;
/// Upper bound on the sample count produced by time scaling a discrete signal.
pub const MAX_TIME_SCALED_SAMPLES: usize = 250_000;
/// Render points per period for continuous waveforms.
pub const POINTS_PER_CYCLE: usize = 50;
/// Minimum number of render points for continuous waveforms.
pub const MIN_CONTINUOUS_POINTS: usize = 1_000;
/// Maximum number of render points for continuous waveforms.
pub const MAX_CONTINUOUS_POINTS: usize = 50_000;
/// Carrier frequency in Hz of the exponential waveforms; `f` only sets the decay rate.
pub const EXPONENTIAL_CARRIER_HZ: f64 = 5.0;
