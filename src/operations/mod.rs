//! Signal operations: statistics and scaling transforms.
//!
//! ## Module Organization
//!
//! - [`traits`] - Core trait definitions
//! - [`statistics`] - Derived statistics (energy, power, RMS, ...)
//! - [`scaling`] - Amplitude and time scaling
//! - [`types`] - Supporting types and enums
//!
//! ## Quick Start
//!
//! ```rust
//! use wave_scaler::{GenerationParams, WaveformKind, synthesize, operations::*};
//!
//! let signal = synthesize(WaveformKind::SampledSine, &GenerationParams::default()).unwrap();
//!
//! // Statistical analysis
//! let stats = signal.stats();
//! assert_eq!(stats.classification, "Discrete");
//!
//! // Scaling returns new signals; `signal` is untouched
//! let louder = signal.scale_amplitude(2.0);
//! let faster = louder.scale_time(2.0);
//! assert_eq!(faster.len(), signal.len() / 2);
//! ```

// Public module declarations
pub mod traits;
pub mod types;

pub mod scaling;
pub mod statistics;

// Re-export main traits for convenience
pub use traits::{SignalScaling, SignalStatistics};

// Re-export supporting types
pub use statistics::compute_stats;
pub use types::{APERIODIC, Classification, NOT_AVAILABLE, SignalStats};
