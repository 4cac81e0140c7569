//! Utility functions for signal synthesis and resampling.
//!
//! # Modules
//!
//! - [`generation`] - Waveform synthesis from generation parameters
//! - [`interpolation`] - Even grids and linear interpolation

pub mod generation;
pub mod interpolation;

// Re-export common utilities
pub use generation::*;
pub use interpolation::{LinearInterpolator, linspace};
