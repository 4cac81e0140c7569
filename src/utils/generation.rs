//! Signal synthesis.
//!
//! This module turns a [`WaveformKind`] plus a set of [`GenerationParams`]
//! into a [`Signal`]. Continuous kinds are rendered densely over a
//! right-open interval for smooth plotting; sampled kinds are evaluated on
//! a grid of spacing `1 / sample_rate`; custom kinds take their amplitudes
//! from a comma-separated list of numbers.
//!
//! Synthesis never fails loudly. An unknown kind name or unparseable custom
//! data yields `None` ("no signal"), with the reason logged at debug level.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use ndarray::Array1;
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{
    DEFAULT_DEVICE_SAMPLE_RATE, DEFAULT_DURATION, DEFAULT_SAMPLE_RATE, EXPONENTIAL_CARRIER_HZ,
    MAX_CONTINUOUS_POINTS, MIN_CONTINUOUS_POINTS, POINTS_PER_CYCLE, Signal, SignalError,
    SignalResult,
};

/// Analytic waveform families shared by the continuous and sampled kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WaveShape {
    /// `A sin(2πft + φ)`
    Sine,
    /// `A cos(2πft + φ)`
    Cosine,
    /// Decaying cosine, `A e^(-ft) cos(2π·5·t + φ)`.
    Exponential,
    /// `A (2/π) asin(sin(2πft + φ))`
    Triangular,
    /// Centered sawtooth in `[-A, A)`.
    Sawtooth,
}

/// The closed set of waveform kinds the synthesizer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WaveformKind {
    /// Continuous sine.
    #[serde(rename = "Sine")]
    Sine,
    /// Continuous cosine.
    #[serde(rename = "Cosine")]
    Cosine,
    /// Continuous decaying exponential.
    #[serde(rename = "Exponential")]
    Exponential,
    /// Continuous triangle.
    #[serde(rename = "Triangular")]
    Triangular,
    /// Continuous sawtooth.
    #[serde(rename = "Sawtooth")]
    Sawtooth,
    /// Sine sampled at the configured sample rate.
    #[serde(rename = "Sampled Sine")]
    SampledSine,
    /// Cosine sampled at the configured sample rate.
    #[serde(rename = "Sampled Cosine")]
    SampledCosine,
    /// Decaying exponential sampled at the configured sample rate.
    #[serde(rename = "Sampled Exponential")]
    SampledExponential,
    /// Triangle sampled at the configured sample rate.
    #[serde(rename = "Sampled Triangular")]
    SampledTriangular,
    /// Sawtooth sampled at the configured sample rate.
    #[serde(rename = "Sampled Sawtooth")]
    SampledSawtooth,
    /// User-supplied amplitudes spread evenly over `[0, duration]`.
    #[serde(rename = "Custom Continuous")]
    CustomContinuous,
    /// User-supplied amplitudes at spacing `duration / n`.
    #[serde(rename = "Custom Discrete")]
    CustomDiscrete,
}

impl WaveformKind {
    /// Every supported kind, in menu order.
    pub const ALL: [WaveformKind; 12] = [
        WaveformKind::Sine,
        WaveformKind::Cosine,
        WaveformKind::Exponential,
        WaveformKind::Triangular,
        WaveformKind::Sawtooth,
        WaveformKind::SampledSine,
        WaveformKind::SampledCosine,
        WaveformKind::SampledExponential,
        WaveformKind::SampledTriangular,
        WaveformKind::SampledSawtooth,
        WaveformKind::CustomContinuous,
        WaveformKind::CustomDiscrete,
    ];

    /// Human readable name, e.g. `"Sampled Sine"`.
    pub const fn name(self) -> &'static str {
        match self {
            WaveformKind::Sine => "Sine",
            WaveformKind::Cosine => "Cosine",
            WaveformKind::Exponential => "Exponential",
            WaveformKind::Triangular => "Triangular",
            WaveformKind::Sawtooth => "Sawtooth",
            WaveformKind::SampledSine => "Sampled Sine",
            WaveformKind::SampledCosine => "Sampled Cosine",
            WaveformKind::SampledExponential => "Sampled Exponential",
            WaveformKind::SampledTriangular => "Sampled Triangular",
            WaveformKind::SampledSawtooth => "Sampled Sawtooth",
            WaveformKind::CustomContinuous => "Custom Continuous",
            WaveformKind::CustomDiscrete => "Custom Discrete",
        }
    }

    /// Returns true for kinds that produce a discrete signal.
    pub const fn is_discrete(self) -> bool {
        matches!(
            self,
            WaveformKind::SampledSine
                | WaveformKind::SampledCosine
                | WaveformKind::SampledExponential
                | WaveformKind::SampledTriangular
                | WaveformKind::SampledSawtooth
                | WaveformKind::CustomDiscrete
        )
    }

    /// Returns true for kinds whose amplitudes come from custom data.
    pub const fn is_custom(self) -> bool {
        matches!(
            self,
            WaveformKind::CustomContinuous | WaveformKind::CustomDiscrete
        )
    }

    /// The analytic shape behind this kind, `None` for custom kinds.
    pub const fn shape(self) -> Option<WaveShape> {
        match self {
            WaveformKind::Sine | WaveformKind::SampledSine => Some(WaveShape::Sine),
            WaveformKind::Cosine | WaveformKind::SampledCosine => Some(WaveShape::Cosine),
            WaveformKind::Exponential | WaveformKind::SampledExponential => {
                Some(WaveShape::Exponential)
            }
            WaveformKind::Triangular | WaveformKind::SampledTriangular => {
                Some(WaveShape::Triangular)
            }
            WaveformKind::Sawtooth | WaveformKind::SampledSawtooth => Some(WaveShape::Sawtooth),
            WaveformKind::CustomContinuous | WaveformKind::CustomDiscrete => None,
        }
    }
}

impl fmt::Display for WaveformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WaveformKind {
    type Err = SignalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        WaveformKind::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| SignalError::UnknownWaveform(name.to_string()))
    }
}

/// Parameters for signal synthesis.
///
/// Missing fields fall back to the defaults when deserialized, so a partial
/// JSON object such as `{"frequency": 5.0}` is a valid configuration.
///
/// # Examples
/// ```rust
/// use wave_scaler::GenerationParams;
///
/// let params = GenerationParams::from_json(r#"{"amplitude": 2.5}"#).unwrap();
/// assert_eq!(params.amplitude, 2.5);
/// assert_eq!(params.sample_rate, 16_000);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationParams {
    /// Peak amplitude `A`.
    pub amplitude: f64,
    /// Frequency `f` in Hz. Zero disables the phase time shift.
    pub frequency: f64,
    /// Phase `φ` in degrees.
    pub phase_degrees: f64,
    /// Sample rate in Hz; used by the sampled kinds and custom discrete data.
    ///
    /// Continuous kinds ignore it and record
    /// [`DEFAULT_DEVICE_SAMPLE_RATE`](crate::DEFAULT_DEVICE_SAMPLE_RATE).
    pub sample_rate: u32,
    /// Signal duration in seconds.
    pub duration: f64,
    /// Comma-separated amplitudes for the custom kinds.
    pub custom_data: Option<String>,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            amplitude: 1.0,
            frequency: 2.0,
            phase_degrees: 0.0,
            sample_rate: DEFAULT_SAMPLE_RATE,
            duration: DEFAULT_DURATION,
            custom_data: None,
        }
    }
}

impl GenerationParams {
    /// Decodes parameters from a JSON object.
    ///
    /// # Errors
    /// Returns [`SignalError::Config`] if the text is not a valid parameter object.
    pub fn from_json(json: &str) -> SignalResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the amplitude.
    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Sets the frequency in Hz.
    pub fn with_frequency(mut self, frequency: f64) -> Self {
        self.frequency = frequency;
        self
    }

    /// Sets the phase in degrees.
    pub fn with_phase_degrees(mut self, phase_degrees: f64) -> Self {
        self.phase_degrees = phase_degrees;
        self
    }

    /// Sets the sample rate in Hz.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Sets the duration in seconds.
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the custom data string.
    pub fn with_custom_data(mut self, custom_data: impl Into<String>) -> Self {
        self.custom_data = Some(custom_data.into());
        self
    }
}

/// Generates a signal from loose parameters.
///
/// Returns `None` when no signal can be produced (unparseable custom data).
///
/// # Examples
/// ```rust
/// use wave_scaler::{WaveformKind, generate};
///
/// let signal = generate(WaveformKind::SampledSine, 1.0, 2.0, 0.0, 16_000, 2.0, None).unwrap();
/// assert!(signal.is_discrete());
/// assert_eq!(signal.len(), 32_000);
/// ```
pub fn generate(
    kind: WaveformKind,
    amplitude: f64,
    frequency: f64,
    phase_degrees: f64,
    sample_rate: u32,
    duration: f64,
    custom_data: Option<&str>,
) -> Option<Signal> {
    let params = GenerationParams {
        amplitude,
        frequency,
        phase_degrees,
        sample_rate,
        duration,
        custom_data: custom_data.map(str::to_owned),
    };
    synthesize(kind, &params)
}

/// Generates a signal for a kind given by name, e.g. `"Sampled Cosine"`.
///
/// Unknown names produce `None`, as does unparseable custom data.
pub fn generate_named(kind: &str, params: &GenerationParams) -> Option<Signal> {
    match kind.parse::<WaveformKind>() {
        Ok(kind) => synthesize(kind, params),
        Err(e) => {
            debug!(error = %e, "signal synthesis produced no signal");
            None
        }
    }
}

/// Generates a signal, returning `None` if synthesis is not possible.
pub fn synthesize(kind: WaveformKind, params: &GenerationParams) -> Option<Signal> {
    match try_synthesize(kind, params) {
        Ok(signal) => Some(signal),
        Err(e) => {
            debug!(%kind, error = %e, "signal synthesis produced no signal");
            None
        }
    }
}

/// Generates a signal, reporting why synthesis failed.
///
/// # Errors
/// Returns [`SignalError::InvalidCustomData`] for a custom kind whose data is
/// empty, contains no digits, or has a token that is not a number.
pub fn try_synthesize(kind: WaveformKind, params: &GenerationParams) -> SignalResult<Signal> {
    let frequency = params.frequency;
    let nominal_frequency = (frequency != 0.0).then_some(frequency);
    // Continuous signals carry the output device rate, not the sampling rate
    let sample_rate = if kind.is_discrete() {
        params.sample_rate
    } else {
        DEFAULT_DEVICE_SAMPLE_RATE
    };

    let signal = match kind.shape() {
        Some(shape) => {
            let time = if kind.is_discrete() {
                sample_times(params.duration, params.sample_rate)
            } else {
                continuous_times(params.duration, frequency)
            };
            let amplitude = evaluate_shape(
                shape,
                &time,
                params.amplitude,
                frequency,
                params.phase_degrees,
            );
            Signal::new(
                time,
                amplitude,
                kind.is_discrete(),
                nominal_frequency,
                sample_rate,
            )?
        }
        None => {
            let values = parse_custom_data(params.custom_data.as_deref().unwrap_or_default())?;
            let n = values.len();
            let time = if kind.is_discrete() {
                let step = params.duration / n as f64;
                Array1::from_shape_fn(n, |i| i as f64 * step)
            } else {
                Array1::linspace(0.0, params.duration, n)
            };
            Signal::new(
                time,
                Array1::from_vec(values),
                kind.is_discrete(),
                nominal_frequency,
                sample_rate,
            )?
        }
    };

    trace!(%kind, samples = signal.len(), "synthesized signal");
    Ok(signal)
}

/// Parses comma-separated custom amplitudes.
///
/// # Errors
/// Fails if the input is empty, contains no digit at all, or any token
/// (after trimming whitespace) is not a valid number.
pub fn parse_custom_data(input: &str) -> SignalResult<Vec<f64>> {
    if input.is_empty() {
        return Err(SignalError::invalid_custom_data(input, "no data supplied"));
    }
    if !input.chars().any(|c| c.is_ascii_digit()) {
        return Err(SignalError::invalid_custom_data(input, "no numeric values"));
    }

    input
        .split(',')
        .map(|token| {
            let token = token.trim();
            token.parse::<f64>().map_err(|e| {
                SignalError::invalid_custom_data(input, format!("'{token}' is not a number: {e}"))
            })
        })
        .collect()
}

/// Sample instants `i / sample_rate` for `floor(duration * sample_rate)` samples.
fn sample_times(duration: f64, sample_rate: u32) -> Array1<f64> {
    let rate = f64::from(sample_rate);
    let num_samples = (duration * rate).floor().to_usize().unwrap_or(0);
    Array1::from_shape_fn(num_samples, |i| i as f64 / rate)
}

/// Evenly spaced render points over `[0, duration)`.
///
/// Uses [`POINTS_PER_CYCLE`] points per period, bounded below by
/// [`MIN_CONTINUOUS_POINTS`] and above by [`MAX_CONTINUOUS_POINTS`].
fn continuous_times(duration: f64, frequency: f64) -> Array1<f64> {
    let per_cycle = (duration * frequency * POINTS_PER_CYCLE as f64)
        .floor()
        .to_usize()
        .unwrap_or(0);
    let num_points = per_cycle
        .max(MIN_CONTINUOUS_POINTS)
        .min(MAX_CONTINUOUS_POINTS);
    let step = duration / num_points as f64;
    Array1::from_shape_fn(num_points, |i| i as f64 * step)
}

fn evaluate_shape(
    shape: WaveShape,
    time: &Array1<f64>,
    amplitude: f64,
    frequency: f64,
    phase_degrees: f64,
) -> Array1<f64> {
    let phase = phase_degrees.to_radians();
    let omega = 2.0 * PI * frequency;

    match shape {
        WaveShape::Sine => time.mapv(|t| amplitude * (omega * t + phase).sin()),
        WaveShape::Cosine => time.mapv(|t| amplitude * (omega * t + phase).cos()),
        WaveShape::Exponential => time.mapv(|t| {
            let carrier = 2.0 * PI * EXPONENTIAL_CARRIER_HZ * t + phase;
            amplitude * (-frequency * t).exp() * carrier.cos()
        }),
        WaveShape::Triangular => {
            time.mapv(|t| amplitude * (2.0 / PI) * (omega * t + phase).sin().asin())
        }
        WaveShape::Sawtooth => {
            // Phase enters as a time shift here rather than inside the argument.
            let shift = if frequency > 0.0 { phase / omega } else { 0.0 };
            time.mapv(|t| {
                let cycles = (t + shift) * frequency;
                amplitude * 2.0 * (cycles - (0.5 + cycles).floor())
            })
        }
    }
}
