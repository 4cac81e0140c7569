//! Supporting types for signal operations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Placeholder for a statistic that cannot be computed.
pub const NOT_AVAILABLE: &str = "N/A";

/// Period shown for signals without a positive nominal frequency.
pub const APERIODIC: &str = "Aperiodic";

/// How a signal's samples should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    /// Dense rendering of an analytic waveform.
    Continuous,
    /// Samples at a real sampling interval.
    Discrete,
}

impl Classification {
    /// Label used in statistics output.
    pub const fn label(self) -> &'static str {
        match self {
            Classification::Continuous => "Continuous",
            Classification::Discrete => "Discrete",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Display-ready statistics of a signal.
///
/// Numbers are formatted with three fractional digits. Fields that cannot be
/// computed hold [`NOT_AVAILABLE`]; the period of an aperiodic signal holds
/// [`APERIODIC`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalStats {
    /// Largest sample.
    #[serde(rename = "Max")]
    pub max: String,
    /// Smallest sample.
    #[serde(rename = "Min")]
    pub min: String,
    /// Mean sample value.
    #[serde(rename = "Mean")]
    pub mean: String,
    /// Root mean square.
    #[serde(rename = "RMS")]
    pub rms: String,
    /// Energy.
    #[serde(rename = "Energy")]
    pub energy: String,
    /// Energy per second.
    #[serde(rename = "Power")]
    pub power: String,
    /// Period in seconds, e.g. `"0.500 s"`.
    #[serde(rename = "Period")]
    pub period: String,
    /// `"Continuous"` or `"Discrete"`.
    #[serde(rename = "Classification")]
    pub classification: String,
}

impl SignalStats {
    /// Statistics for an absent or empty signal: every field is `"N/A"`.
    pub fn unavailable() -> Self {
        let na = || NOT_AVAILABLE.to_string();
        Self {
            max: na(),
            min: na(),
            mean: na(),
            rms: na(),
            energy: na(),
            power: na(),
            period: na(),
            classification: na(),
        }
    }

    /// `(label, value)` pairs in display order.
    pub fn entries(&self) -> [(&'static str, &str); 8] {
        [
            ("Max", self.max.as_str()),
            ("Min", self.min.as_str()),
            ("Mean", self.mean.as_str()),
            ("RMS", self.rms.as_str()),
            ("Energy", self.energy.as_str()),
            ("Power", self.power.as_str()),
            ("Period", self.period.as_str()),
            ("Classification", self.classification.as_str()),
        ]
    }
}
