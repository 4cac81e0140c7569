//! Export and playback preparation.
//!
//! - [`to_csv`] / [`write_csv`] dump the raw `(time, amplitude)` pairs of any signal.
//! - [`pcm16_buffer`] turns a discrete signal into peak-normalised 16-bit PCM
//!   at an output device's sample rate, ready to hand to an audio backend.
//! - [`write_wav`] / [`wav_bytes`] wrap that buffer in a mono WAV container
//!   (requires the `wav` feature).

use std::io::Write;

use tracing::trace;

use crate::resampling::resample;
use crate::{Signal, SignalError, SignalResult};

/// Header row of CSV exports.
pub const CSV_HEADER: &str = "time_s,amplitude";

/// Formats a signal as CSV text with a [`CSV_HEADER`] row.
///
/// # Example
/// ```rust
/// use wave_scaler::{Signal, to_csv};
///
/// let signal = Signal::from_vecs(vec![0.0, 0.5], vec![1.0, -0.25], true, None, 2).unwrap();
/// assert_eq!(to_csv(&signal), "time_s,amplitude\n0.0,1.0\n0.5,-0.25\n");
/// ```
pub fn to_csv(signal: &Signal) -> String {
    let mut out = String::with_capacity(CSV_HEADER.len() + 1 + signal.len() * 24);
    out.push_str(CSV_HEADER);
    out.push('\n');
    for (t, x) in signal.iter() {
        out.push_str(&format!("{t:?},{x:?}\n"));
    }
    out
}

/// Writes a signal as CSV to `writer`.
///
/// # Errors
/// Returns [`SignalError::Io`] if the writer fails.
pub fn write_csv<W: Write>(signal: &Signal, mut writer: W) -> SignalResult<()> {
    writeln!(writer, "{CSV_HEADER}")?;
    for (t, x) in signal.iter() {
        writeln!(writer, "{t:?},{x:?}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Renders a discrete signal as 16-bit PCM at `target_rate`.
///
/// The amplitudes are normalised so the largest magnitude maps to full
/// scale (an all-zero signal is left as is), resampled from the signal's
/// own rate to `target_rate` when the two differ, and converted with
/// `x * 32767` truncated toward zero and clamped to the `i16` range.
///
/// # Errors
/// - [`SignalError::NotDiscrete`] for continuous signals.
/// - [`SignalError::InvalidParameter`] if either sample rate is zero.
pub fn pcm16_buffer(signal: &Signal, target_rate: u32) -> SignalResult<Vec<i16>> {
    if !signal.is_discrete() {
        return Err(SignalError::NotDiscrete);
    }
    if target_rate == 0 {
        return Err(SignalError::invalid_parameter(
            "target_rate",
            "must be greater than zero",
        ));
    }
    let source_rate = signal.sample_rate();
    if source_rate == 0 {
        return Err(SignalError::invalid_parameter(
            "sample_rate",
            "signal sample rate must be greater than zero",
        ));
    }

    let mut samples = signal.amplitude().to_vec();
    let peak = samples.iter().fold(0.0_f64, |peak, x| peak.max(x.abs()));
    if peak > 0.0 {
        samples.iter_mut().for_each(|x| *x /= peak);
    }

    if source_rate != target_rate {
        let num = (samples.len() as u64 * u64::from(target_rate) / u64::from(source_rate)) as usize;
        trace!(source_rate, target_rate, num, "resampling for playback");
        samples = resample(&samples, num);
    }

    Ok(samples
        .into_iter()
        .map(|x| (x * 32767.0).clamp(f64::from(i16::MIN), f64::from(i16::MAX)) as i16)
        .collect())
}

/// Writes a discrete signal as a mono 16-bit WAV stream at `target_rate`.
///
/// # Errors
/// Any error from [`pcm16_buffer`], or [`SignalError::Wav`] if encoding fails.
#[cfg(feature = "wav")]
pub fn write_wav<W>(signal: &Signal, target_rate: u32, writer: W) -> SignalResult<()>
where
    W: Write + std::io::Seek,
{
    let pcm = pcm16_buffer(signal, target_rate)?;
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: target_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut wav = hound::WavWriter::new(writer, spec)?;
    for sample in pcm {
        wav.write_sample(sample)?;
    }
    wav.finalize()?;
    Ok(())
}

/// Encodes a discrete signal as an in-memory WAV file.
///
/// # Errors
/// See [`write_wav`].
#[cfg(feature = "wav")]
pub fn wav_bytes(signal: &Signal, target_rate: u32) -> SignalResult<Vec<u8>> {
    let mut cursor = std::io::Cursor::new(Vec::new());
    write_wav(signal, target_rate, &mut cursor)?;
    Ok(cursor.into_inner())
}
