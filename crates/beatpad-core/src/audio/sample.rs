use crate::{CoreError, CoreResult, audio::Resampler};

use std::{panic::Location, path::Path, time::Duration};

use error_location::ErrorLocation;
use tracing::{debug, instrument};

/// A decoded one-shot sample, mono, at a known sample rate.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    samples: Vec<f32>,
    sample_rate: u32,
}

impl SampleBuffer {
    /// Wrap already-decoded mono samples.
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Decode a WAV file and fold all channels down to mono.
    ///
    /// Integer files of any bit depth are scaled to [-1, 1]; float files must
    /// be 32-bit.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::SampleLoad`] if the file cannot be opened or read,
    /// [`CoreError::UnsupportedFormat`] for float depths other than 32 bits.
    #[track_caller]
    #[instrument]
    pub fn load_wav(path: &Path) -> CoreResult<Self> {
        let load_error = |e: hound::Error| CoreError::SampleLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        };

        let mut reader = hound::WavReader::open(path).map_err(load_error)?;
        let spec = reader.spec();

        let interleaved: Vec<f32> = match spec.sample_format {
            hound::SampleFormat::Float => {
                if spec.bits_per_sample != 32 {
                    return Err(CoreError::UnsupportedFormat {
                        path: path.to_path_buf(),
                        reason: format!("{}-bit float", spec.bits_per_sample),
                        location: ErrorLocation::from(Location::caller()),
                    });
                }
                reader
                    .samples::<f32>()
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(load_error)?
            }
            hound::SampleFormat::Int => {
                let full_scale = (1i64 << (spec.bits_per_sample.saturating_sub(1))) as f32;
                reader
                    .samples::<i32>()
                    .map(|s| s.map(|x| x as f32 / full_scale))
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(load_error)?
            }
        };

        let channels = usize::from(spec.channels.max(1));
        let samples: Vec<f32> = if channels == 1 {
            interleaved
        } else {
            interleaved
                .chunks_exact(channels)
                .map(|frame| frame.iter().sum::<f32>() / channels as f32)
                .collect()
        };

        debug!(
            path = ?path,
            sample_rate = spec.sample_rate,
            channels = spec.channels,
            frames = samples.len(),
            "Sample decoded"
        );

        Ok(Self::new(samples, spec.sample_rate))
    }

    /// Convert to `target_rate`, returning `self` untouched when the rates
    /// already match.
    #[track_caller]
    pub fn into_rate(self, target_rate: u32) -> CoreResult<Self> {
        if self.sample_rate == target_rate || self.samples.is_empty() {
            return Ok(Self {
                sample_rate: target_rate,
                ..self
            });
        }

        let mut resampler = Resampler::new(self.sample_rate, target_rate)?;
        let samples = resampler.resample(&self.samples)?;
        Ok(Self::new(samples, target_rate))
    }

    /// Mono sample data.
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the sample holds no audio.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Playing time at the buffer's own rate.
    pub fn duration(&self) -> Duration {
        if self.sample_rate == 0 {
            return Duration::ZERO;
        }
        Duration::from_secs_f64(self.samples.len() as f64 / f64::from(self.sample_rate))
    }
}
