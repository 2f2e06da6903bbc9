use crate::{CoreError, CoreResult};

use std::panic::Location;

use audioadapter_buffers::direct::InterleavedSlice;
use error_location::ErrorLocation;
use rubato::{Fft, FixedSync, Resampler as RubatoResampler};
use tracing::{debug, instrument};

/// Frames fed to the FFT resampler per call.
const CHUNK_SIZE: usize = 1024;

/// Mono sample-rate converter for one-shot drum samples.
///
/// Unlike a streaming converter, the whole sample is available up front, so
/// the resampler's own latency is trimmed from the front of the output. A
/// drum hit must start on the first output frame, not a few hundred frames in.
pub struct Resampler {
    resampler: Fft<f32>,
    input_rate: u32,
    output_rate: u32,
}

impl Resampler {
    /// Build a converter from `input_rate` to `output_rate`.
    #[track_caller]
    #[instrument]
    pub fn new(input_rate: u32, output_rate: u32) -> CoreResult<Self> {
        let resampler = Fft::<f32>::new(
            input_rate as usize,
            output_rate as usize,
            CHUNK_SIZE,
            2,
            1,
            FixedSync::Input,
        )
        .map_err(|e| CoreError::Resampling {
            reason: format!("Failed to create resampler: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(Self {
            resampler,
            input_rate,
            output_rate,
        })
    }

    /// Convert a complete sample, returning exactly the number of frames the
    /// rate ratio calls for.
    #[track_caller]
    #[instrument(skip(self, samples))]
    pub fn resample(&mut self, samples: &[f32]) -> CoreResult<Vec<f32>> {
        if samples.is_empty() {
            return Ok(Vec::new());
        }

        let expected_len = (samples.len() as f64 * f64::from(self.output_rate)
            / f64::from(self.input_rate))
        .round() as usize;
        let delay = self.resampler.output_delay();
        let wanted = expected_len + delay;

        let mut output = Vec::with_capacity(wanted + CHUNK_SIZE);
        let mut input_chunk = vec![0.0f32; CHUNK_SIZE];
        let mut output_chunk = vec![0.0f32; self.resampler.output_frames_max()];
        let mut consumed = 0;

        // Keep feeding (zero-padded once the sample runs out) until the
        // delayed tail has been flushed through.
        while output.len() < wanted {
            let end = (consumed + CHUNK_SIZE).min(samples.len());
            let real = end.saturating_sub(consumed);
            input_chunk[..real].copy_from_slice(&samples[consumed.min(end)..end]);
            input_chunk[real..].fill(0.0);
            consumed = end;

            let input_adapter = InterleavedSlice::new(&input_chunk, 1, CHUNK_SIZE).map_err(|e| {
                CoreError::Resampling {
                    reason: format!("Failed to create input adapter: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?;

            let frames_max = output_chunk.len();
            let mut output_adapter = InterleavedSlice::new_mut(&mut output_chunk, 1, frames_max)
                .map_err(|e| CoreError::Resampling {
                    reason: format!("Failed to create output adapter: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })?;

            let (_, written) = self
                .resampler
                .process_into_buffer(&input_adapter, &mut output_adapter, None)
                .map_err(|e| CoreError::Resampling {
                    reason: format!("Resampling failed: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })?;

            if written == 0 && consumed >= samples.len() {
                break;
            }
            output.extend_from_slice(&output_chunk[..written]);
        }

        let mut trimmed: Vec<f32> = output.into_iter().skip(delay).collect();
        trimmed.resize(expected_len, 0.0);

        debug!(
            input_len = samples.len(),
            output_len = trimmed.len(),
            input_rate = self.input_rate,
            output_rate = self.output_rate,
            trimmed_delay = delay,
            "Sample resampled"
        );

        Ok(trimmed)
    }
}
