use crate::{CoreResult, audio::SampleBuffer};

use std::sync::Arc;

use tracing::trace;

/// Shared, immutable handle to a loaded sample.
pub type SampleHandle = Arc<SampleBuffer>;

/// Audio backend that renders a sample immediately.
///
/// Requests are fire-and-forget: an implementation must not block on the
/// sound finishing.
pub trait SoundSink: Send + Sync {
    /// Start playing `sample` now, mixed over anything already sounding.
    fn play(&self, sample: &SampleHandle) -> CoreResult<()>;
}

/// Sink that drops every request. Used when no output device is available.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl SoundSink for NullSink {
    fn play(&self, sample: &SampleHandle) -> CoreResult<()> {
        trace!(frames = sample.len(), "No output device, sample discarded");
        Ok(())
    }
}
