use crate::{
    PadId,
    audio::{SampleBuffer, SampleHandle, SoundSink},
    pad::PAD_COUNT,
};

use std::{fmt, path::Path, sync::Arc};

use tracing::{debug, info, instrument, warn};

/// Static mapping from each pad to the sample it plays.
///
/// A pad whose sample failed to load stays in the registry and simply makes
/// no sound; nothing upstream of the registry can tell the difference.
pub struct PadRegistry {
    sink: Arc<dyn SoundSink>,
    samples: [Option<SampleHandle>; PAD_COUNT],
}

impl PadRegistry {
    /// Create a registry with no samples loaded.
    pub fn new(sink: Arc<dyn SoundSink>) -> Self {
        Self {
            sink,
            samples: Default::default(),
        }
    }

    /// Assign a decoded sample to `pad`, replacing any previous one.
    pub fn insert(&mut self, pad: PadId, sample: SampleBuffer) {
        self.samples[pad.index()] = Some(Arc::new(sample));
    }

    /// Load every pad's WAV from `dir`, converted to `target_rate`.
    ///
    /// `file_for` names the file for each pad. Pads whose file is missing or
    /// unreadable are logged and left silent. Returns the number of pads
    /// that loaded.
    #[instrument(skip(self, file_for))]
    pub fn load_from_dir<F>(&mut self, dir: &Path, file_for: F, target_rate: u32) -> usize
    where
        F: Fn(PadId) -> String,
    {
        for pad in PadId::ALL {
            let path = dir.join(file_for(pad));
            let loaded = SampleBuffer::load_wav(&path).and_then(|s| s.into_rate(target_rate));

            match loaded {
                Ok(sample) => {
                    debug!(pad = %pad, path = ?path, frames = sample.len(), "Pad sample loaded");
                    self.insert(pad, sample);
                }
                Err(e) => {
                    warn!(pad = %pad, error = %e, "Pad sample unavailable, pad will be silent");
                    self.samples[pad.index()] = None;
                }
            }
        }

        let count = self.loaded_count();
        info!(loaded = count, total = PAD_COUNT, dir = ?dir, "Pad samples loaded");
        count
    }

    /// Play the pad's sample now.
    ///
    /// Never fails: an unloaded pad or a backend error is logged and the
    /// request is dropped.
    pub fn produce_sound(&self, pad: PadId) {
        let Some(sample) = &self.samples[pad.index()] else {
            debug!(pad = %pad, "No sample loaded for pad");
            return;
        };

        if let Err(e) = self.sink.play(sample) {
            warn!(pad = %pad, error = %e, "Failed to play pad sample");
        }
    }

    /// Name shown when the pad fires.
    pub fn display_name(&self, pad: PadId) -> &'static str {
        pad.display_name()
    }

    /// Whether the pad has a sample to play.
    pub fn is_loaded(&self, pad: PadId) -> bool {
        self.samples[pad.index()].is_some()
    }

    /// Number of pads with a sample.
    pub fn loaded_count(&self) -> usize {
        self.samples.iter().filter(|s| s.is_some()).count()
    }
}

impl fmt::Debug for PadRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PadRegistry")
            .field("loaded", &self.loaded_count())
            .finish_non_exhaustive()
    }
}
