use crate::audio::SampleHandle;

/// Hard cap on simultaneous voices so the audio callback never allocates.
pub(crate) const MAX_VOICES: usize = 32;

struct Voice {
    sample: SampleHandle,
    position: usize,
    started: u64,
}

/// Sums one-shot sample voices into an interleaved output buffer.
pub(crate) struct Mixer {
    voices: Vec<Option<Voice>>,
    volume: f32,
    triggered: u64,
}

impl Mixer {
    pub(crate) fn new(volume: f32) -> Self {
        Self {
            voices: (0..MAX_VOICES).map(|_| None).collect(),
            volume: volume.clamp(0.0, 1.0),
            triggered: 0,
        }
    }

    /// Start a voice; when the pool is full the oldest voice is replaced.
    pub(crate) fn trigger(&mut self, sample: SampleHandle) {
        if sample.is_empty() {
            return;
        }
        self.triggered += 1;
        let voice = Voice {
            sample,
            position: 0,
            started: self.triggered,
        };

        let slot = match self.voices.iter().position(Option::is_none) {
            Some(free) => free,
            None => self
                .voices
                .iter()
                .enumerate()
                .min_by_key(|(_, v)| v.as_ref().map_or(0, |v| v.started))
                .map_or(0, |(i, _)| i),
        };
        self.voices[slot] = Some(voice);
    }

    #[cfg(test)]
    pub(crate) fn active_voices(&self) -> usize {
        self.voices.iter().filter(|v| v.is_some()).count()
    }

    /// Overwrite `out` (interleaved, `channels` wide) with the next block.
    pub(crate) fn render(&mut self, out: &mut [f32], channels: usize) {
        out.fill(0.0);
        let channels = channels.max(1);
        let frames = out.len() / channels;

        for slot in self.voices.iter_mut() {
            let finished = match slot.as_mut() {
                None => continue,
                Some(voice) => {
                    let data = voice.sample.samples();
                    let end = (voice.position + frames).min(data.len());
                    for (frame, &s) in out
                        .chunks_exact_mut(channels)
                        .zip(&data[voice.position..end])
                    {
                        for ch in frame {
                            *ch += s * self.volume;
                        }
                    }
                    voice.position = end;
                    voice.position >= data.len()
                }
            };
            if finished {
                *slot = None;
            }
        }

        for s in out.iter_mut() {
            *s = s.clamp(-1.0, 1.0);
        }
    }
}
