mod mixer;
mod output;
mod resampler;
mod sample;
mod sink;

pub(crate) use resampler::Resampler;

#[cfg(test)]
pub(crate) use {
    mixer::{MAX_VOICES, Mixer},
    output::write_converted,
};

pub use {
    output::{AudioOutput, OutputSink},
    sample::SampleBuffer,
    sink::{NullSink, SampleHandle, SoundSink},
};
