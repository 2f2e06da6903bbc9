use crate::{
    SampleBuffer,
    audio::{MAX_VOICES, Mixer},
};

use std::sync::Arc;

const CHANNELS: usize = 2;

fn sample(value: f32, frames: usize) -> Arc<SampleBuffer> {
    Arc::new(SampleBuffer::new(vec![value; frames], 48_000))
}

/// WHAT: A triggered voice is written to every output channel
/// WHY: Mono samples must reach both speakers
#[test]
fn given_triggered_voice_when_rendering_then_all_channels_filled() {
    // Given: A mixer at full volume with one voice
    let mut mixer = Mixer::new(1.0);
    mixer.trigger(sample(0.25, 4));
    let mut out = vec![9.0f32; 4 * CHANNELS];

    // When: Rendering one block
    mixer.render(&mut out, CHANNELS);

    // Then: Every slot carries the sample and the voice is done
    assert!(out.iter().all(|&s| (s - 0.25).abs() < f32::EPSILON));
    assert_eq!(mixer.active_voices(), 0);
}

/// WHAT: Voices longer than a block continue into the next block
/// WHY: Samples are longer than a single callback buffer
#[test]
fn given_long_voice_when_rendering_two_blocks_then_tail_continues() {
    // Given: A 6-frame voice and 4-frame blocks
    let mut mixer = Mixer::new(1.0);
    mixer.trigger(sample(0.5, 6));
    let mut first = vec![0.0f32; 4 * CHANNELS];
    let mut second = vec![0.0f32; 4 * CHANNELS];

    // When: Rendering twice
    mixer.render(&mut first, CHANNELS);
    assert_eq!(mixer.active_voices(), 1);
    mixer.render(&mut second, CHANNELS);

    // Then: Two frames of tail, then silence
    assert!(first.iter().all(|&s| (s - 0.5).abs() < f32::EPSILON));
    assert!(second[..2 * CHANNELS].iter().all(|&s| (s - 0.5).abs() < f32::EPSILON));
    assert!(second[2 * CHANNELS..].iter().all(|&s| s == 0.0));
    assert_eq!(mixer.active_voices(), 0);
}

/// WHAT: Overlapping voices are summed and clipped
/// WHY: Simultaneous hits must not overflow the output range
#[test]
fn given_overlapping_loud_voices_when_rendering_then_output_clamped() {
    // Given: Three loud overlapping voices
    let mut mixer = Mixer::new(1.0);
    for _ in 0..3 {
        mixer.trigger(sample(0.6, 8));
    }
    let mut out = vec![0.0f32; 8 * CHANNELS];

    // When: Rendering
    mixer.render(&mut out, CHANNELS);

    // Then: Clamped to full scale
    assert!(out.iter().all(|&s| (s - 1.0).abs() < f32::EPSILON));
}

/// WHAT: A full voice pool replaces the oldest voice
/// WHY: The callback has a fixed pool and never allocates
#[test]
fn given_full_voice_pool_when_triggering_then_pool_size_capped() {
    // Given: A mixer with every voice busy
    let mut mixer = Mixer::new(0.5);
    for _ in 0..MAX_VOICES {
        mixer.trigger(sample(0.01, 1024));
    }

    // When: Triggering one more
    mixer.trigger(sample(0.01, 1024));

    // Then: Still capped
    assert_eq!(mixer.active_voices(), MAX_VOICES);
}

/// WHAT: Empty samples are not started
/// WHY: A silent voice would only occupy a slot
#[test]
fn given_empty_sample_when_triggering_then_no_voice() {
    // Given/When: An empty sample triggered
    let mut mixer = Mixer::new(1.0);
    mixer.trigger(sample(0.0, 0));

    // Then: No voice
    assert_eq!(mixer.active_voices(), 0);
}
