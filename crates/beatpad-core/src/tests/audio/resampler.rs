use crate::{SampleBuffer, audio::Resampler};

const INPUT_SAMPLE_RATE: u32 = 44_100;
const OUTPUT_SAMPLE_RATE: u32 = 48_000;
const TEST_SIGNAL_AMPLITUDE: f32 = 0.5;
const MAX_AMPLITUDE: f32 = 1.5;

/// WHAT: Upsampling produces exactly the expected frame count
/// WHY: A pad sample must keep its length in time after conversion
#[test]
#[allow(clippy::unwrap_used)]
fn given_44k1_sample_when_resampling_to_48k_then_length_scaled_exactly() {
    // Given: Half a second of constant signal at 44.1kHz
    let mut resampler = Resampler::new(INPUT_SAMPLE_RATE, OUTPUT_SAMPLE_RATE).unwrap();
    let input = vec![TEST_SIGNAL_AMPLITUDE; INPUT_SAMPLE_RATE as usize / 2];

    // When: Resampling
    let output = resampler.resample(&input).unwrap();

    // Then: Half a second at 48kHz, all finite and bounded
    assert_eq!(output.len(), OUTPUT_SAMPLE_RATE as usize / 2);
    assert!(output.iter().all(|&s| s.is_finite() && s.abs() <= MAX_AMPLITUDE));
}

/// WHAT: Resampler latency is trimmed from the front
/// WHY: A drum hit must start on the first output frame
#[test]
#[allow(clippy::unwrap_used)]
fn given_impulse_at_start_when_resampling_then_energy_near_start() {
    // Given: A short burst at the very start followed by silence
    let mut resampler = Resampler::new(INPUT_SAMPLE_RATE, OUTPUT_SAMPLE_RATE).unwrap();
    let mut input = vec![0.0f32; 4096];
    input[..32].fill(TEST_SIGNAL_AMPLITUDE);

    // When: Resampling
    let output = resampler.resample(&input).unwrap();

    // Then: The loudest frame is within the first hundred frames
    let peak = output
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.abs().total_cmp(&b.1.abs()))
        .map(|(i, _)| i)
        .unwrap();
    assert!(peak < 100, "peak at frame {peak}");
}

/// WHAT: Empty samples return empty output
/// WHY: Edge case handling for zero-length input
#[test]
#[allow(clippy::unwrap_used)]
fn given_empty_samples_when_resampling_then_empty_output() {
    // Given: Resampler and empty input
    let mut resampler = Resampler::new(INPUT_SAMPLE_RATE, OUTPUT_SAMPLE_RATE).unwrap();

    // When/Then
    assert!(resampler.resample(&[]).unwrap().is_empty());
}

/// WHAT: SampleBuffer conversion goes through the resampler
/// WHY: Loaded pads are converted to the device rate once at startup
#[test]
#[allow(clippy::unwrap_used)]
fn given_sample_buffer_when_converting_rate_then_rate_and_length_updated() {
    // Given: A 22.05kHz sample of 2205 frames (100ms)
    let sample = SampleBuffer::new(vec![0.2; 2205], 22_050);

    // When: Converting to 44.1kHz
    let converted = sample.into_rate(44_100).unwrap();

    // Then: Same duration at the new rate
    assert_eq!(converted.sample_rate(), 44_100);
    assert_eq!(converted.len(), 4410);
}
