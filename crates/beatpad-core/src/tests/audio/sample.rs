use crate::{CoreError, SampleBuffer};

use std::{path::Path, time::Duration};

#[allow(clippy::unwrap_used)]
fn write_wav(path: &Path, spec: hound::WavSpec, frames: &[i16]) {
    let mut writer = hound::WavWriter::create(path, spec).unwrap();
    for &s in frames {
        writer.write_sample(s).unwrap();
    }
    writer.finalize().unwrap();
}

/// WHAT: Stereo 16-bit WAV is decoded and folded to mono
/// WHY: Drum kits ship in mixed channel layouts
#[test]
#[allow(clippy::unwrap_used)]
fn given_stereo_int_wav_when_loading_then_mono_scaled_samples() {
    // Given: A two-frame stereo file
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clap.wav");
    let spec = hound::WavSpec {
        channels: 2,
        sample_rate: 44_100,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    write_wav(&path, spec, &[16_384, 16_384, 0, -32_768]);

    // When: Loading it
    let sample = SampleBuffer::load_wav(&path).unwrap();

    // Then: Two mono frames at the file's rate
    assert_eq!(sample.sample_rate(), 44_100);
    assert_eq!(sample.len(), 2);
    assert!((sample.samples()[0] - 0.5).abs() < 1e-4);
    assert!((sample.samples()[1] + 0.5).abs() < 1e-4);
}

/// WHAT: A missing file is a SampleLoad error
/// WHY: The registry logs it and leaves the pad silent
#[test]
fn given_missing_file_when_loading_then_sample_load_error() {
    // Given: A path that does not exist
    let path = Path::new("/nonexistent/kick.wav");

    // When: Loading
    let result = SampleBuffer::load_wav(path);

    // Then: SampleLoad error
    assert!(matches!(result, Err(CoreError::SampleLoad { .. })));
}

/// WHAT: Converting to the same rate leaves samples untouched
/// WHY: Most kits already match the device rate
#[test]
#[allow(clippy::unwrap_used)]
fn given_matching_rate_when_converting_then_unchanged() {
    // Given: A 48kHz sample
    let sample = SampleBuffer::new(vec![0.1, 0.2, 0.3], 48_000);

    // When: Converting to 48kHz
    let converted = sample.clone().into_rate(48_000).unwrap();

    // Then: Identical
    assert_eq!(converted, sample);
}

/// WHAT: Duration follows frame count and rate
/// WHY: Used in diagnostics for loaded pads
#[test]
fn given_one_second_of_frames_when_asking_duration_then_one_second() {
    // Given/When
    let sample = SampleBuffer::new(vec![0.0; 22_050], 22_050);

    // Then
    assert_eq!(sample.duration(), Duration::from_secs(1));
    assert!(!sample.is_empty());
}
