mod audio_config;
#[allow(clippy::module_inception)]
mod config;
mod playback_config;
mod samples_config;

pub(crate) use {
    audio_config::AudioConfig, config::Config, playback_config::PlaybackConfig,
    samples_config::SamplesConfig,
};

use std::path::PathBuf;

pub(crate) const DEFAULT_FINISH_BUFFER_MS: u64 = 100;
pub(crate) const DEFAULT_PAD_FLASH_MS: u64 = 150;
pub(crate) const DEFAULT_BUTTON_PULSE_MS: u64 = 150;
pub(crate) const DEFAULT_VOLUME: f32 = 0.8;
pub(crate) const DEFAULT_SAMPLES_DIR: &str = "samples";

pub(crate) fn default_finish_buffer_ms() -> u64 {
    DEFAULT_FINISH_BUFFER_MS
}

pub(crate) fn default_pad_flash_ms() -> u64 {
    DEFAULT_PAD_FLASH_MS
}

pub(crate) fn default_button_pulse_ms() -> u64 {
    DEFAULT_BUTTON_PULSE_MS
}

pub(crate) fn default_volume() -> f32 {
    DEFAULT_VOLUME
}

pub(crate) fn default_samples_dir() -> PathBuf {
    PathBuf::from(DEFAULT_SAMPLES_DIR)
}
