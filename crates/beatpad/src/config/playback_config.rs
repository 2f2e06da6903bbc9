use crate::config::{default_button_pulse_ms, default_finish_buffer_ms, default_pad_flash_ms};

use std::time::Duration;

use beatpad_core::SessionTiming;
use serde::{Deserialize, Serialize};

/// Feedback and playback timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Pause after the last replay before playback reports finished.
    #[serde(default = "default_finish_buffer_ms")]
    pub finish_buffer_ms: u64,

    /// How long a pad stays highlighted.
    #[serde(default = "default_pad_flash_ms")]
    pub pad_flash_ms: u64,

    /// How long a transport button lights when pulsed.
    #[serde(default = "default_button_pulse_ms")]
    pub button_pulse_ms: u64,
}

impl PlaybackConfig {
    pub fn timing(&self) -> SessionTiming {
        SessionTiming {
            pad_flash: Duration::from_millis(self.pad_flash_ms),
            button_pulse: Duration::from_millis(self.button_pulse_ms),
            finish_buffer: Duration::from_millis(self.finish_buffer_ms),
        }
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            finish_buffer_ms: default_finish_buffer_ms(),
            pad_flash_ms: default_pad_flash_ms(),
            button_pulse_ms: default_button_pulse_ms(),
        }
    }
}
