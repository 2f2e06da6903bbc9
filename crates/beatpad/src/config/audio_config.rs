use crate::config::default_volume;

use serde::{Deserialize, Serialize};

/// Audio output configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioConfig {
    /// Output device name (None = default device).
    #[serde(default)]
    pub output_device: Option<String>,

    /// Master volume, 0.0 to 1.0.
    #[serde(default = "default_volume")]
    pub volume: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            output_device: None,
            volume: default_volume(),
        }
    }
}
