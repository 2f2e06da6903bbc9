use crate::config::default_samples_dir;

use std::{collections::BTreeMap, path::PathBuf};

use beatpad_core::PadId;
use serde::{Deserialize, Serialize};

/// Where pad samples are loaded from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplesConfig {
    /// Directory holding the WAV files.
    #[serde(default = "default_samples_dir")]
    pub directory: PathBuf,

    /// Per-pad file overrides keyed by pad key (`Q`, `W`, ...). Pads not
    /// listed use `<display name>.wav`.
    #[serde(default)]
    pub files: BTreeMap<String, String>,
}

impl SamplesConfig {
    /// File name for `pad`, relative to [`SamplesConfig::directory`].
    pub fn file_for(&self, pad: PadId) -> String {
        self.files
            .iter()
            .find(|(key, _)| PadId::from_symbol(key) == Some(pad))
            .map(|(_, file)| file.clone())
            .unwrap_or_else(|| pad.default_sample_file())
    }
}

impl Default for SamplesConfig {
    fn default() -> Self {
        Self {
            directory: default_samples_dir(),
            files: BTreeMap::new(),
        }
    }
}
