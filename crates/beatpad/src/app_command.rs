use beatpad_core::{RawInput, ScheduledAction};

/// Commands processed one at a time by [`crate::App`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    /// A pad was clicked or its key pressed, stamped on the session clock
    /// when the input arrived.
    Input {
        /// The raw activation.
        input: RawInput,
        /// Arrival time in session milliseconds.
        timestamp_ms: u64,
    },
    /// Arm or disarm the recorder.
    ToggleRecording,
    /// Replay the recording.
    Play,
    /// Discard the recording.
    Clear,
    /// A scheduled playback action came due.
    Fire(ScheduledAction),
    /// Show usage help.
    ShowHelp,
    /// Open the config file in the system editor.
    OpenSettings,
    /// Request application shutdown.
    Shutdown,
}

impl AppCommand {
    /// Pad activation received at `timestamp_ms`.
    pub fn input(input: RawInput, timestamp_ms: u64) -> Self {
        AppCommand::Input {
            input,
            timestamp_ms,
        }
    }
}
