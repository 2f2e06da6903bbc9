use crate::PadId;

use std::{fmt, time::Duration};

/// Status messages shown on the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The recorder was armed.
    RecordingStarted,
    /// The recorder was disarmed.
    RecordingStopped,
    /// Playback began.
    PlayingRecording,
    /// Playback ran to the end.
    RecordingFinished,
    /// Play was requested with nothing recorded.
    NoRecordingAvailable,
    /// Clear was requested with nothing recorded.
    NoRecordingToClear,
    /// The recording was discarded.
    RecordingCleared,
}

impl Status {
    /// Text shown for this status.
    pub fn label(self) -> &'static str {
        match self {
            Status::RecordingStarted => "Recording Started",
            Status::RecordingStopped => "Recording Stopped",
            Status::PlayingRecording => "Playing Recording",
            Status::RecordingFinished => "Recording Finished",
            Status::NoRecordingAvailable => "No Recording Available",
            Status::NoRecordingToClear => "No Recording to Clear",
            Status::RecordingCleared => "Recording Cleared",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Transport buttons with a lit/unlit indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// Arms the recorder.
    Record,
    /// Plays the recording.
    Play,
    /// Discards the recording.
    Clear,
}

/// Presentation layer fed by the router, recorder and playback scheduler.
///
/// Implementations own any timing needed to undo a flash or pulse; callers
/// never schedule the "off" half themselves.
pub trait Presenter {
    /// Replace the display text.
    fn display(&mut self, text: &str);

    /// Highlight a pad for `duration`.
    fn flash_pad(&mut self, pad: PadId, duration: Duration);

    /// Light or unlight a transport button.
    fn set_button(&mut self, button: Button, lit: bool);

    /// Light a transport button for `duration`, then unlight it.
    fn pulse_button(&mut self, button: Button, duration: Duration);

    /// Show one of the fixed status messages.
    fn status(&mut self, status: Status) {
        self.display(status.label());
    }
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn display(&mut self, text: &str) {
        (**self).display(text);
    }

    fn flash_pad(&mut self, pad: PadId, duration: Duration) {
        (**self).flash_pad(pad, duration);
    }

    fn set_button(&mut self, button: Button, lit: bool) {
        (**self).set_button(button, lit);
    }

    fn pulse_button(&mut self, button: Button, duration: Duration) {
        (**self).pulse_button(button, duration);
    }

    fn status(&mut self, status: Status) {
        (**self).status(status);
    }
}
