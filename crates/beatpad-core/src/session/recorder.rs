use crate::{Button, Presenter, Recording, Status, TriggerEvent};

use std::time::Duration;

use tracing::{debug, info, instrument};
use uuid::Uuid;

/// Recorder arm state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecorderState {
    /// Triggers are not captured.
    Idle,
    /// Triggers are appended to the recording.
    Armed {
        /// Unique id of this take for log correlation.
        take_id: Uuid,
    },
}

impl RecorderState {
    /// Whether triggers are currently being captured.
    pub fn is_armed(&self) -> bool {
        matches!(self, RecorderState::Armed { .. })
    }
}

/// Result of [`Recorder::clear`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    /// The recording held `events` events and is now empty.
    Cleared {
        /// Number of events discarded.
        events: usize,
    },
    /// There was nothing to clear.
    NothingToClear,
}

/// Capture state machine: `Idle -> Armed` on start, back to `Idle` on stop,
/// clear, or when playback begins.
#[derive(Debug)]
pub struct Recorder {
    state: RecorderState,
    recording: Recording,
    button_pulse: Duration,
}

impl Recorder {
    /// Idle recorder with an empty recording. `button_pulse` is how long the
    /// clear button lights when pressed.
    pub fn new(button_pulse: Duration) -> Self {
        Self {
            state: RecorderState::Idle,
            recording: Recording::new(),
            button_pulse,
        }
    }

    /// Arm the recorder with a fresh, empty recording.
    ///
    /// Starting while already armed is allowed and discards what the current
    /// take has captured so far.
    #[instrument(skip(self, presenter))]
    pub fn start(&mut self, presenter: &mut dyn Presenter) {
        if let RecorderState::Armed { take_id } = self.state {
            debug!(
                take_id = %take_id,
                discarded = self.recording.len(),
                "Recorder re-armed, previous take discarded"
            );
        }

        let take_id = Uuid::new_v4();
        self.recording.clear();
        self.state = RecorderState::Armed { take_id };

        presenter.set_button(Button::Record, true);
        presenter.status(Status::RecordingStarted);

        info!(take_id = %take_id, "Recording started");
    }

    /// Disarm the recorder. The recording is kept.
    #[instrument(skip(self, presenter))]
    pub fn stop(&mut self, presenter: &mut dyn Presenter) {
        if let RecorderState::Armed { take_id } = self.state {
            info!(
                take_id = %take_id,
                events = self.recording.len(),
                duration_ms = self.recording.duration().as_millis(),
                "Recording stopped"
            );
        }
        self.state = RecorderState::Idle;

        presenter.set_button(Button::Record, false);
        presenter.status(Status::RecordingStopped);
    }

    /// Capture `event` if armed. Returns whether it was appended.
    pub fn on_trigger(&mut self, event: TriggerEvent) -> bool {
        match self.state {
            RecorderState::Armed { .. } => {
                self.recording.push(event);
                true
            }
            RecorderState::Idle => false,
        }
    }

    /// Discard the recording, disarming first if needed.
    #[instrument(skip(self, presenter))]
    pub fn clear(&mut self, presenter: &mut dyn Presenter) -> ClearOutcome {
        if self.state.is_armed() {
            self.stop(presenter);
        }
        presenter.pulse_button(Button::Clear, self.button_pulse);

        if self.recording.is_empty() {
            presenter.status(Status::NoRecordingToClear);
            return ClearOutcome::NothingToClear;
        }

        let events = self.recording.len();
        self.recording.clear();
        presenter.status(Status::RecordingCleared);

        info!(events, "Recording cleared");

        ClearOutcome::Cleared { events }
    }

    /// Current arm state.
    pub fn state(&self) -> RecorderState {
        self.state
    }

    /// Id of the armed take, if any.
    pub fn take_id(&self) -> Option<Uuid> {
        match self.state {
            RecorderState::Armed { take_id } => Some(take_id),
            RecorderState::Idle => None,
        }
    }

    /// The recording captured so far.
    pub fn recording(&self) -> &Recording {
        &self.recording
    }
}
