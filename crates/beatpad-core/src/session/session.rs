use crate::{
    ClearOutcome, PadRegistry, PlayOutcome, PlaybackScheduler, PlaybackState, Presenter,
    RawInput, Recorder, RecorderState, Recording, ScheduledAction, Scheduler, TriggerEvent,
    TriggerRouter,
};

use std::time::Duration;

use tracing::{debug, instrument};

/// Feedback and playback timing for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTiming {
    /// How long a pad stays highlighted after it fires.
    pub pad_flash: Duration,
    /// How long a transport button lights when pulsed.
    pub button_pulse: Duration,
    /// Delay after the last replay before playback is reported finished.
    pub finish_buffer: Duration,
}

impl Default for SessionTiming {
    fn default() -> Self {
        Self {
            pad_flash: Duration::from_millis(150),
            button_pulse: Duration::from_millis(150),
            finish_buffer: Duration::from_millis(100),
        }
    }
}

/// Everything one drum-pad session owns: pads, recorder, playback, and the
/// presenter and scheduler they talk to.
///
/// Every operation runs to completion on the caller's thread; timers only
/// ever come back in through [`Session::fire`].
pub struct Session<P: Presenter, S: Scheduler> {
    registry: PadRegistry,
    router: TriggerRouter,
    recorder: Recorder,
    playback: PlaybackScheduler,
    presenter: P,
    scheduler: S,
}

impl<P: Presenter, S: Scheduler> Session<P, S> {
    /// Build an idle session with an empty recording.
    pub fn new(registry: PadRegistry, timing: SessionTiming, presenter: P, scheduler: S) -> Self {
        Self {
            registry,
            router: TriggerRouter::new(timing.pad_flash),
            recorder: Recorder::new(timing.button_pulse),
            playback: PlaybackScheduler::new(
                timing.finish_buffer,
                timing.pad_flash,
                timing.button_pulse,
            ),
            presenter,
            scheduler,
        }
    }

    /// Handle a raw pad activation stamped `timestamp_ms`.
    ///
    /// Returns the routed event, or `None` when the input names no pad.
    #[instrument(skip(self))]
    pub fn trigger(&mut self, input: RawInput, timestamp_ms: u64) -> Option<TriggerEvent> {
        let event = self
            .router
            .route(&input, timestamp_ms, &self.registry, &mut self.presenter)?;

        if self.recorder.on_trigger(event) {
            debug!(
                pad = %event.pad,
                timestamp_ms,
                take_id = ?self.recorder.take_id(),
                "Trigger captured"
            );
        }
        Some(event)
    }

    /// Arm the recorder, cancelling any playback in progress.
    pub fn start_recording(&mut self) {
        self.playback.cancel(&mut self.scheduler, &mut self.presenter);
        self.recorder.start(&mut self.presenter);
    }

    /// Disarm the recorder.
    pub fn stop_recording(&mut self) {
        self.recorder.stop(&mut self.presenter);
    }

    /// Start when idle, stop when armed.
    pub fn toggle_recording(&mut self) {
        if self.recorder.state().is_armed() {
            self.stop_recording();
        } else {
            self.start_recording();
        }
    }

    /// Replay the current recording.
    pub fn play(&mut self) -> PlayOutcome {
        self.playback
            .play(&mut self.recorder, &mut self.scheduler, &mut self.presenter)
    }

    /// Discard the recording, cancelling any playback in progress.
    pub fn clear(&mut self) -> ClearOutcome {
        self.playback.cancel(&mut self.scheduler, &mut self.presenter);
        self.recorder.clear(&mut self.presenter)
    }

    /// Run an action delivered by the scheduler. Returns whether it applied
    /// to the current playback run.
    pub fn fire(&mut self, action: ScheduledAction) -> bool {
        self.playback.fire(action, &self.registry, &mut self.presenter)
    }

    /// Recorder arm state.
    pub fn recorder_state(&self) -> RecorderState {
        self.recorder.state()
    }

    /// Playback run state.
    pub fn playback_state(&self) -> PlaybackState {
        self.playback.state()
    }

    /// The current recording.
    pub fn recording(&self) -> &Recording {
        self.recorder.recording()
    }

    /// The pad registry.
    pub fn registry(&self) -> &PadRegistry {
        &self.registry
    }

    /// The presenter.
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// The scheduler.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Mutable access to the scheduler.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}
