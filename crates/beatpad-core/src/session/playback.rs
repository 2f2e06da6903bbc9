use crate::{
    Button, PadId, PadRegistry, Presenter, Recorder, Recording, ScheduledAction, Scheduler,
    Status, TaskHandle,
};

use std::time::Duration;

use tracing::{debug, info, instrument};

/// Playback run state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// Nothing is playing.
    Idle,
    /// Replays are scheduled.
    Playing,
}

/// When each recorded pad replays, relative to the start of playback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackPlan {
    replays: Vec<(Duration, PadId)>,
    total: Duration,
    finish_at: Duration,
}

impl PlaybackPlan {
    /// Compute replay offsets for `recording`, preserving the recorded gaps.
    ///
    /// The first event plays at zero and every later one at its distance
    /// from the first. Playback is reported finished `finish_buffer` after
    /// the last replay. Returns `None` for an empty recording.
    pub fn from_recording(recording: &Recording, finish_buffer: Duration) -> Option<Self> {
        let mut previous = recording.first_timestamp()?;

        let mut delay = Duration::ZERO;
        let replays: Vec<(Duration, PadId)> = recording
            .events()
            .iter()
            .map(|event| {
                delay += Duration::from_millis(event.timestamp_ms.saturating_sub(previous));
                previous = event.timestamp_ms;
                (delay, event.pad)
            })
            .collect();

        let total = delay;
        Some(Self {
            replays,
            total,
            finish_at: total + finish_buffer,
        })
    }

    /// `(offset, pad)` pairs in recording order.
    pub fn replays(&self) -> &[(Duration, PadId)] {
        &self.replays
    }

    /// Offset of the last replay.
    pub fn total(&self) -> Duration {
        self.total
    }

    /// Offset at which playback is reported finished.
    pub fn finish_at(&self) -> Duration {
        self.finish_at
    }
}

/// Result of [`PlaybackScheduler::play`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// Replays were scheduled.
    Started {
        /// Number of replays scheduled.
        events: usize,
        /// Offset of the last replay.
        total: Duration,
    },
    /// The recording was empty; nothing was scheduled.
    NothingToPlay,
    /// A playback run is still in progress; the request was ignored.
    AlreadyPlaying,
}

/// Replays a recording through a [`Scheduler`], one independent action per
/// event plus a final `Finish`.
#[derive(Debug)]
pub struct PlaybackScheduler {
    state: PlaybackState,
    take: u64,
    pending: Vec<TaskHandle>,
    finish_buffer: Duration,
    pad_flash: Duration,
    button_pulse: Duration,
}

impl PlaybackScheduler {
    /// Idle scheduler.
    pub fn new(finish_buffer: Duration, pad_flash: Duration, button_pulse: Duration) -> Self {
        Self {
            state: PlaybackState::Idle,
            take: 0,
            pending: Vec::new(),
            finish_buffer,
            pad_flash,
            button_pulse,
        }
    }

    /// Start replaying the recorder's recording.
    ///
    /// An armed recorder is stopped first, so the recording played is the
    /// one that existed at this moment. Ignored while already playing.
    #[instrument(skip_all)]
    pub fn play(
        &mut self,
        recorder: &mut Recorder,
        scheduler: &mut dyn Scheduler,
        presenter: &mut dyn Presenter,
    ) -> PlayOutcome {
        if self.state == PlaybackState::Playing {
            debug!(take = self.take, "Playback already running, request ignored");
            return PlayOutcome::AlreadyPlaying;
        }

        let Some(plan) = PlaybackPlan::from_recording(recorder.recording(), self.finish_buffer)
        else {
            presenter.status(Status::NoRecordingAvailable);
            presenter.pulse_button(Button::Play, self.button_pulse);
            return PlayOutcome::NothingToPlay;
        };

        if recorder.state().is_armed() {
            recorder.stop(presenter);
        }

        self.take += 1;
        self.state = PlaybackState::Playing;
        presenter.status(Status::PlayingRecording);
        presenter.set_button(Button::Play, true);

        let take = self.take;
        for (index, &(delay, pad)) in plan.replays().iter().enumerate() {
            let handle = scheduler.schedule(delay, ScheduledAction::Replay { take, index, pad });
            self.pending.push(handle);
        }
        let handle = scheduler.schedule(plan.finish_at(), ScheduledAction::Finish { take });
        self.pending.push(handle);

        let events = plan.replays().len();
        info!(
            take,
            events,
            total_ms = plan.total().as_millis(),
            "Playback started"
        );

        PlayOutcome::Started {
            events,
            total: plan.total(),
        }
    }

    /// Run a delivered action. Returns `false` for actions from a run that
    /// is no longer current.
    #[instrument(skip(self, registry, presenter))]
    pub fn fire(
        &mut self,
        action: ScheduledAction,
        registry: &PadRegistry,
        presenter: &mut dyn Presenter,
    ) -> bool {
        if self.state != PlaybackState::Playing || action.take() != self.take {
            debug!(current = self.take, "Stale playback action ignored");
            return false;
        }

        match action {
            ScheduledAction::Replay { pad, .. } => {
                registry.produce_sound(pad);
                presenter.flash_pad(pad, self.pad_flash);
            }
            ScheduledAction::Finish { take } => {
                self.state = PlaybackState::Idle;
                self.pending.clear();
                presenter.status(Status::RecordingFinished);
                presenter.set_button(Button::Play, false);
                info!(take, "Playback finished");
            }
        }
        true
    }

    /// Cancel the running playback, if any. Returns the number of handles
    /// that were cancelled.
    #[instrument(skip_all)]
    pub fn cancel(
        &mut self,
        scheduler: &mut dyn Scheduler,
        presenter: &mut dyn Presenter,
    ) -> usize {
        if self.state == PlaybackState::Idle {
            return 0;
        }

        let cancelled = self.pending.len();
        for handle in self.pending.drain(..) {
            scheduler.cancel(handle);
        }
        self.state = PlaybackState::Idle;
        presenter.set_button(Button::Play, false);

        info!(take = self.take, cancelled, "Playback cancelled");

        cancelled
    }

    /// Current run state.
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Id of the most recent playback run (0 before the first).
    pub fn current_take(&self) -> u64 {
        self.take
    }
}
