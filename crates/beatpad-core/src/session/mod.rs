mod playback;
mod presenter;
mod recorder;
mod recording;
mod scheduler;
#[allow(clippy::module_inception)]
mod session;

pub use {
    playback::{PlayOutcome, PlaybackPlan, PlaybackScheduler, PlaybackState},
    presenter::{Button, Presenter, Status},
    recorder::{ClearOutcome, Recorder, RecorderState},
    recording::Recording,
    scheduler::{ScheduledAction, Scheduler, TaskHandle},
    session::{Session, SessionTiming},
};
