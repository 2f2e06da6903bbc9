//! Beatpad Core Library
//!
//! Nine-pad sound trigger with timed recording and gap-preserving playback.
//! The recorder and playback scheduler talk to the outside world only through
//! the [`Presenter`] and [`Scheduler`] traits, so the same [`Session`] drives
//! a desktop window or a test harness.
//!
//! # Example
//!
//! ```no_run
//! use beatpad_core::{
//!     AudioOutput, CoreResult, PadRegistry, RawInput, SessionClock, Session, SessionTiming,
//! };
//! # use beatpad_core::{Button, PadId, Presenter, ScheduledAction, Scheduler, TaskHandle};
//! # use std::time::Duration;
//! # struct Log;
//! # impl Presenter for Log {
//! #     fn display(&mut self, text: &str) { println!("{text}"); }
//! #     fn flash_pad(&mut self, _: PadId, _: Duration) {}
//! #     fn set_button(&mut self, _: Button, _: bool) {}
//! #     fn pulse_button(&mut self, _: Button, _: Duration) {}
//! # }
//! # struct Timers;
//! # impl Scheduler for Timers {
//! #     fn schedule(&mut self, _: Duration, _: ScheduledAction) -> TaskHandle { TaskHandle::new(0) }
//! #     fn cancel(&mut self, _: TaskHandle) {}
//! # }
//! use std::{path::Path, sync::Arc};
//!
//! fn main() -> CoreResult<()> {
//!     let output = AudioOutput::open(None, 0.8)?;
//!     let mut registry = PadRegistry::new(Arc::new(output.sink()));
//!     registry.load_from_dir(Path::new("samples"), |pad| pad.default_sample_file(), output.sample_rate());
//!
//!     let clock = SessionClock::start();
//!     let mut session = Session::new(registry, SessionTiming::default(), Log, Timers);
//!
//!     session.start_recording();
//!     session.trigger(RawInput::key("q"), clock.now_ms());
//!     session.trigger(RawInput::key("x"), clock.now_ms());
//!     session.play();
//!     Ok(())
//! }
//! ```

mod audio;
mod error;
mod pad;
mod session;

pub use {
    audio::{AudioOutput, NullSink, OutputSink, SampleBuffer, SampleHandle, SoundSink},
    error::{CoreError, Result as CoreResult},
    pad::{PAD_COUNT, PadId, PadRegistry, RawInput, SessionClock, TriggerEvent, TriggerRouter},
    session::{
        Button, ClearOutcome, PlayOutcome, PlaybackPlan, PlaybackScheduler, PlaybackState,
        Presenter, Recorder, RecorderState, Recording, ScheduledAction,
        Scheduler, Session, SessionTiming, Status, TaskHandle,
    },
};

#[cfg(test)]
mod tests;
