use crate::PadId;

use std::time::Duration;

/// Handle for a scheduled action, used to cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskHandle(u64);

impl TaskHandle {
    /// Wrap a scheduler-assigned id.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Scheduler-assigned id.
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Deferred work submitted by the playback scheduler.
///
/// `take` identifies the playback run that scheduled the action; an action
/// whose run has since been cancelled or replaced is ignored when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduledAction {
    /// Sound and flash one recorded pad.
    Replay {
        /// Playback run this replay belongs to.
        take: u64,
        /// Position of the event in the recording.
        index: usize,
        /// Pad to replay.
        pad: PadId,
    },
    /// End of playback.
    Finish {
        /// Playback run that is finishing.
        take: u64,
    },
}

impl ScheduledAction {
    /// Playback run the action belongs to.
    pub fn take(&self) -> u64 {
        match self {
            ScheduledAction::Replay { take, .. } | ScheduledAction::Finish { take } => *take,
        }
    }
}

/// Deferred-execution facility: run an action after a delay.
///
/// Actions with equal delays must be delivered in submission order. Delivery
/// means handing the action back to the session (see
/// [`Session::fire`](crate::Session::fire)); the scheduler itself never
/// touches session state.
pub trait Scheduler {
    /// Deliver `action` once `delay` has elapsed.
    fn schedule(&mut self, delay: Duration, action: ScheduledAction) -> TaskHandle;

    /// Drop a pending action. Unknown or already-delivered handles are
    /// ignored.
    fn cancel(&mut self, handle: TaskHandle);
}

impl<S: Scheduler + ?Sized> Scheduler for &mut S {
    fn schedule(&mut self, delay: Duration, action: ScheduledAction) -> TaskHandle {
        (**self).schedule(delay, action)
    }

    fn cancel(&mut self, handle: TaskHandle) {
        (**self).cancel(handle);
    }
}
