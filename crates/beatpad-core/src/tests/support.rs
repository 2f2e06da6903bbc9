use crate::{
    Button, CoreError, CoreResult, PadId, PadRegistry, Presenter, SampleBuffer, SampleHandle,
    ScheduledAction, Scheduler, SoundSink, Status, TaskHandle,
};

use std::{
    collections::BTreeMap,
    panic::Location,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use error_location::ErrorLocation;

/// Everything a presenter was asked to do, in order.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Shown {
    Text(String),
    Flash(PadId, Duration),
    Button(Button, bool),
    Pulse(Button, Duration),
}

#[derive(Debug, Default)]
pub(crate) struct RecordingPresenter {
    pub(crate) shown: Vec<Shown>,
}

impl RecordingPresenter {
    pub(crate) fn texts(&self) -> Vec<&str> {
        self.shown
            .iter()
            .filter_map(|s| match s {
                Shown::Text(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn last_text(&self) -> Option<&str> {
        self.texts().last().copied()
    }

    pub(crate) fn has_status(&self, status: Status) -> bool {
        self.texts().contains(&status.label())
    }

    pub(crate) fn flashes(&self) -> Vec<PadId> {
        self.shown
            .iter()
            .filter_map(|s| match s {
                Shown::Flash(pad, _) => Some(*pad),
                _ => None,
            })
            .collect()
    }
}

impl Presenter for RecordingPresenter {
    fn display(&mut self, text: &str) {
        self.shown.push(Shown::Text(text.to_string()));
    }

    fn flash_pad(&mut self, pad: PadId, duration: Duration) {
        self.shown.push(Shown::Flash(pad, duration));
    }

    fn set_button(&mut self, button: Button, lit: bool) {
        self.shown.push(Shown::Button(button, lit));
    }

    fn pulse_button(&mut self, button: Button, duration: Duration) {
        self.shown.push(Shown::Pulse(button, duration));
    }
}

/// Scheduler that only remembers what it was given; tests decide when
/// things fire.
#[derive(Debug, Default)]
pub(crate) struct ManualScheduler {
    next_id: u64,
    pub(crate) pending: BTreeMap<TaskHandle, (Duration, ScheduledAction)>,
    pub(crate) cancelled: Vec<TaskHandle>,
}

impl ManualScheduler {
    /// Pending actions ordered by delay, ties by submission order.
    pub(crate) fn due_in_order(&self) -> Vec<(Duration, ScheduledAction)> {
        let mut due: Vec<_> = self
            .pending
            .iter()
            .map(|(handle, (delay, action))| (*delay, handle.id(), *action))
            .collect();
        due.sort_by_key(|(delay, id, _)| (*delay, *id));
        due.into_iter().map(|(d, _, a)| (d, a)).collect()
    }

    /// Remove and return everything pending, in firing order.
    pub(crate) fn drain_in_order(&mut self) -> Vec<(Duration, ScheduledAction)> {
        let due = self.due_in_order();
        self.pending.clear();
        due
    }

    pub(crate) fn replay_delays(&self) -> Vec<(Duration, PadId)> {
        self.due_in_order()
            .into_iter()
            .filter_map(|(delay, action)| match action {
                ScheduledAction::Replay { pad, .. } => Some((delay, pad)),
                ScheduledAction::Finish { .. } => None,
            })
            .collect()
    }

    pub(crate) fn finish_delay(&self) -> Option<Duration> {
        self.pending.values().find_map(|(delay, action)| match action {
            ScheduledAction::Finish { .. } => Some(*delay),
            ScheduledAction::Replay { .. } => None,
        })
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration, action: ScheduledAction) -> TaskHandle {
        let handle = TaskHandle::new(self.next_id);
        self.next_id += 1;
        self.pending.insert(handle, (delay, action));
        handle
    }

    fn cancel(&mut self, handle: TaskHandle) {
        if self.pending.remove(&handle).is_some() {
            self.cancelled.push(handle);
        }
    }
}

/// Sink that counts play requests.
#[derive(Debug, Default)]
pub(crate) struct CountingSink {
    pub(crate) plays: AtomicUsize,
}

impl CountingSink {
    pub(crate) fn count(&self) -> usize {
        self.plays.load(Ordering::SeqCst)
    }
}

impl SoundSink for CountingSink {
    fn play(&self, _sample: &SampleHandle) -> CoreResult<()> {
        self.plays.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Sink whose backend is always broken.
#[derive(Debug, Default)]
pub(crate) struct FailingSink;

impl SoundSink for FailingSink {
    fn play(&self, _sample: &SampleHandle) -> CoreResult<()> {
        Err(CoreError::DeviceError {
            reason: "backend unavailable".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

/// Registry with a short click loaded on every pad.
pub(crate) fn loaded_registry(sink: Arc<dyn SoundSink>) -> PadRegistry {
    let mut registry = PadRegistry::new(sink);
    for pad in PadId::ALL {
        registry.insert(pad, SampleBuffer::new(vec![0.5; 64], 48_000));
    }
    registry
}
