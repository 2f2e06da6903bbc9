use crate::AppCommand;

use std::collections::BTreeMap;

use beatpad_core::{ScheduledAction, Scheduler, TaskHandle};
use tokio::{
    sync::mpsc,
    task::JoinHandle,
    time::{Duration, Instant, sleep_until},
};
use tracing::{debug, instrument, trace};

enum TimerRequest {
    Schedule {
        handle: TaskHandle,
        deadline: Instant,
        action: ScheduledAction,
    },
    Cancel(TaskHandle),
}

/// [`Scheduler`] backed by one tokio timer task.
///
/// Deadlines are fixed when `schedule` is called, so every action of a
/// playback run shares the same origin. Due actions are sent back to the
/// app as [`AppCommand::Fire`] in deadline order; equal deadlines keep
/// submission order.
pub struct TokioScheduler {
    requests: mpsc::UnboundedSender<TimerRequest>,
    next_id: u64,
    task: JoinHandle<()>,
}

impl TokioScheduler {
    /// Spawn the timer task. Must be called from within a tokio runtime.
    pub fn spawn(fire_tx: mpsc::Sender<AppCommand>) -> Self {
        let (requests, request_rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(run_timers(request_rx, fire_tx));
        Self {
            requests,
            next_id: 0,
            task,
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        self.task.abort();
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&mut self, delay: Duration, action: ScheduledAction) -> TaskHandle {
        let handle = TaskHandle::new(self.next_id);
        self.next_id += 1;

        let request = TimerRequest::Schedule {
            handle,
            deadline: Instant::now() + delay,
            action,
        };
        if self.requests.send(request).is_err() {
            debug!(handle = handle.id(), "Timer task gone, action dropped");
        }
        handle
    }

    fn cancel(&mut self, handle: TaskHandle) {
        let _ = self.requests.send(TimerRequest::Cancel(handle));
    }
}

#[instrument(skip_all)]
async fn run_timers(
    mut requests: mpsc::UnboundedReceiver<TimerRequest>,
    fire_tx: mpsc::Sender<AppCommand>,
) {
    // Keyed by (deadline, submission id).
    let mut pending: BTreeMap<(Instant, u64), ScheduledAction> = BTreeMap::new();

    loop {
        let next = pending.keys().next().map(|(deadline, _)| *deadline);

        tokio::select! {
            biased;

            request = requests.recv() => match request {
                Some(TimerRequest::Schedule { handle, deadline, action }) => {
                    pending.insert((deadline, handle.id()), action);
                }
                Some(TimerRequest::Cancel(handle)) => {
                    pending.retain(|(_, id), _| *id != handle.id());
                }
                None => break,
            },

            _ = sleep_until(next.unwrap_or_else(Instant::now)), if next.is_some() => {
                let now = Instant::now();
                while let Some(entry) = pending.first_entry() {
                    if entry.key().0 > now {
                        break;
                    }
                    let action = entry.remove();
                    trace!(?action, "Timer fired");
                    if fire_tx.send(AppCommand::Fire(action)).await.is_err() {
                        debug!("App gone, timer task exiting");
                        return;
                    }
                }
            }
        }
    }

    debug!("Scheduler dropped, timer task exiting");
}
