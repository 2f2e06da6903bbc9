use crate::{AppCommand, TokioScheduler};

use std::time::Duration;

use beatpad_core::{PadId, ScheduledAction, Scheduler};
use tokio::{sync::mpsc, time::Instant};

fn replay(index: usize, pad: PadId) -> ScheduledAction {
    ScheduledAction::Replay {
        take: 1,
        index,
        pad,
    }
}

/// WHAT: Actions fire in deadline order, ties in submission order
/// WHY: Simultaneous recorded hits must replay in recorded order
#[tokio::test(start_paused = true)]
#[allow(clippy::unwrap_used)]
async fn given_mixed_delays_when_running_then_fired_by_deadline_then_submission() {
    // Given
    let (tx, mut rx) = mpsc::channel(16);
    let mut scheduler = TokioScheduler::spawn(tx);
    let start = Instant::now();

    // When
    scheduler.schedule(Duration::from_millis(450), replay(2, PadId::E));
    scheduler.schedule(Duration::ZERO, replay(0, PadId::Q));
    scheduler.schedule(Duration::ZERO, replay(1, PadId::W));
    scheduler.schedule(Duration::from_millis(550), ScheduledAction::Finish { take: 1 });

    // Then
    let mut fired = Vec::new();
    for _ in 0..4 {
        let cmd = rx.recv().await.unwrap();
        fired.push((cmd, start.elapsed()));
    }
    assert_eq!(
        fired.iter().map(|(c, _)| c.clone()).collect::<Vec<_>>(),
        vec![
            AppCommand::Fire(replay(0, PadId::Q)),
            AppCommand::Fire(replay(1, PadId::W)),
            AppCommand::Fire(replay(2, PadId::E)),
            AppCommand::Fire(ScheduledAction::Finish { take: 1 }),
        ]
    );
    assert!(fired[2].1 >= Duration::from_millis(450));
    assert!(fired[3].1 >= Duration::from_millis(550));
}

/// WHAT: Cancelled actions never fire
/// WHY: Clearing or re-arming during playback must silence pending replays
#[tokio::test(start_paused = true)]
#[allow(clippy::unwrap_used)]
async fn given_cancelled_action_when_deadline_passes_then_not_fired() {
    // Given
    let (tx, mut rx) = mpsc::channel(16);
    let mut scheduler = TokioScheduler::spawn(tx);
    let kept = scheduler.schedule(Duration::from_millis(100), replay(0, PadId::A));
    let dropped = scheduler.schedule(Duration::from_millis(200), replay(1, PadId::D));
    assert_ne!(kept, dropped);

    // When
    scheduler.cancel(dropped);

    // Then
    assert_eq!(
        rx.recv().await.unwrap(),
        AppCommand::Fire(replay(0, PadId::A))
    );
    let nothing = tokio::time::timeout(Duration::from_secs(1), rx.recv()).await;
    assert!(nothing.is_err());
}

/// WHAT: Dropping the scheduler stops its timer task
/// WHY: Pending actions must not outlive the session
#[tokio::test(start_paused = true)]
async fn given_dropped_scheduler_when_waiting_then_channel_closes() {
    // Given
    let (tx, mut rx) = mpsc::channel(16);
    let mut scheduler = TokioScheduler::spawn(tx);
    scheduler.schedule(Duration::from_millis(100), replay(0, PadId::C));

    // When
    drop(scheduler);

    // Then
    assert_eq!(rx.recv().await, None);
}
