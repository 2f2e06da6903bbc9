use crate::TriggerEvent;

use std::time::Duration;

/// Trigger events of one capture, in the order they happened.
///
/// Timestamps never decrease; the first event is time zero for playback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recording {
    events: Vec<TriggerEvent>,
}

impl Recording {
    /// Empty recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event.
    ///
    /// An event stamped earlier than the last one is clamped to the last
    /// timestamp so ordering holds even with a misbehaving clock.
    pub fn push(&mut self, mut event: TriggerEvent) {
        if let Some(last) = self.events.last() {
            event.timestamp_ms = event.timestamp_ms.max(last.timestamp_ms);
        }
        self.events.push(event);
    }

    /// Recorded events, oldest first.
    pub fn events(&self) -> &[TriggerEvent] {
        &self.events
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Drop every event.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Timestamp of the first event, the recording's time zero.
    pub fn first_timestamp(&self) -> Option<u64> {
        self.events.first().map(|e| e.timestamp_ms)
    }

    /// Time from the first event to the last; zero for fewer than two.
    pub fn duration(&self) -> Duration {
        match (self.events.first(), self.events.last()) {
            (Some(first), Some(last)) => {
                Duration::from_millis(last.timestamp_ms - first.timestamp_ms)
            }
            _ => Duration::ZERO,
        }
    }
}

impl FromIterator<TriggerEvent> for Recording {
    fn from_iter<I: IntoIterator<Item = TriggerEvent>>(iter: I) -> Self {
        let mut recording = Recording::new();
        for event in iter {
            recording.push(event);
        }
        recording
    }
}
