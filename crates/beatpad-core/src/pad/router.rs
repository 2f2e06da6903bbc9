use crate::{PadId, PadRegistry, Presenter};

use std::time::{Duration, Instant};

use tracing::{debug, instrument};

/// Raw activation from the input source, before pad resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInput {
    /// A pad element was clicked; `pad_index` is its grid position.
    Pointer {
        /// Grid position of the clicked pad (row-major, 0..9).
        pad_index: usize,
    },
    /// A key was pressed.
    Keyboard {
        /// Key text as reported by the window system.
        symbol: String,
    },
}

impl RawInput {
    /// Keyboard activation for `symbol`.
    pub fn key(symbol: impl Into<String>) -> Self {
        RawInput::Keyboard {
            symbol: symbol.into(),
        }
    }

    /// Pointer activation of the pad at `pad_index`.
    pub fn pointer(pad_index: usize) -> Self {
        RawInput::Pointer { pad_index }
    }
}

/// One pad activation and when it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerEvent {
    /// The pad that fired.
    pub pad: PadId,
    /// Monotonic milliseconds since the session clock started.
    pub timestamp_ms: u64,
}

impl TriggerEvent {
    /// Create an event for `pad` at `timestamp_ms`.
    pub fn new(pad: PadId, timestamp_ms: u64) -> Self {
        Self { pad, timestamp_ms }
    }
}

/// Monotonic millisecond clock anchored at session start.
#[derive(Debug, Clone, Copy)]
pub struct SessionClock {
    origin: Instant,
}

impl SessionClock {
    /// Start the clock now.
    pub fn start() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Milliseconds elapsed since [`SessionClock::start`].
    pub fn now_ms(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

impl Default for SessionClock {
    fn default() -> Self {
        Self::start()
    }
}

/// Resolves raw input to pads and fans each activation out to the sound
/// backend, the display and the recorder.
#[derive(Debug, Clone, Copy)]
pub struct TriggerRouter {
    pad_flash: Duration,
}

impl TriggerRouter {
    /// Router that highlights activated pads for `pad_flash`.
    pub fn new(pad_flash: Duration) -> Self {
        Self { pad_flash }
    }

    /// Map raw input to a pad. Keyboard symbols are case-insensitive.
    pub fn resolve(&self, input: &RawInput) -> Option<PadId> {
        match input {
            RawInput::Pointer { pad_index } => PadId::from_index(*pad_index),
            RawInput::Keyboard { symbol } => PadId::from_symbol(symbol),
        }
    }

    /// Resolve `input` and, if it names a pad, sound it, show its name and
    /// return the event for the recorder.
    ///
    /// Unresolved input has no side effects. Sounding the pad never fails,
    /// so a missing sample still yields the display update and the event.
    #[instrument(skip(self, registry, presenter))]
    pub fn route(
        &self,
        input: &RawInput,
        timestamp_ms: u64,
        registry: &PadRegistry,
        presenter: &mut dyn Presenter,
    ) -> Option<TriggerEvent> {
        let Some(pad) = self.resolve(input) else {
            debug!("Input does not map to a pad, ignored");
            return None;
        };

        registry.produce_sound(pad);
        presenter.display(registry.display_name(pad));
        presenter.flash_pad(pad, self.pad_flash);

        Some(TriggerEvent::new(pad, timestamp_ms))
    }
}
