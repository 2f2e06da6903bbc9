use crate::UiCommand;

use std::{
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::Duration,
};

use beatpad_core::{Button, PAD_COUNT, PadId, Presenter};
use tao::event_loop::EventLoopProxy;
use tracing::debug;

const BUTTON_COUNT: usize = 3;

/// Destination for UI commands.
pub trait UiSender: Clone + Send + 'static {
    /// Deliver `command`. Delivery failures mean the UI is gone and are
    /// only logged.
    fn send(&self, command: UiCommand);
}

impl UiSender for EventLoopProxy<UiCommand> {
    fn send(&self, command: UiCommand) {
        if let Err(e) = self.send_event(command) {
            debug!(error = ?e, "Event loop closed, UI command dropped");
        }
    }
}

/// [`Presenter`] that forwards to the UI thread.
///
/// Flashes and pulses send the "on" command immediately and spawn a timer
/// for the matching "off". Each pad and button carries a generation counter
/// so an old timer never clears a newer highlight.
#[derive(Clone)]
pub struct UiPresenter<U: UiSender> {
    ui: U,
    pad_generations: Arc<[AtomicU64]>,
    button_generations: Arc<[AtomicU64]>,
}

impl<U: UiSender> UiPresenter<U> {
    pub fn new(ui: U) -> Self {
        Self {
            ui,
            pad_generations: (0..PAD_COUNT).map(|_| AtomicU64::new(0)).collect(),
            button_generations: (0..BUTTON_COUNT).map(|_| AtomicU64::new(0)).collect(),
        }
    }

    /// Send `on` now and `off` after `duration`, unless the slot was touched
    /// again in between. Must be called from within a tokio runtime.
    fn light_for(
        &self,
        generations: &Arc<[AtomicU64]>,
        slot: usize,
        duration: Duration,
        on: UiCommand,
        off: UiCommand,
    ) {
        let generation = generations[slot].fetch_add(1, Ordering::SeqCst) + 1;
        self.ui.send(on);

        let generations = Arc::clone(generations);
        let ui = self.ui.clone();
        tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            if generations[slot].load(Ordering::SeqCst) == generation {
                ui.send(off);
            }
        });
    }
}

fn button_slot(button: Button) -> usize {
    match button {
        Button::Record => 0,
        Button::Play => 1,
        Button::Clear => 2,
    }
}

impl<U: UiSender> Presenter for UiPresenter<U> {
    fn display(&mut self, text: &str) {
        self.ui.send(UiCommand::Display(text.to_string()));
    }

    fn flash_pad(&mut self, pad: PadId, duration: Duration) {
        self.light_for(
            &self.pad_generations,
            pad.index(),
            duration,
            UiCommand::Pad { pad, lit: true },
            UiCommand::Pad { pad, lit: false },
        );
    }

    fn set_button(&mut self, button: Button, lit: bool) {
        self.button_generations[button_slot(button)].fetch_add(1, Ordering::SeqCst);
        self.ui.send(UiCommand::Button { button, lit });
    }

    fn pulse_button(&mut self, button: Button, duration: Duration) {
        self.light_for(
            &self.button_generations,
            button_slot(button),
            duration,
            UiCommand::Button { button, lit: true },
            UiCommand::Button { button, lit: false },
        );
    }
}
