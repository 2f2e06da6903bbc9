use crate::{MenuIds, UiCommand, UiSender};

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use beatpad_core::{
    CoreResult, PadId, PadRegistry, SampleBuffer, SampleHandle, SoundSink,
};
use tokio::sync::mpsc;
use tray_icon::menu::MenuId;

/// UI stand-in that queues every command for inspection.
#[derive(Debug, Clone)]
pub(crate) struct TestUi {
    tx: mpsc::UnboundedSender<UiCommand>,
}

impl UiSender for TestUi {
    fn send(&self, command: UiCommand) {
        let _ = self.tx.send(command);
    }
}

pub(crate) fn test_ui() -> (TestUi, mpsc::UnboundedReceiver<UiCommand>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (TestUi { tx }, rx)
}

/// Everything queued so far, without waiting.
pub(crate) fn drain(rx: &mut mpsc::UnboundedReceiver<UiCommand>) -> Vec<UiCommand> {
    let mut seen = Vec::new();
    while let Ok(command) = rx.try_recv() {
        seen.push(command);
    }
    seen
}

pub(crate) fn displayed(commands: &[UiCommand]) -> Vec<&str> {
    commands
        .iter()
        .filter_map(|c| match c {
            UiCommand::Display(text) => Some(text.as_str()),
            _ => None,
        })
        .collect()
}

#[derive(Debug, Default)]
pub(crate) struct CountingSink {
    plays: AtomicUsize,
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

pub(crate) fn loaded_registry(sink: Arc<dyn SoundSink>) -> PadRegistry {
    let mut registry = PadRegistry::new(sink);
    for pad in PadId::ALL {
        registry.insert(pad, SampleBuffer::new(vec![0.25; 32], 48_000));
    }
    registry
}

pub(crate) fn test_menu_ids() -> MenuIds {
    MenuIds {
        record: MenuId::new("record"),
        play: MenuId::new("play"),
        clear: MenuId::new("clear"),
        pads: std::array::from_fn(|i| MenuId::new(format!("pad-{i}"))),
        help: MenuId::new("help"),
        settings: MenuId::new("settings"),
        exit: MenuId::new("exit"),
    }
}
