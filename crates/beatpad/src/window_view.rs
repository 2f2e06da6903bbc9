use crate::{TrayIconState, UiCommand};

use beatpad_core::{Button, PAD_COUNT, PadId};

const APP_NAME: &str = "Beatpad";

/// What the main window currently shows.
///
/// The window title doubles as the display, so every lit pad and button is
/// folded into a single line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowView {
    text: String,
    lit_pads: [bool; PAD_COUNT],
    record: bool,
    play: bool,
    clear: bool,
}

impl WindowView {
    /// Apply a UI command. Returns whether anything visible changed.
    pub fn apply(&mut self, command: &UiCommand) -> bool {
        match command {
            UiCommand::Display(text) => {
                if self.text == *text {
                    return false;
                }
                self.text.clone_from(text);
            }
            UiCommand::Pad { pad, lit } => {
                let slot = &mut self.lit_pads[pad.index()];
                if *slot == *lit {
                    return false;
                }
                *slot = *lit;
            }
            UiCommand::Button { button, lit } => {
                let slot = match button {
                    Button::Record => &mut self.record,
                    Button::Play => &mut self.play,
                    Button::Clear => &mut self.clear,
                };
                if *slot == *lit {
                    return false;
                }
                *slot = *lit;
            }
            UiCommand::Shutdown => return false,
        }
        true
    }

    /// Single-line rendering for the window title.
    pub fn title(&self) -> String {
        let mut title = String::from(APP_NAME);
        if !self.text.is_empty() {
            title.push_str(" | ");
            title.push_str(&self.text);
        }

        let indicators: Vec<&str> = [
            (self.record, "[REC]"),
            (self.play, "[PLAY]"),
            (self.clear, "[CLR]"),
        ]
        .into_iter()
        .filter_map(|(lit, label)| lit.then_some(label))
        .collect();
        if !indicators.is_empty() {
            title.push_str(" | ");
            title.push_str(&indicators.join(" "));
        }

        let pads: String = PadId::ALL
            .into_iter()
            .filter(|pad| self.lit_pads[pad.index()])
            .map(PadId::key)
            .collect();
        if !pads.is_empty() {
            title.push_str(" | ");
            title.push_str(&pads);
        }

        title
    }

    /// Tray state implied by the lit transport buttons.
    pub fn tray_state(&self) -> TrayIconState {
        if self.play {
            TrayIconState::Playing
        } else if self.record {
            TrayIconState::Recording
        } else {
            TrayIconState::Idle
        }
    }
}
