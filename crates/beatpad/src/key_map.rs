use crate::AppCommand;

use beatpad_core::RawInput;
use tao::keyboard::Key;

/// Map a key pressed at `timestamp_ms` to a command.
///
/// Transport keys are matched first; any other printable key is passed on
/// as a pad symbol and resolved (or ignored) by the session.
pub fn command_for_key(key: &Key<'_>, timestamp_ms: u64) -> Option<AppCommand> {
    match key {
        Key::Space => Some(AppCommand::ToggleRecording),
        Key::Enter => Some(AppCommand::Play),
        Key::Backspace | Key::Delete => Some(AppCommand::Clear),
        Key::F1 => Some(AppCommand::ShowHelp),
        Key::Escape => Some(AppCommand::Shutdown),
        Key::Character(" ") => Some(AppCommand::ToggleRecording),
        Key::Character(symbol) => Some(AppCommand::input(RawInput::key(*symbol), timestamp_ms)),
        _ => None,
    }
}
