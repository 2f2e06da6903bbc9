use crate::{AppCommand, tests::support::test_menu_ids};

use beatpad_core::RawInput;
use tray_icon::menu::MenuId;

/// WHAT: Transport menu entries map to transport commands
/// WHY: Every action must be reachable from the tray
#[test]
fn given_transport_entries_when_mapping_then_commands() {
    // Given
    let ids = test_menu_ids();

    // When/Then
    assert_eq!(ids.command_for(&ids.record, 0), Some(AppCommand::ToggleRecording));
    assert_eq!(ids.command_for(&ids.play, 0), Some(AppCommand::Play));
    assert_eq!(ids.command_for(&ids.clear, 0), Some(AppCommand::Clear));
    assert_eq!(ids.command_for(&ids.help, 0), Some(AppCommand::ShowHelp));
    assert_eq!(ids.command_for(&ids.settings, 0), Some(AppCommand::OpenSettings));
    assert_eq!(ids.command_for(&ids.exit, 0), Some(AppCommand::Shutdown));
}

/// WHAT: Pad entries become pointer activations at their grid index
/// WHY: Menu clicks stand in for clicking a pad element
#[test]
fn given_pad_entry_when_mapping_then_pointer_input() {
    // Given
    let ids = test_menu_ids();

    // When
    let command = ids.command_for(&ids.pads[4], 1_234);

    // Then
    assert_eq!(command, Some(AppCommand::input(RawInput::pointer(4), 1_234)));
}

/// WHAT: Unknown ids map to nothing
/// WHY: Menu events from other sources must be ignored
#[test]
fn given_unknown_entry_when_mapping_then_none() {
    // Given/When/Then
    assert_eq!(test_menu_ids().command_for(&MenuId::new("elsewhere"), 0), None);
}
