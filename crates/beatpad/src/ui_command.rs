use beatpad_core::{Button, PadId};

/// Commands sent from the async runtime to the main UI thread.
///
/// The main thread owns the window and `TrayManager` (`TrayIcon` is
/// `!Send`), so every visible change flows through this enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    /// Replace the display text.
    Display(String),
    /// Highlight or clear a pad.
    Pad {
        /// Pad to update.
        pad: PadId,
        /// Whether the pad is highlighted.
        lit: bool,
    },
    /// Light or unlight a transport button.
    Button {
        /// Button to update.
        button: Button,
        /// Whether the button is lit.
        lit: bool,
    },
    /// Shut down the application. The main thread will exit the event loop.
    Shutdown,
}
