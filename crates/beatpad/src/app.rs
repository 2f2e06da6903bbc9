use crate::{
    AppCommand, AppResult, MenuIds, TokioScheduler, UiCommand, UiPresenter, UiSender,
    config::Config,
};

use std::path::PathBuf;

use beatpad_core::{PadRegistry, PlayOutcome, Presenter, Session, SessionClock};
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};
use tray_icon::menu::MenuEvent;

/// Usage lines logged when help is requested.
const HELP_LINES: [&str; 6] = [
    "Pads: Q W E / A S D / Z X C (keys or tray menu)",
    "Space: start or stop recording",
    "Enter: play the recording with its recorded timing",
    "Backspace or Delete: clear the recording",
    "F1: this help",
    "Escape: exit",
];

/// Shown on the display when help is requested.
const HELP_SUMMARY: &str = "Keys QWE/ASD/ZXC | Space rec | Enter play | Bksp clear | Esc exit";

/// Main application state.
///
/// Runs on the async runtime thread and owns the drum session. Commands
/// from the window, the tray menu and the playback timer all arrive on one
/// channel and are handled strictly one at a time.
pub struct App<U: UiSender> {
    session: Session<UiPresenter<U>, TokioScheduler>,
    presenter: UiPresenter<U>,
    ui: U,
    clock: SessionClock,
    menu_ids: MenuIds,
    config_path: Option<PathBuf>,
}

impl<U: UiSender> App<U> {
    /// Build the session. Must be called from within a tokio runtime;
    /// `command_tx` must feed the receiver later passed to [`App::run`] so
    /// timer actions come back here. Tray clicks are stamped with `clock`,
    /// the same clock key presses are stamped with.
    pub fn new(
        registry: PadRegistry,
        config: &Config,
        ui: U,
        menu_ids: MenuIds,
        clock: SessionClock,
        config_path: Option<PathBuf>,
        command_tx: mpsc::Sender<AppCommand>,
    ) -> Self {
        let presenter = UiPresenter::new(ui.clone());
        let scheduler = TokioScheduler::spawn(command_tx);
        let session = Session::new(
            registry,
            config.playback.timing(),
            presenter.clone(),
            scheduler,
        );

        Self {
            session,
            presenter,
            ui,
            clock,
            menu_ids,
            config_path,
        }
    }

    /// Run the main application event loop.
    #[instrument(skip_all)]
    pub async fn run(mut self, mut command_rx: mpsc::Receiver<AppCommand>) -> AppResult<()> {
        info!(
            loaded_pads = self.session.registry().loaded_count(),
            "Beatpad starting"
        );

        // MenuEvent::receiver() is a blocking crossbeam receiver; one
        // blocking task forwards it until the forwarding channel closes.
        let (tray_event_tx, mut tray_event_rx) = mpsc::channel(32);
        let clock = self.clock;
        let tray_handle = tokio::task::spawn_blocking(move || {
            let receiver = MenuEvent::receiver();
            while let Ok(event) = receiver.recv() {
                if tray_event_tx.blocking_send((event, clock.now_ms())).is_err() {
                    break;
                }
            }
        });

        loop {
            let command = tokio::select! {
                Some((event, timestamp_ms)) = tray_event_rx.recv() => {
                    match self.menu_ids.command_for(&event.id, timestamp_ms) {
                        Some(command) => command,
                        None => {
                            debug!(id = ?event.id, "Unknown menu entry");
                            continue;
                        }
                    }
                }

                Some(command) = command_rx.recv() => command,

                else => {
                    info!("All channels closed, shutting down");
                    break;
                }
            };

            if !self.handle_command(command) {
                break;
            }
        }

        drop(tray_event_rx);

        match tokio::time::timeout(std::time::Duration::from_secs(1), tray_handle).await {
            Ok(Ok(())) => info!("Tray event forwarder stopped cleanly"),
            Ok(Err(e)) => error!(error = ?e, "Tray event forwarder task panicked"),
            Err(_) => info!(
                "Tray event forwarder did not stop within timeout, \
                     will be cleaned up on exit"
            ),
        }

        info!("Beatpad shut down successfully");

        Ok(())
    }

    /// Apply one command to the session. Returns `false` once shutdown was
    /// requested.
    #[instrument(skip(self))]
    pub fn handle_command(&mut self, command: AppCommand) -> bool {
        match command {
            AppCommand::Input {
                input,
                timestamp_ms,
            } => {
                self.session.trigger(input, timestamp_ms);
            }
            AppCommand::ToggleRecording => self.session.toggle_recording(),
            AppCommand::Play => match self.session.play() {
                PlayOutcome::Started { events, total } => {
                    debug!(events, total_ms = total.as_millis(), "Playback scheduled");
                }
                outcome => debug!(?outcome, "Nothing scheduled"),
            },
            AppCommand::Clear => {
                let outcome = self.session.clear();
                debug!(?outcome, "Clear handled");
            }
            AppCommand::Fire(action) => {
                self.session.fire(action);
            }
            AppCommand::ShowHelp => self.show_help(),
            AppCommand::OpenSettings => self.open_settings(),
            AppCommand::Shutdown => {
                info!("Shutdown requested");
                self.ui.send(UiCommand::Shutdown);
                return false;
            }
        }
        true
    }

    #[cfg(test)]
    pub fn session(&self) -> &Session<UiPresenter<U>, TokioScheduler> {
        &self.session
    }

    fn show_help(&mut self) {
        for line in HELP_LINES {
            info!("{}", line);
        }
        self.presenter.display(HELP_SUMMARY);
    }

    fn open_settings(&self) {
        let Some(path) = &self.config_path else {
            error!("No config file to open");
            return;
        };
        match open::that(path) {
            Ok(()) => info!(config_path = ?path, "Opened settings"),
            Err(e) => error!(config_path = ?path, error = ?e, "Failed to open settings"),
        }
    }
}
