//! Beatpad: nine-pad drum trigger with gap-preserving record and playback.

mod app;
mod app_command;
mod config;
mod error;
mod key_map;
mod presenter;
mod scheduler;
#[cfg(test)]
mod tests;
mod tray_icon_state;
mod tray_manager;
mod ui_command;
mod window_view;

pub(crate) use {
    app::App,
    app_command::AppCommand,
    error::{AppError, Result as AppResult},
    key_map::command_for_key,
    presenter::{UiPresenter, UiSender},
    scheduler::TokioScheduler,
    tray_icon_state::TrayIconState,
    tray_manager::{MenuIds, TrayManager},
    ui_command::UiCommand,
    window_view::WindowView,
};

use crate::config::Config;

use std::{panic::Location, sync::Arc};

use beatpad_core::{AudioOutput, NullSink, PadRegistry, SessionClock, SoundSink};
use error_location::ErrorLocation;
use tao::{
    dpi::LogicalSize,
    event::{ElementState, Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopBuilder},
    window::{Window, WindowBuilder},
};
use tokio::sync::mpsc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Rate samples are converted to when no output device is available.
const FALLBACK_SAMPLE_RATE: u32 = 48_000;

/// Application entry point.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("beatpad=debug,beatpad_core=debug")),
        )
        .init();

    let event_loop = EventLoopBuilder::<UiCommand>::with_user_event().build();
    let ui_proxy = event_loop.create_proxy();

    let window = match build_window(&event_loop) {
        Ok(w) => w,
        Err(e) => {
            error!("Failed to create window: {:?}", e);
            std::process::exit(1);
        }
    };

    // TrayManager lives on the main thread - TrayIcon is !Send on all platforms.
    let mut tray_manager = match TrayManager::new() {
        Ok(tm) => tm,
        Err(e) => {
            error!("Failed to create TrayManager: {:?}", e);
            std::process::exit(1);
        }
    };

    let mut view = WindowView::default();
    // The cpal stream stops when dropped, so it lives in the closure.
    let mut audio_output: Option<AudioOutput> = None;
    let mut command_tx: Option<mpsc::Sender<AppCommand>> = None;
    let clock = SessionClock::start();

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::UserEvent(UiCommand::Shutdown) => {
                if let Some(output) = &audio_output {
                    output.pause();
                }
                *control_flow = ControlFlow::ExitWithCode(0);
            }
            Event::UserEvent(cmd) => {
                if view.apply(&cmd) {
                    window.set_title(&view.title());
                    if let Err(e) = tray_manager.update_state(view.tray_state()) {
                        error!(error = ?e, "Failed to update tray icon");
                    }
                }
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                if event.state == ElementState::Pressed && !event.repeat {
                    if let Some(cmd) = command_for_key(&event.logical_key, clock.now_ms())
                        && let Err(e) = forward(command_tx.as_ref(), cmd)
                    {
                        error!(error = ?e, "Key command lost");
                    }
                }
            }
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                if command_tx.is_none() {
                    *control_flow = ControlFlow::ExitWithCode(0);
                } else if let Err(e) = forward(command_tx.as_ref(), AppCommand::Shutdown) {
                    error!(error = ?e, "Shutdown request lost, exiting directly");
                    *control_flow = ControlFlow::ExitWithCode(0);
                }
            }
            Event::NewEvents(tao::event::StartCause::Init) => {
                let config = match Config::load() {
                    Ok(c) => c,
                    Err(e) => {
                        error!("Failed to load config: {:?}", e);
                        std::process::exit(1);
                    }
                };
                let config_path = match Config::config_path() {
                    Ok(p) => Some(p),
                    Err(e) => {
                        warn!(error = ?e, "Config path unavailable, Settings disabled");
                        None
                    }
                };

                let (sink, sample_rate): (Arc<dyn SoundSink>, u32) = match open_audio(&config) {
                    Ok(output) => {
                        let sink = Arc::new(output.sink());
                        let rate = output.sample_rate();
                        audio_output = Some(output);
                        (sink, rate)
                    }
                    Err(e) => {
                        warn!(error = ?e, "No audio output, pads will be silent");
                        (Arc::new(NullSink), FALLBACK_SAMPLE_RATE)
                    }
                };

                #[cfg(target_os = "macos")]
                unsafe {
                    use core_foundation::runloop::{CFRunLoopGetMain, CFRunLoopWakeUp};
                    CFRunLoopWakeUp(CFRunLoopGetMain());
                }

                let (tx, rx) = mpsc::channel(64);
                command_tx = Some(tx.clone());

                let ui_proxy = ui_proxy.clone();
                let menu_ids = tray_manager.menu_ids().clone();

                // Spawn tokio runtime on separate thread.
                // Window, tray and audio stream stay on the main thread.
                std::thread::spawn(move || {
                    let rt = match tokio::runtime::Runtime::new() {
                        Ok(rt) => rt,
                        Err(e) => {
                            error!("Failed to create tokio runtime: {:?}", e);
                            std::process::exit(1);
                        }
                    };

                    let mut registry = PadRegistry::new(sink);
                    registry.load_from_dir(
                        &config.samples.directory,
                        |pad| config.samples.file_for(pad),
                        sample_rate,
                    );

                    rt.block_on(async {
                        let app = App::new(
                            registry,
                            &config,
                            ui_proxy,
                            menu_ids,
                            clock,
                            config_path,
                            tx,
                        );
                        if let Err(e) = app.run(rx).await {
                            error!(error = ?e, "App error");
                        }
                    });
                });

                info!("Runtime thread started");
            }
            _ => {}
        }
    });
}

/// Small window whose title is the display. It also takes keyboard focus
/// for the pad keys.
#[track_caller]
fn build_window(event_loop: &EventLoop<UiCommand>) -> AppResult<Window> {
    WindowBuilder::new()
        .with_title(WindowView::default().title())
        .with_inner_size(LogicalSize::new(520.0, 140.0))
        .build(event_loop)
        .map_err(|e| AppError::Window {
            reason: format!("Failed to create window: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
}

/// Hand a command to the app without blocking the UI thread.
#[track_caller]
fn forward(command_tx: Option<&mpsc::Sender<AppCommand>>, command: AppCommand) -> AppResult<()> {
    let Some(tx) = command_tx else {
        warn!(?command, "App not running yet, command dropped");
        return Ok(());
    };
    tx.try_send(command).map_err(|e| AppError::ChannelSendFailed {
        message: format!("Failed to forward command to app: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Open the configured output device.
#[track_caller]
fn open_audio(config: &Config) -> AppResult<AudioOutput> {
    let output = AudioOutput::open(config.audio.output_device.as_deref(), config.audio.volume)?;
    Ok(output)
}
