//! System tray icon with state-based updates.
//!
//! The tray menu mirrors the transport and the pad grid, so every action is
//! reachable without the keyboard.

use crate::{AppCommand, AppError, AppResult, TrayIconState};

use std::panic::Location;

use beatpad_core::{PAD_COUNT, PadId, RawInput};
use error_location::ErrorLocation;
use image::{Rgba, RgbaImage};
use tracing::{info, instrument};
use tray_icon::{
    Icon, TrayIcon, TrayIconBuilder,
    menu::{Menu, MenuId, MenuItem, PredefinedMenuItem},
};

const ICON_SIZE: u32 = 32;

/// Ids of the tray menu entries, used to turn menu clicks into commands.
#[derive(Debug, Clone)]
pub struct MenuIds {
    pub(crate) record: MenuId,
    pub(crate) play: MenuId,
    pub(crate) clear: MenuId,
    pub(crate) pads: [MenuId; PAD_COUNT],
    pub(crate) help: MenuId,
    pub(crate) settings: MenuId,
    pub(crate) exit: MenuId,
}

impl MenuIds {
    /// Command for a menu entry clicked at `timestamp_ms`. Pad entries count
    /// as pointer activations.
    pub fn command_for(&self, id: &MenuId, timestamp_ms: u64) -> Option<AppCommand> {
        if *id == self.record {
            Some(AppCommand::ToggleRecording)
        } else if *id == self.play {
            Some(AppCommand::Play)
        } else if *id == self.clear {
            Some(AppCommand::Clear)
        } else if *id == self.help {
            Some(AppCommand::ShowHelp)
        } else if *id == self.settings {
            Some(AppCommand::OpenSettings)
        } else if *id == self.exit {
            Some(AppCommand::Shutdown)
        } else {
            self.pads
                .iter()
                .position(|pad| pad == id)
                .map(|index| AppCommand::input(RawInput::pointer(index), timestamp_ms))
        }
    }
}

/// System tray icon manager.
pub struct TrayManager {
    tray_icon: TrayIcon,
    state: TrayIconState,
    menu_ids: MenuIds,
}

impl TrayManager {
    /// Create the tray icon and its menu in the idle state.
    #[track_caller]
    #[instrument]
    pub fn new() -> AppResult<Self> {
        let menu = Menu::new();

        let record = MenuItem::new("Record", true, None);
        let play = MenuItem::new("Play", true, None);
        let clear = MenuItem::new("Clear", true, None);
        let pads: Vec<MenuItem> = PadId::ALL
            .into_iter()
            .map(|pad| MenuItem::new(format!("{} - {}", pad.key(), pad.display_name()), true, None))
            .collect();
        let help = MenuItem::new("Help", true, None);
        let settings = MenuItem::new("Settings", true, None);
        let exit = MenuItem::new("Exit", true, None);

        for item in [&record, &play, &clear] {
            append(&menu, item)?;
        }
        append(&menu, &PredefinedMenuItem::separator())?;
        for item in &pads {
            append(&menu, item)?;
        }
        append(&menu, &PredefinedMenuItem::separator())?;
        for item in [&help, &settings, &exit] {
            append(&menu, item)?;
        }

        let menu_ids = MenuIds {
            record: record.id().clone(),
            play: play.id().clone(),
            clear: clear.id().clone(),
            pads: std::array::from_fn(|i| pads[i].id().clone()),
            help: help.id().clone(),
            settings: settings.id().clone(),
            exit: exit.id().clone(),
        };

        let state = TrayIconState::Idle;
        let tray_icon = TrayIconBuilder::new()
            .with_tooltip(state.tooltip())
            .with_menu(Box::new(menu))
            .with_icon(Self::build_icon(state)?)
            .build()
            .map_err(|e| AppError::Tray {
                reason: format!("Failed to create tray icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!("System tray icon initialized");

        Ok(Self {
            tray_icon,
            state,
            menu_ids,
        })
    }

    /// Switch icon and tooltip to `state`. No-op if already there.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn update_state(&mut self, state: TrayIconState) -> AppResult<()> {
        if state == self.state {
            return Ok(());
        }

        self.tray_icon
            .set_icon(Some(Self::build_icon(state)?))
            .map_err(|e| AppError::Tray {
                reason: format!("Failed to update icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.tray_icon
            .set_tooltip(Some(state.tooltip()))
            .map_err(|e| AppError::Tray {
                reason: format!("Failed to update tooltip: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.state = state;
        Ok(())
    }

    /// Menu entry ids.
    pub fn menu_ids(&self) -> &MenuIds {
        &self.menu_ids
    }

    /// Filled circle in the state's colour on a transparent background.
    #[track_caller]
    fn build_icon(state: TrayIconState) -> AppResult<Icon> {
        let [r, g, b] = state.color();
        let center = (ICON_SIZE as f32 - 1.0) / 2.0;
        let radius = ICON_SIZE as f32 / 2.0 - 1.0;

        let rgba = RgbaImage::from_fn(ICON_SIZE, ICON_SIZE, |x, y| {
            let dx = x as f32 - center;
            let dy = y as f32 - center;
            if dx * dx + dy * dy <= radius * radius {
                Rgba([r, g, b, 0xff])
            } else {
                Rgba([0, 0, 0, 0])
            }
        });

        Icon::from_rgba(rgba.into_raw(), ICON_SIZE, ICON_SIZE).map_err(|e| AppError::Tray {
            reason: format!("Failed to create icon from RGBA: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

#[track_caller]
fn append(menu: &Menu, item: &dyn tray_icon::menu::IsMenuItem) -> AppResult<()> {
    menu.append(item).map_err(|e| AppError::Tray {
        reason: format!("Failed to add menu item: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })
}
