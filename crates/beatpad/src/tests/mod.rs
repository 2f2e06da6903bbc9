mod scheduler;
mod support;
mod tray_menu;
