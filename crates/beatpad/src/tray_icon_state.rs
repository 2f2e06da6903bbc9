/// Tray icon states corresponding to the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayIconState {
    /// Nothing armed or playing.
    Idle,
    /// Recorder armed.
    Recording,
    /// Playback running.
    Playing,
}

impl TrayIconState {
    pub fn tooltip(self) -> &'static str {
        match self {
            TrayIconState::Idle => "Beatpad - Ready",
            TrayIconState::Recording => "Beatpad - Recording...",
            TrayIconState::Playing => "Beatpad - Playing...",
        }
    }

    /// Icon fill colour, RGB.
    pub fn color(self) -> [u8; 3] {
        match self {
            TrayIconState::Idle => [0x6b, 0x72, 0x80],
            TrayIconState::Recording => [0xdc, 0x26, 0x26],
            TrayIconState::Playing => [0x16, 0xa3, 0x4a],
        }
    }
}
