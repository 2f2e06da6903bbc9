use std::fmt;

/// Number of pads on the board.
pub const PAD_COUNT: usize = 9;

/// One of the nine trigger pads, laid out as a 3x3 grid:
///
/// ```text
/// Q W E
/// A S D
/// Z X C
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PadId {
    /// Heater-1.
    Q,
    /// Heater-2.
    W,
    /// Heater-3.
    E,
    /// Heater-4.
    A,
    /// Clap.
    S,
    /// Open hi-hat.
    D,
    /// Kick with hat.
    Z,
    /// Kick.
    X,
    /// Closed hi-hat.
    C,
}

impl PadId {
    /// Every pad in grid order.
    pub const ALL: [PadId; PAD_COUNT] = [
        PadId::Q,
        PadId::W,
        PadId::E,
        PadId::A,
        PadId::S,
        PadId::D,
        PadId::Z,
        PadId::X,
        PadId::C,
    ];

    /// Resolve a keyboard symbol to a pad, ignoring case.
    ///
    /// Only single-character symbols match; `"q"` and `"Q"` both give
    /// [`PadId::Q`], while `"Shift"` or `"qq"` give `None`.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let mut chars = symbol.chars();
        let c = chars.next()?;
        if chars.next().is_some() {
            return None;
        }

        let upper = c.to_ascii_uppercase();
        Self::ALL.into_iter().find(|pad| pad.key() == upper)
    }

    /// Look up a pad by its position in the grid (row-major, 0..9).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Position of this pad in the grid.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Keyboard key bound to this pad.
    pub fn key(self) -> char {
        match self {
            PadId::Q => 'Q',
            PadId::W => 'W',
            PadId::E => 'E',
            PadId::A => 'A',
            PadId::S => 'S',
            PadId::D => 'D',
            PadId::Z => 'Z',
            PadId::X => 'X',
            PadId::C => 'C',
        }
    }

    /// Name shown on the display when this pad fires.
    pub fn display_name(self) -> &'static str {
        match self {
            PadId::Q => "Heater-1",
            PadId::W => "Heater-2",
            PadId::E => "Heater-3",
            PadId::A => "Heater-4",
            PadId::S => "Clap",
            PadId::D => "Open-HH",
            PadId::Z => "Kick-n'-Hat",
            PadId::X => "Kick",
            PadId::C => "Closed-HH",
        }
    }

    /// File name the pad's sample is loaded from unless configured otherwise.
    pub fn default_sample_file(self) -> String {
        format!("{}.wav", self.display_name())
    }
}

impl fmt::Display for PadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
