//! Core types shared across the engine
//! This module contains pure data types and the tunable rule constants.

/// Playfield dimensions. The two buffer rows above the visible field give
/// freshly spawned pieces room before they enter view.
pub const PLAYFIELD_WIDTH: i8 = 10;
pub const PLAYFIELD_HEIGHT: i8 = 20;
pub const BUFFER_ROWS: i8 = 2;

/// Game timing constants (in milliseconds)
pub const SPAWN_DELAY_MS: u64 = 100;
pub const LOCK_DELAY_MS: u64 = 1000;

/// Gravity curve: `round(GRAVITY_COEFF * ln(level) + GRAVITY_BASE)`,
/// clamped to `GRAVITY_FLOOR_MS`. Level 1 is ~1000ms per row.
pub const GRAVITY_COEFF: f64 = -333.54;
pub const GRAVITY_BASE: f64 = 999.98;
pub const GRAVITY_FLOOR_MS: u64 = 1;

/// Leveling: one level per `LINES_PER_LEVEL` cleared, capped at `MAX_LEVEL`.
pub const LINES_PER_LEVEL: u32 = 10;
pub const MAX_LEVEL: u32 = 20;

/// Line clear points by number of lines (index 0 unused).
pub const CLEAR_POINTS: [u32; 5] = [0, 100, 300, 500, 800];

/// T-spin clear points by number of lines, without a wall kick.
pub const TSPIN_POINTS: [u32; 4] = [400, 800, 1200, 1600];

/// T-spin clear points by number of lines, when the rotation was
/// kick-assisted.
pub const TSPIN_KICK_POINTS: [u32; 4] = [100, 200, 1200, 1600];

/// Drop points per row: soft drop 1, hard drop 2 (both scaled by level).
pub const SOFT_DROP_POINTS: u32 = 1;
pub const HARD_DROP_POINTS: u32 = 2;

/// Combo bonus multiplier (as a fraction) applied when a difficult clear
/// follows another difficult clear.
pub const COMBO_NUMERATOR: u32 = 3;
pub const COMBO_DENOMINATOR: u32 = 2;

/// Tetromino shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl Shape {
    /// All seven shapes, in canonical order.
    pub const ALL: [Shape; 7] = [
        Shape::I,
        Shape::O,
        Shape::T,
        Shape::S,
        Shape::Z,
        Shape::J,
        Shape::L,
    ];

    /// Parse shape from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(Shape::I),
            "o" => Some(Shape::O),
            "t" => Some(Shape::T),
            "s" => Some(Shape::S),
            "z" => Some(Shape::Z),
            "j" => Some(Shape::J),
            "l" => Some(Shape::L),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::I => "i",
            Shape::O => "o",
            Shape::T => "t",
            Shape::S => "s",
            Shape::Z => "z",
            Shape::J => "j",
            Shape::L => "l",
        }
    }
}

/// Block colors, one per shape (guideline palette)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    Cyan,
    Yellow,
    Purple,
    Green,
    Red,
    Blue,
    Orange,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Cyan => "cyan",
            Color::Yellow => "yellow",
            Color::Purple => "purple",
            Color::Green => "green",
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Orange => "orange",
        }
    }
}

/// Player commands, one per tetrion operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    MoveLeft,
    MoveRight,
    MoveDown,
    RotateLeft,
    RotateRight,
    SoftDrop,
    FirmDrop,
    HardDrop,
    Hold,
}

impl Command {
    /// Parse command from string (for the input driver).
    /// `None` means the command is unrecognized and must be rejected by the
    /// caller rather than silently dropped.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "movedown" => Some(Command::MoveDown),
            "rotateleft" => Some(Command::RotateLeft),
            "rotateright" => Some(Command::RotateRight),
            "softdrop" => Some(Command::SoftDrop),
            "firmdrop" => Some(Command::FirmDrop),
            "harddrop" => Some(Command::HardDrop),
            "hold" => Some(Command::Hold),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::MoveDown => "moveDown",
            Command::RotateLeft => "rotateLeft",
            Command::RotateRight => "rotateRight",
            Command::SoftDrop => "softDrop",
            Command::FirmDrop => "firmDrop",
            Command::HardDrop => "hardDrop",
            Command::Hold => "hold",
        }
    }
}

/// Transient UI message accompanying a qualifying clear
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Message {
    Tetris,
    TSpin,
}

impl Message {
    pub fn as_str(&self) -> &'static str {
        match self {
            Message::Tetris => "tetris",
            Message::TSpin => "tspin",
        }
    }
}

/// Outer state machine phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Spawning,
    Idle,
    Locking,
    Finished,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Spawning => "spawning",
            Phase::Idle => "idle",
            Phase::Locking => "locking",
            Phase::Finished => "finished",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_roundtrip() {
        for shape in Shape::ALL {
            assert_eq!(Shape::from_str(shape.as_str()), Some(shape));
        }
        assert_eq!(Shape::from_str("x"), None);
    }

    #[test]
    fn test_command_roundtrip() {
        let commands = [
            Command::MoveLeft,
            Command::MoveRight,
            Command::MoveDown,
            Command::RotateLeft,
            Command::RotateRight,
            Command::SoftDrop,
            Command::FirmDrop,
            Command::HardDrop,
            Command::Hold,
        ];
        for command in commands {
            assert_eq!(Command::from_str(command.as_str()), Some(command));
        }
    }

    #[test]
    fn test_unrecognized_command_rejected() {
        assert_eq!(Command::from_str("teleport"), None);
        assert_eq!(Command::from_str(""), None);
    }
}
