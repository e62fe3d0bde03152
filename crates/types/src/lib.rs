//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the application.
//! All types are pure data with no external dependencies, so they can be used
//! by the rule engine, the terminal renderer and the key mapping alike.
//!
//! # Board Dimensions
//!
//! The board is a fixed 4x4 grid stored row-major:
//!
//! - **Rows**: indexed 0-3, top to bottom
//! - **Columns**: indexed 0-3, left to right
//! - **Cell index**: `row * BOARD_SIZE + col`
//!
//! # Spawn Odds
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_TILES` | 2 | Tiles placed on start/restart |
//! | `SPAWN_FOUR_ONE_IN` | 10 | A spawned tile is a 4 one time in ten, else a 2 |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, BOARD_SIZE, CELL_COUNT};
//!
//! let dir: Direction = "left".parse().unwrap();
//! assert_eq!(dir, Direction::Left);
//! assert!("sideways".parse::<Direction>().is_err());
//!
//! assert_eq!(GameAction::from_str("moveUp"), Some(GameAction::Move(Direction::Up)));
//!
//! assert_eq!(BOARD_SIZE, 4);
//! assert_eq!(CELL_COUNT, 16);
//! ```

use std::fmt;
use std::str::FromStr;

/// Board width and height in cells
pub const BOARD_SIZE: usize = 4;

/// Total number of cells on the board
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Number of tiles spawned by a fresh game
pub const INITIAL_TILES: usize = 2;

/// Value of a regular spawned tile
pub const SPAWN_TWO: u32 = 2;

/// Value of a rare spawned tile
pub const SPAWN_FOUR: u32 = 4;

/// A spawn yields `SPAWN_FOUR` with probability `1 / SPAWN_FOUR_ONE_IN`
pub const SPAWN_FOUR_ONE_IN: u32 = 10;

/// Value of a single cell: 0 is empty, anything else is a power of two >= 2
pub type Cell = u32;

/// Largest tile a 4x4 game can produce (2^17).
///
/// Boards are only accepted with tiles up to this value, which keeps every
/// merge, per-move gain and running score well inside `u32`.
pub const MAX_TILE: Cell = 1 << 17;

/// True for 0 and for powers of two from 2 up to [`MAX_TILE`].
///
/// ```
/// use tui_2048_types::{is_valid_cell, MAX_TILE};
///
/// assert!(is_valid_cell(0));
/// assert!(is_valid_cell(2048));
/// assert!(is_valid_cell(MAX_TILE));
/// assert!(!is_valid_cell(1));
/// assert!(!is_valid_cell(6));
/// assert!(!is_valid_cell(MAX_TILE * 2));
/// ```
pub fn is_valid_cell(value: Cell) -> bool {
    value == 0 || ((2..=MAX_TILE).contains(&value) && value.is_power_of_two())
}

/// Direction of travel for a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a stable order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Whether groups for this direction are columns (as opposed to rows)
    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Whether tiles travel toward the high end of their group
    pub fn is_reversed(&self) -> bool {
        matches!(self, Direction::Down | Direction::Right)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = InvalidArgument;

    /// Parse a direction (case-insensitive): "up", "down", "left" or "right".
    /// Key bindings live in the input crate, so no single-letter forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(InvalidArgument::UnknownDirection(s.to_string())),
        }
    }
}

/// Commands the presentation layer forwards to a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide all tiles in a direction
    Move(Direction),
    /// Restore the board from before the last move
    Undo,
    /// Start a fresh game
    Restart,
}

impl GameAction {
    /// Parse action from its camelCase name
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::Move(Direction::Left)));
    /// assert_eq!(GameAction::from_str("undo"), Some(GameAction::Undo));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveup" => Some(GameAction::Move(Direction::Up)),
            "movedown" => Some(GameAction::Move(Direction::Down)),
            "moveleft" => Some(GameAction::Move(Direction::Left)),
            "moveright" => Some(GameAction::Move(Direction::Right)),
            "undo" => Some(GameAction::Undo),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(Direction::Up) => "moveUp",
            GameAction::Move(Direction::Down) => "moveDown",
            GameAction::Move(Direction::Left) => "moveLeft",
            GameAction::Move(Direction::Right) => "moveRight",
            GameAction::Undo => "undo",
            GameAction::Restart => "restart",
        }
    }

    /// The direction carried by a move action
    pub fn direction(&self) -> Option<Direction> {
        match self {
            GameAction::Move(dir) => Some(*dir),
            GameAction::Undo | GameAction::Restart => None,
        }
    }
}

/// Contract violation raised when malformed input reaches the engine.
///
/// Nothing is clamped or coerced: the offending call leaves all state as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidArgument {
    /// A textual direction that is not one of up/down/left/right
    UnknownDirection(String),
    /// A cell sequence whose length is not `CELL_COUNT`
    WrongLength { expected: usize, actual: usize },
    /// A cell value that is neither 0 nor a power of two in `2..=MAX_TILE`
    InvalidTileValue { index: usize, value: Cell },
}

impl std::error::Error for InvalidArgument {}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidArgument::UnknownDirection(s) => {
                write!(f, "unknown direction {:?}, expected up, down, left or right", s)
            }
            InvalidArgument::WrongLength { expected, actual } => {
                write!(f, "expected {} cell values, got {}", expected, actual)
            }
            InvalidArgument::InvalidTileValue { index, value } => {
                write!(
                    f,
                    "cell {} holds {}, which is neither empty nor a power of two up to {}",
                    index, value, MAX_TILE
                )
            }
        }
    }
}
