//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules of 2048: sliding, merging, spawning, game
//! over detection, scoring and single-level undo. It has **no dependencies**
//! on UI or I/O, which makes it:
//!
//! - **Deterministic**: all randomness flows through [`RandomSource`], so a
//!   seeded or scripted source reproduces a game exactly
//! - **Testable**: every rule is exercised by plain unit tests
//! - **Portable**: the terminal front end is just one observer of the state
//!
//! # Module Structure
//!
//! - [`board`]: 4x4 grid, move resolution and terminal detection
//! - [`line`]: group derivation and the single-pass compact-and-merge
//! - [`rng`]: the random source seam, an LCG and the spawn value distribution
//! - [`session`]: score, undo snapshot and the command API
//! - [`snapshot`]: plain render state handed to the presentation layer
//!
//! # Game Rules
//!
//! - A move slides every tile as far as it goes toward one edge
//! - Two equal tiles meeting merge into their sum, which is added to the score
//! - A tile merges at most once per move
//! - A move that changed the board spawns a 2 (90%) or a 4 (10%) in a random empty cell
//! - The game is over when the board is full and no neighbours are equal
//! - Undo restores the board from before the last move, once; the score stays
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{Board, GameSession};
//! use tui_2048_types::Direction;
//!
//! let mut game = GameSession::with_seed(12345);
//! game.start();
//! assert_eq!(game.board().empty_count(), 14);
//!
//! let before = game.score();
//! let report = game.apply_move(Direction::Left);
//! assert!(report.score >= before);
//!
//! let mut board = Board::from_values(&[2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]).unwrap();
//! let outcome = board.slide(Direction::Left);
//! assert_eq!(outcome.score_gained, 4);
//! assert_eq!(board.get(0, 0), Some(4));
//! ```

pub mod board;
pub mod line;
pub mod rng;
pub mod session;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, MoveOutcome};
pub use line::{group_indices, merge_line};
pub use rng::{spawn_value, RandomSource, SimpleRng};
pub use session::{GameSession, MoveReport};
pub use snapshot::GameSnapshot;
