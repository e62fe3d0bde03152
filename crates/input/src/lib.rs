//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. A 2048 move
//! is a discrete command, so there is no auto-repeat handling: one key press
//! is one action, and terminal auto-repeat is left to the caller to ignore.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
