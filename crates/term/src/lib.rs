//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal gameplay. It renders a
//! [`core::GameSnapshot`] into a framebuffer that is then flushed to a
//! terminal backend, keeping the rule engine free of any presentation state.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Rendering is a pure projection of the snapshot
//! - Tiles are drawn as solid colour blocks with the value centred

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{tile_style, AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
