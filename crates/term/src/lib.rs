//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It renders
//! into a simple framebuffer that is diffed and flushed to a terminal backend,
//! with no widget or layout library in between.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the view pure: snapshot in, framebuffer out
//! - Send only changed cells to the terminal each frame

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use typefall_core as core;
pub use typefall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{format_elapsed, GameView, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
