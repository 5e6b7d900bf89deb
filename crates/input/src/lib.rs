//! Terminal input module (engine-facing).
//!
//! This module is independent of the simulation. It maps `crossterm` key
//! events into [`crate::types::InputEvent`] and collects typed characters in a
//! bounded [`TextEntry`] until a word boundary submits them.

pub mod entry;
pub mod map;

pub use typefall_types as types;

pub use entry::TextEntry;
pub use map::{handle_key_event, should_quit};
