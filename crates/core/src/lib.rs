//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the level catalog and the word-fall simulation. It has
//! no dependencies on terminals, audio, or I/O, making it:
//!
//! - **Deterministic**: same seed and same call sequence give the same game
//! - **Testable**: time is always supplied by the caller
//! - **Portable**: runs under the terminal runner, a GUI, or headless
//!
//! # Module Structure
//!
//! - [`catalog`]: ordered levels, each a word list with a fall duration
//! - [`game_state`]: the engine (spawn pacing, expiry, HP, matching, win/loss)
//! - [`snapshot`]: read-only state handed to the presentation layer
//!
//! # Game Rules
//!
//! - Words spawn in catalog order, at most 5 on screen
//! - A new word appears every 2 seconds, and immediately whenever one is removed
//! - A word reaching the danger line costs 10 HP; at 0 HP the game is over
//! - Typing a falling word removes it with no penalty; wrong words are ignored
//! - Clearing every word of every level wins
//!
//! # Example
//!
//! ```
//! use typefall_core::{GameState, LevelCatalog};
//! use typefall_types::GameStatus;
//!
//! let mut game = GameState::new(LevelCatalog::reference(), 7);
//! game.start(0);
//! assert_eq!(game.active_words().len(), 1);
//!
//! let word = game.active_words()[0].text.clone();
//! assert_eq!(game.submit(&word, 100), Some(word));
//!
//! game.advance(116);
//! assert_eq!(game.status(), GameStatus::Running);
//! ```
//!
//! # Timing
//!
//! All timestamps are milliseconds on a caller-chosen clock. Call
//! [`GameState::advance`](game_state::GameState::advance) once per frame with
//! the current time.

pub mod catalog;
pub mod game_state;
pub mod snapshot;

pub use typefall_types as types;

pub use catalog::{normalize_word, CatalogError, Level, LevelCatalog};
pub use game_state::{ActiveWord, GameConfig, GameState};
pub use snapshot::{GameSnapshot, WordSnapshot};
