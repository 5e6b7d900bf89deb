//! Shared types and constants for Typefall.
//!
//! Everything in this crate is plain data with no dependencies, so it can be
//! used by the simulation core, the terminal view and the input layer alike.
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MAX_HP` | 100 | Health at the start of a game |
//! | `HP_PENALTY` | 10 | Health lost per word reaching the danger line |
//! | `MAX_ACTIVE_WORDS` | 5 | Words that may fall at the same time |
//! | `SPAWN_INTERVAL_MS` | 2000 | Minimum pacing between periodic spawns |
//! | `TICK_MS` | 16 | Frame interval of the terminal runner (~60 FPS) |
//!
//! # Reference Levels
//!
//! Fall duration shrinks as the level number grows:
//!
//! | Level | Fall duration |
//! |-------|---------------|
//! | 1 | 9000ms |
//! | 2 | 7500ms |
//! | 3 | 6000ms |
//! | 4 | 5000ms |
//! | 5 | 4000ms |
//!
//! # Examples
//!
//! ```
//! use typefall_types::{GameStatus, MAX_ACTIVE_WORDS, REFERENCE_LEVELS};
//!
//! assert!(GameStatus::Running.is_running());
//! assert!(GameStatus::Victory.is_terminal());
//! assert_eq!(MAX_ACTIVE_WORDS, 5);
//! assert_eq!(REFERENCE_LEVELS.len(), 5);
//! ```

/// Milliseconds since a caller-chosen epoch.
pub type Millis = u64;

/// Health at the start of a game.
pub const MAX_HP: u32 = 100;
/// Health lost for every word that reaches the danger line.
pub const HP_PENALTY: u32 = 10;
/// Hard capacity of the falling-word field.
pub const MAX_ACTIVE_WORDS: usize = 5;
/// Minimum time between periodic (non-replacement) spawns.
pub const SPAWN_INTERVAL_MS: u64 = 2000;

/// Horizontal placement range for new words, as a fraction of the play width.
pub const SPAWN_X_MIN: f32 = 0.1;
pub const SPAWN_X_MAX: f32 = 0.9;

/// Fixed frame interval of the terminal runner (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Longest word the text entry will accept.
pub const MAX_INPUT_LEN: usize = 32;

/// A built-in level definition: `(number, fall_ms, words)`.
pub type LevelDef = (u32, u32, &'static [&'static str]);

/// The reference five-level configuration.
pub const REFERENCE_LEVELS: [LevelDef; 5] = [
    (
        1,
        9000,
        &["cat", "dog", "sun", "map", "cup", "hat", "pen", "box"],
    ),
    (
        2,
        7500,
        &["apple", "river", "cloud", "stone", "light", "brave", "music", "plant"],
    ),
    (
        3,
        6000,
        &["garden", "planet", "silver", "window", "rocket", "bridge", "forest", "dragon"],
    ),
    (
        4,
        5000,
        &["keyboard", "mountain", "elephant", "treasure", "journey", "festival", "horizon"],
    ),
    (
        5,
        4000,
        &["adventure", "chocolate", "knowledge", "butterfly", "waterfall", "lighthouse", "wonderful"],
    ),
];

/// Lifecycle of a game session.
///
/// `Idle` is the initial state, `Running` is the only state in which time
/// advances and input is accepted, `Victory` and `GameOver` are terminal until
/// the next start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Idle,
    Running,
    Victory,
    GameOver,
}

impl GameStatus {
    /// Victory and GameOver only change through an explicit restart.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::Victory | GameStatus::GameOver)
    }

    pub fn is_running(&self) -> bool {
        matches!(self, GameStatus::Running)
    }
}

/// Player input, decoupled from the terminal backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A printable character typed into the current word.
    Char(char),
    Backspace,
    /// Discard the whole word being typed.
    ClearWord,
    /// End the current word (space or Tab).
    Submit,
    /// End the current word, or start a game when none is running.
    Enter,
    Restart,
}
