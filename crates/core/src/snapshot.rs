use std::sync::Arc;

use arrayvec::ArrayVec;

use crate::types::{GameStatus, Millis, MAX_ACTIVE_WORDS};

/// A falling word as the view sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct WordSnapshot {
    pub text: Arc<str>,
    /// Horizontal placement in `[0, 1]` of the play width.
    pub x_fraction: f32,
    /// Distance travelled toward the danger line in `[0, 1]`.
    pub progress: f32,
}

/// Read-only view of the simulation handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GameSnapshot {
    pub status: GameStatus,
    pub hp: u32,
    pub max_hp: u32,
    /// Time since start, frozen at the victory moment.
    pub elapsed_ms: Millis,
    pub completion_ms: Option<Millis>,
    pub level_number: u32,
    pub level_count: usize,
    pub words_remaining: usize,
    pub words_spawned: u32,
    pub words_matched: u32,
    pub words_expired: u32,
    pub episode_id: u32,
    pub words: ArrayVec<WordSnapshot, MAX_ACTIVE_WORDS>,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn playable(&self) -> bool {
        self.status.is_running()
    }

    /// Health as a fraction of the maximum (0 when `max_hp` is 0).
    pub fn hp_fraction(&self) -> f32 {
        if self.max_hp == 0 {
            return 0.0;
        }
        self.hp as f32 / self.max_hp as f32
    }
}
