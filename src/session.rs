//! A play session: the engine plus the text being typed and the narrator.
//!
//! This is the glue between raw input events and the simulation. It holds no
//! game rules of its own.

use crate::core::{GameSnapshot, GameState};
use crate::input::TextEntry;
use crate::narrator::Narrator;
use crate::types::{InputEvent, Millis};

pub struct Session<N> {
    game: GameState,
    entry: TextEntry,
    narrator: N,
}

impl<N: Narrator> Session<N> {
    pub fn new(game: GameState, narrator: N) -> Self {
        Self {
            game,
            entry: TextEntry::new(),
            narrator,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn narrator(&self) -> &N {
        &self.narrator
    }

    /// The word being typed.
    pub fn typed(&self) -> &str {
        self.entry.as_str()
    }

    pub fn advance(&mut self, now: Millis) {
        self.game.advance(now);
    }

    pub fn snapshot_into(&self, now: Millis, out: &mut GameSnapshot) {
        self.game.snapshot_into(now, out);
    }

    /// Apply one input event at `now`.
    ///
    /// Enter while no game is running starts one. Every other key is ignored
    /// outside a running game, so a word boundary typed as the game ends
    /// leaves the final screen up.
    pub fn handle(&mut self, event: InputEvent, now: Millis) {
        let running = self.game.status().is_running();
        match event {
            InputEvent::Restart => self.restart(now),
            InputEvent::Enter if !running => self.restart(now),
            _ if !running => {}
            _ => {
                let Some(word) = self.entry.apply(event) else {
                    return;
                };
                match self.game.submit(&word, now) {
                    Some(matched) => {
                        if let Err(e) = self.narrator.announce(&matched) {
                            log::warn!("narration failed for '{}': {:#}", matched, e);
                        }
                    }
                    None => log::debug!("no falling word matches '{}'", word),
                }
            }
        }
    }

    fn restart(&mut self, now: Millis) {
        self.entry.clear();
        self.game.start(now);
    }
}
