//! Game state module - the word-fall simulation.
//!
//! The engine is passive: the caller supplies the current time to every
//! operation. `advance` runs once per frame, `submit` once per typed word.

use std::sync::Arc;

use arrayvec::ArrayVec;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalog::{normalize_word, LevelCatalog};
use crate::snapshot::{GameSnapshot, WordSnapshot};
use crate::types::*;

/// Tunables of a session. The terminal game always runs with the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_hp: u32,
    pub hp_penalty: u32,
    /// Clamped to [`MAX_ACTIVE_WORDS`].
    pub max_active_words: usize,
    pub spawn_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_hp: MAX_HP,
            hp_penalty: HP_PENALTY,
            max_active_words: MAX_ACTIVE_WORDS,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
        }
    }
}

impl GameConfig {
    fn capacity(&self) -> usize {
        self.max_active_words.min(MAX_ACTIVE_WORDS)
    }
}

/// A word currently falling toward the danger line.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveWord {
    pub text: Arc<str>,
    pub spawned_at_ms: Millis,
    pub fall_ms: u32,
    pub x_fraction: f32,
}

impl ActiveWord {
    /// Fraction of the fall completed at `now`, clamped to `[0, 1]`.
    pub fn progress(&self, now: Millis) -> f32 {
        if self.fall_ms == 0 {
            return 1.0;
        }
        let dt = now.saturating_sub(self.spawned_at_ms) as f64;
        (dt / self.fall_ms as f64).clamp(0.0, 1.0) as f32
    }

    pub fn is_expired(&self, now: Millis) -> bool {
        now.saturating_sub(self.spawned_at_ms) >= self.fall_ms as u64
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = StdRng> {
    catalog: LevelCatalog,
    config: GameConfig,
    rng: R,
    status: GameStatus,
    hp: u32,
    /// Cursor of the next word to spawn.
    level_index: usize,
    word_index: usize,
    active: ArrayVec<ActiveWord, MAX_ACTIVE_WORDS>,
    game_start_ms: Millis,
    elapsed_ms: Millis,
    completion_ms: Option<Millis>,
    last_spawn_ms: Millis,
    /// Monotonic episode id (increments on every start).
    episode_id: u32,
    words_spawned: u32,
    words_matched: u32,
    words_expired: u32,
}

impl GameState<StdRng> {
    /// Create an idle game whose word placement is seeded with `seed`.
    pub fn new(catalog: LevelCatalog, seed: u64) -> Self {
        Self::with_rng(catalog, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameState<R> {
    pub fn with_rng(catalog: LevelCatalog, rng: R) -> Self {
        let config = GameConfig::default();
        Self {
            catalog,
            config,
            rng,
            status: GameStatus::Idle,
            hp: config.max_hp,
            level_index: 0,
            word_index: 0,
            active: ArrayVec::new(),
            game_start_ms: 0,
            elapsed_ms: 0,
            completion_ms: None,
            last_spawn_ms: 0,
            episode_id: 0,
            words_spawned: 0,
            words_matched: 0,
            words_expired: 0,
        }
    }

    /// Replace the session tunables. Takes effect fully on the next start.
    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self.hp = match self.status {
            GameStatus::Idle => config.max_hp,
            _ => self.hp.min(config.max_hp),
        };
        self
    }

    pub fn catalog(&self) -> &LevelCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn max_hp(&self) -> u32 {
        self.config.max_hp
    }

    pub fn active_words(&self) -> &[ActiveWord] {
        &self.active
    }

    pub fn level_index(&self) -> usize {
        self.level_index
    }

    pub fn word_index(&self) -> usize {
        self.word_index
    }

    /// Number of the level the spawn cursor is on (0 for an empty catalog).
    pub fn level_number(&self) -> u32 {
        self.catalog.level_number(self.level_index).unwrap_or(0)
    }

    /// Time since start; after a victory this is the completion time.
    pub fn elapsed_ms(&self) -> Millis {
        self.completion_ms.unwrap_or(self.elapsed_ms)
    }

    pub fn completion_ms(&self) -> Option<Millis> {
        self.completion_ms
    }

    pub fn last_spawn_ms(&self) -> Millis {
        self.last_spawn_ms
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn words_spawned(&self) -> u32 {
        self.words_spawned
    }

    pub fn words_matched(&self) -> u32 {
        self.words_matched
    }

    pub fn words_expired(&self) -> u32 {
        self.words_expired
    }

    /// Words not yet spawned, counted from the cursor to the end of the catalog.
    pub fn words_remaining(&self) -> usize {
        let here = self
            .catalog
            .word_count(self.level_index)
            .saturating_sub(self.word_index);
        let later: usize = (self.level_index + 1..self.catalog.level_count())
            .map(|i| self.catalog.word_count(i))
            .sum();
        here + later
    }

    pub fn has_unspawned(&self) -> bool {
        self.words_remaining() > 0
    }

    /// Reset everything and begin a new session at `now`.
    ///
    /// Valid from any status; a running session is discarded.
    pub fn start(&mut self, now: Millis) {
        self.status = GameStatus::Running;
        self.hp = self.config.max_hp;
        self.level_index = 0;
        self.word_index = 0;
        self.active.clear();
        self.game_start_ms = now;
        self.elapsed_ms = 0;
        self.completion_ms = None;
        self.last_spawn_ms = now;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.words_spawned = 0;
        self.words_matched = 0;
        self.words_expired = 0;

        log::info!(
            "episode {} started: {} levels, {} words",
            self.episode_id,
            self.catalog.level_count(),
            self.catalog.total_words()
        );

        self.try_spawn(now);
    }

    /// Advance the simulation to `now`.
    pub fn advance(&mut self, now: Millis) {
        if !self.status.is_running() {
            return;
        }

        self.elapsed_ms = now.saturating_sub(self.game_start_ms);

        let mut expired: u32 = 0;
        self.active.retain(|word| {
            if word.is_expired(now) {
                log::debug!("word '{}' reached the danger line", word.text);
                expired += 1;
                false
            } else {
                true
            }
        });

        if expired > 0 {
            self.words_expired += expired;
            self.hp = self
                .hp
                .saturating_sub(self.config.hp_penalty.saturating_mul(expired));
        }

        if self.hp == 0 {
            self.status = GameStatus::GameOver;
            log::info!(
                "episode {} lost after {}ms ({} matched)",
                self.episode_id,
                self.elapsed_ms,
                self.words_matched
            );
            return;
        }

        // Refill what was lost.
        for _ in 0..expired {
            self.try_spawn(now);
        }

        if self.active.len() < self.config.capacity()
            && self.has_unspawned()
            && now.saturating_sub(self.last_spawn_ms) >= self.config.spawn_interval_ms
        {
            self.try_spawn(now);
        }

        self.check_victory();
    }

    /// Resolve a typed word against the falling words.
    ///
    /// Returns the matched word so the caller can announce it. Unmatched input
    /// is dropped without penalty.
    pub fn submit(&mut self, raw: &str, now: Millis) -> Option<Arc<str>> {
        if !self.status.is_running() {
            return None;
        }

        let typed = normalize_word(raw);
        if typed.is_empty() {
            return None;
        }

        let index = self.active.iter().position(|w| *w.text == *typed)?;
        let word = self.active.remove(index);
        self.words_matched += 1;
        self.elapsed_ms = now.saturating_sub(self.game_start_ms);
        log::debug!("matched '{}' at {}ms", word.text, self.elapsed_ms);

        self.try_spawn(now);
        self.check_victory();

        Some(word.text)
    }

    /// Spawn the next catalog word at `now`, if there is room and a word left.
    pub fn try_spawn(&mut self, now: Millis) -> bool {
        if self.active.len() >= self.config.capacity() {
            return false;
        }

        let level_count = self.catalog.level_count();
        loop {
            if self.level_index >= level_count {
                return false;
            }
            if self.word_index < self.catalog.word_count(self.level_index) {
                break;
            }
            if self.level_index + 1 >= level_count {
                return false;
            }
            self.level_index += 1;
            self.word_index = 0;
        }

        let Some(text) = self
            .catalog
            .word_at(self.level_index, self.word_index)
            .map(Arc::<str>::from)
        else {
            return false;
        };
        let fall_ms = self.catalog.fall_ms(self.level_index).unwrap_or(0);
        let x_fraction = self.rng.gen_range(SPAWN_X_MIN..=SPAWN_X_MAX);

        log::debug!(
            "spawn '{}' (level {}, fall {}ms, x {:.2})",
            text,
            self.level_number(),
            fall_ms,
            x_fraction
        );

        let word = ActiveWord {
            text,
            spawned_at_ms: now,
            fall_ms,
            x_fraction,
        };
        if self.active.try_push(word).is_err() {
            return false;
        }

        self.word_index += 1;
        // Move to the next level eagerly so the cursor always names the level
        // the next word comes from.
        if self.word_index >= self.catalog.word_count(self.level_index)
            && self.level_index + 1 < level_count
        {
            self.level_index += 1;
            self.word_index = 0;
        }

        self.last_spawn_ms = now;
        self.words_spawned += 1;
        true
    }

    fn check_victory(&mut self) {
        if self.status.is_running() && self.active.is_empty() && !self.has_unspawned() {
            self.status = GameStatus::Victory;
            self.completion_ms = Some(self.elapsed_ms);
            log::info!(
                "episode {} won in {}ms ({} matched, {} expired)",
                self.episode_id,
                self.elapsed_ms,
                self.words_matched,
                self.words_expired
            );
        }
    }

    /// Fill `out` with the state visible at `now`.
    ///
    /// Outside `Running` the falling words are shown where they stood when the
    /// session stopped.
    pub fn snapshot_into(&self, now: Millis, out: &mut GameSnapshot) {
        let at = if self.status.is_running() {
            now
        } else {
            self.game_start_ms + self.elapsed_ms
        };

        out.status = self.status;
        out.hp = self.hp;
        out.max_hp = self.config.max_hp;
        out.elapsed_ms = self.elapsed_ms();
        out.completion_ms = self.completion_ms;
        out.level_number = self.level_number();
        out.level_count = self.catalog.level_count();
        out.words_remaining = self.words_remaining();
        out.words_spawned = self.words_spawned;
        out.words_matched = self.words_matched;
        out.words_expired = self.words_expired;
        out.episode_id = self.episode_id;

        out.words.clear();
        for word in self.active.iter() {
            out.words.push(WordSnapshot {
                text: Arc::clone(&word.text),
                x_fraction: word.x_fraction,
                progress: word.progress(at),
            });
        }
    }

    pub fn snapshot(&self, now: Millis) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(now, &mut s);
        s
    }
}
