//! Level catalog - the ordered word lists a game is played through.
//!
//! Levels are immutable once the catalog is built. Words are normalized
//! (trimmed, lower-cased) on construction so they compare directly against
//! normalized player input.

use serde::Deserialize;
use thiserror::Error;

use crate::types::{MAX_INPUT_LEN, REFERENCE_LEVELS};

/// Normalize text the way player input is normalized before matching.
pub fn normalize_word(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Whether one submitted entry can spell `word`.
fn is_typeable(word: &str) -> bool {
    word.len() <= MAX_INPUT_LEN && !word.contains(char::is_whitespace)
}

/// A single level: a word list spawned in order, all falling at the same speed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    number: u32,
    fall_ms: u32,
    words: Vec<String>,
}

impl Level {
    pub fn new<S: AsRef<str>>(number: u32, fall_ms: u32, words: &[S]) -> Self {
        Self {
            number,
            fall_ms,
            words: words.iter().map(|w| normalize_word(w.as_ref())).collect(),
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn fall_ms(&self) -> u32 {
        self.fall_ms
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}

/// Errors raised while loading a level file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid level file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("level file contains no levels")]
    NoLevels,
    #[error("level {level} has an empty word at position {index}")]
    EmptyWord { level: u32, index: usize },
    /// Longer than the text entry holds, or split by whitespace (space submits).
    #[error("level {level} word at position {index} cannot be typed")]
    Untypeable { level: u32, index: usize },
    #[error("level numbers must ascend, found {next} after {previous}")]
    OutOfOrder { previous: u32, next: u32 },
}

#[derive(Debug, Deserialize)]
struct LevelFile {
    levels: Vec<LevelEntry>,
}

#[derive(Debug, Deserialize)]
struct LevelEntry {
    number: u32,
    fall_ms: u32,
    words: Vec<String>,
}

/// Ordered, read-only list of levels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelCatalog {
    levels: Vec<Level>,
}

impl LevelCatalog {
    pub fn new(levels: Vec<Level>) -> Self {
        Self { levels }
    }

    /// The built-in five-level configuration.
    pub fn reference() -> Self {
        Self::new(
            REFERENCE_LEVELS
                .iter()
                .map(|&(number, fall_ms, words)| Level::new(number, fall_ms, words))
                .collect(),
        )
    }

    /// Load levels from JSON of the form
    /// `{"levels":[{"number":1,"fall_ms":8000,"words":["cat"]}]}`.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: LevelFile = serde_json::from_str(json)?;
        if file.levels.is_empty() {
            return Err(CatalogError::NoLevels);
        }

        let mut levels: Vec<Level> = Vec::with_capacity(file.levels.len());
        for entry in file.levels {
            if let Some(prev) = levels.last() {
                if entry.number <= prev.number {
                    return Err(CatalogError::OutOfOrder {
                        previous: prev.number,
                        next: entry.number,
                    });
                }
            }
            let level = Level::new(entry.number, entry.fall_ms, &entry.words[..]);
            if let Some(index) = level.words.iter().position(|w| w.is_empty()) {
                return Err(CatalogError::EmptyWord {
                    level: level.number,
                    index,
                });
            }
            if let Some(index) = level.words.iter().position(|w| !is_typeable(w)) {
                return Err(CatalogError::Untypeable {
                    level: level.number,
                    index,
                });
            }
            levels.push(level);
        }

        Ok(Self::new(levels))
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Number of words in a level (0 when the index is out of range).
    pub fn word_count(&self, level_index: usize) -> usize {
        self.levels.get(level_index).map_or(0, |l| l.words.len())
    }

    pub fn word_at(&self, level_index: usize, word_index: usize) -> Option<&str> {
        self.levels
            .get(level_index)?
            .words
            .get(word_index)
            .map(String::as_str)
    }

    pub fn fall_ms(&self, level_index: usize) -> Option<u32> {
        self.levels.get(level_index).map(|l| l.fall_ms)
    }

    pub fn level_number(&self, level_index: usize) -> Option<u32> {
        self.levels.get(level_index).map(|l| l.number)
    }

    pub fn total_words(&self) -> usize {
        self.levels.iter().map(|l| l.words.len()).sum()
    }
}

impl Default for LevelCatalog {
    fn default() -> Self {
        Self::reference()
    }
}
