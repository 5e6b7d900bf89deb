//! Startup configuration read from environment variables.
//!
//! - `TYPEFALL_SEED`: word placement seed (default: derived from the clock)
//! - `TYPEFALL_LEVELS`: path to a JSON level file (default: built-in levels)
//! - `TYPEFALL_TTS`: narrator command line, e.g. `espeak -s 160` (default: silent)
//! - `TYPEFALL_LOG_PATH`: file receiving log output (default: no logging)

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

use crate::core::LevelCatalog;

pub const ENV_SEED: &str = "TYPEFALL_SEED";
pub const ENV_LEVELS: &str = "TYPEFALL_LEVELS";
pub const ENV_TTS: &str = "TYPEFALL_TTS";
pub const ENV_LOG_PATH: &str = "TYPEFALL_LOG_PATH";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: Option<u64>,
    pub levels_path: Option<PathBuf>,
    /// Program followed by its arguments; the word is appended as the last one.
    pub tts_command: Option<Vec<String>>,
    pub log_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = get(ENV_SEED).and_then(|s| s.parse().ok());
        let levels_path = get(ENV_LEVELS).map(PathBuf::from);
        let tts_command = get(ENV_TTS)
            .map(|s| s.split_whitespace().map(str::to_string).collect::<Vec<_>>());
        let log_path = get(ENV_LOG_PATH).map(PathBuf::from);

        Self {
            seed,
            levels_path,
            tts_command,
            log_path,
        }
    }

    pub fn seed_or_clock(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }

    /// The configured level file, or the built-in levels.
    pub fn load_catalog(&self) -> Result<LevelCatalog> {
        let Some(path) = self.levels_path.as_ref() else {
            return Ok(LevelCatalog::reference());
        };
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read level file {}", path.display()))?;
        let catalog = LevelCatalog::from_json(&json)
            .with_context(|| format!("load level file {}", path.display()))?;
        log::info!(
            "loaded {} levels ({} words) from {}",
            catalog.level_count(),
            catalog.total_words(),
            path.display()
        );
        Ok(catalog)
    }
}
