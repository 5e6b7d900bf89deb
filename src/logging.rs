//! Logging setup.
//!
//! The game owns the terminal, so log records never go to stderr. When a log
//! path is configured, `env_logger` appends to that file (filter from
//! `RUST_LOG`, default `info`); otherwise logging stays off.

use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};

pub fn init(log_path: Option<&Path>) -> Result<()> {
    let Some(path) = log_path else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("install logger")
}
