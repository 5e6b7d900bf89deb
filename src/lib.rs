//! Typefall (workspace facade crate).
//!
//! Re-exports the workspace crates as `typefall::{core,input,term,types}` and
//! holds the pieces the terminal binary wires together: startup
//! configuration, logging, narration and the play session.

pub use typefall_core as core;
pub use typefall_input as input;
pub use typefall_term as term;
pub use typefall_types as types;

pub mod config;
pub mod logging;
pub mod narrator;
pub mod session;

pub use config::AppConfig;
pub use narrator::{CommandNarrator, Narrator, Silent};
pub use session::Session;
