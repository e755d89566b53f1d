//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the battle core, content loading, pacing input and
//! the event log so clients can bubble them up with consistent context.
use std::io;
use std::path::PathBuf;

use arena_core::{BattleError, MatchupError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Battle(#[from] BattleError),

    #[error(transparent)]
    Matchup(#[from] MatchupError),

    #[error("failed to load arena content: {0:#}")]
    Content(anyhow::Error),

    #[error("failed to read pacing input")]
    Pacer(#[source] io::Error),

    #[error("event log {0} already exists")]
    EventLogExists(PathBuf),

    #[error("event log I/O failed")]
    EventLog(#[source] io::Error),

    #[error("failed to serialize battle report")]
    Serialize(#[from] serde_json::Error),
}
