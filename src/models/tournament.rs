//! Tournament-wide records: the config singleton, page views, and errors.

use crate::models::game::{MatchId, PadelMatch};
use crate::models::player::LeaderEntry;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur during tournament operations.
#[derive(Debug, Error)]
pub enum TournamentError {
    #[error("Match not found: {0}")]
    MatchNotFound(MatchId),

    #[error("Invalid score: {0:?}")]
    InvalidScore(String),

    #[error("Invalid match {id}: {reason}")]
    InvalidMatch { id: MatchId, reason: String },

    #[error("Numbering exhausted: {0}")]
    NumberingOverflow(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TournamentError>;

/// Singleton row (id = 1) holding how many cycles have been created.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TournamentConfig {
    pub id: u32,
    pub cycles: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            id: 1,
            cycles: 1,
            updated_at: None,
        }
    }
}

/// Body of `GET /api/matches`.
#[derive(Clone, Debug, Serialize)]
pub struct MatchList {
    pub matches: Vec<PadelMatch>,
    pub cycles: u32,
}

/// The matches of one cycle, as shown on the page.
#[derive(Clone, Debug, Serialize)]
pub struct CycleGroup {
    pub cycle: u32,
    pub completed: usize,
    pub total: usize,
    pub matches: Vec<PadelMatch>,
}

/// Everything the page needs in one response.
#[derive(Clone, Debug, Serialize)]
pub struct Overview {
    pub cycles: u32,
    pub total_rounds: usize,
    pub groups: Vec<CycleGroup>,
    pub leaderboard: Vec<LeaderEntry>,
}
