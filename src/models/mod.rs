//! Data structures for the padel tournament: players, matches, config.

mod game;
mod player;
mod tournament;

pub use game::{match_id, MatchId, Outcome, PadelMatch, ScoreField};
pub use player::{LeaderEntry, Player, PlayerStats, UnknownPlayer, WinRate};
pub use tournament::{
    CycleGroup, MatchList, Overview, Result, TournamentConfig, TournamentError,
};
