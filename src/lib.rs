//! Padel tournament web app: five players, a fixed 15-round rotation, a
//! SQLite-backed match store and a leaderboard derived from entered scores.

pub mod api;
pub mod config;
pub mod logic;
pub mod models;
pub mod service;
pub mod store;

pub use config::ServerConfig;
pub use logic::{
    calculate_stats, check_score, group_by_cycle, last_global_round, leaderboard, leaderboard_csv,
    matches_for_cycle, normalize_match, parse_score_input, recompute_completed, set_score,
    set_scores, ScheduledRound, ROUNDS_PER_CYCLE, SCHEDULE,
};
pub use models::{
    match_id, CycleGroup, LeaderEntry, MatchId, MatchList, Outcome, Overview, PadelMatch, Player,
    PlayerStats, ScoreField, TournamentConfig, TournamentError, WinRate,
};
pub use service::TournamentService;
pub use store::Database;
