//! Tournament business logic: schedule, score entry, standings, grouping.

mod cycles;
mod schedule;
mod scoring;
mod standings;

pub use cycles::group_by_cycle;
pub use schedule::{
    last_global_round, matches_for_cycle, ScheduledRound, ROUNDS_PER_CYCLE, SCHEDULE,
};
pub use scoring::{
    check_score, normalize_match, parse_score_input, recompute_completed, set_score, set_scores,
    MAX_SCORE,
};
pub use standings::{calculate_stats, leaderboard, leaderboard_csv};
