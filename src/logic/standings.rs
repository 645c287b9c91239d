//! Leaderboard: per-player stats aggregated from completed matches.

use crate::models::{LeaderEntry, Outcome, PadelMatch, Player, PlayerStats, Result};
use std::collections::HashMap;

/// Aggregate stats for every roster player.
///
/// Only completed matches count. Input order does not matter.
pub fn calculate_stats(matches: &[PadelMatch]) -> HashMap<Player, PlayerStats> {
    let mut stats: HashMap<Player, PlayerStats> = Player::ALL
        .iter()
        .map(|&p| (p, PlayerStats::default()))
        .collect();

    for m in matches {
        let (Some(outcome), Some((s1, s2))) = (m.outcome(), m.scores()) else {
            continue;
        };
        let team1_won = outcome == Outcome::TeamOne;
        let team2_won = outcome == Outcome::TeamTwo;
        for p in m.team1() {
            stats.entry(p).or_default().record(s1, s2, team1_won, team2_won);
        }
        for p in m.team2() {
            stats.entry(p).or_default().record(s2, s1, team2_won, team1_won);
        }
    }

    for s in stats.values_mut() {
        s.finish();
    }
    stats
}

/// Ranked leaderboard: wins descending, then goal difference descending.
/// Remaining ties keep roster order.
pub fn leaderboard(matches: &[PadelMatch]) -> Vec<LeaderEntry> {
    let mut stats = calculate_stats(matches);
    let mut entries: Vec<LeaderEntry> = Player::ALL
        .iter()
        .map(|&name| {
            let stats = stats.remove(&name).unwrap_or_default();
            LeaderEntry {
                name,
                win_rate: stats.win_rate(),
                stats,
            }
        })
        .collect();
    entries.sort_by(|a, b| {
        b.stats
            .won
            .cmp(&a.stats.won)
            .then(b.stats.goal_diff.cmp(&a.stats.goal_diff))
    });
    entries
}

#[derive(serde::Serialize)]
struct CsvRow<'a> {
    rank: usize,
    player: &'a str,
    played: u32,
    won: u32,
    lost: u32,
    goals_for: u32,
    goals_against: u32,
    goal_diff: i64,
    win_rate: String,
}

/// Render a leaderboard as CSV with a header row.
pub fn leaderboard_csv(entries: &[LeaderEntry]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for (i, e) in entries.iter().enumerate() {
        writer.serialize(CsvRow {
            rank: i + 1,
            player: e.name.name(),
            played: e.stats.played,
            won: e.stats.won,
            lost: e.stats.lost,
            goals_for: e.stats.goals_for,
            goals_against: e.stats.goals_against,
            goal_diff: e.stats.goal_diff,
            win_rate: e.win_rate.to_string(),
        })?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
