//! The fixed 15-round rotation for five players.
//!
//! Within one cycle every pair of players partners up three times and every
//! player rests three times. The table is reused as-is
//! for every cycle; only ids and global round numbers change.

use crate::models::{match_id, PadelMatch, Player};

use Player::{Diogo, Gonza, Ivo, Paulo, Pedro};

/// Rounds per cycle.
pub const ROUNDS_PER_CYCLE: u32 = 15;

/// One row of the rotation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScheduledRound {
    pub round: u32,
    pub team1: [Player; 2],
    pub team2: [Player; 2],
    pub resting: Player,
}

const fn r(round: u32, team1: [Player; 2], team2: [Player; 2], resting: Player) -> ScheduledRound {
    ScheduledRound {
        round,
        team1,
        team2,
        resting,
    }
}

pub const SCHEDULE: [ScheduledRound; ROUNDS_PER_CYCLE as usize] = [
    r(1, [Pedro, Paulo], [Ivo, Diogo], Gonza),
    r(2, [Gonza, Paulo], [Ivo, Diogo], Pedro),
    r(3, [Gonza, Pedro], [Ivo, Diogo], Paulo),
    r(4, [Gonza, Pedro], [Paulo, Diogo], Ivo),
    r(5, [Gonza, Pedro], [Paulo, Ivo], Diogo),
    r(6, [Pedro, Ivo], [Paulo, Diogo], Gonza),
    r(7, [Gonza, Ivo], [Paulo, Diogo], Pedro),
    r(8, [Gonza, Ivo], [Pedro, Diogo], Paulo),
    r(9, [Gonza, Paulo], [Pedro, Diogo], Ivo),
    r(10, [Gonza, Paulo], [Pedro, Ivo], Diogo),
    r(11, [Pedro, Diogo], [Paulo, Ivo], Gonza),
    r(12, [Gonza, Diogo], [Paulo, Ivo], Pedro),
    r(13, [Gonza, Diogo], [Pedro, Ivo], Paulo),
    r(14, [Gonza, Diogo], [Pedro, Paulo], Ivo),
    r(15, [Gonza, Ivo], [Pedro, Paulo], Diogo),
];

/// Build the 15 unplayed matches of `cycle`, numbering global rounds from
/// `start_global_round`.
///
/// Ids are derived from cycle and round, so building the same cycle twice
/// yields colliding ids; callers must only move forward. Global rounds
/// saturate at `u32::MAX`; use [`last_global_round`] to check for room first.
pub fn matches_for_cycle(cycle: u32, start_global_round: u32) -> Vec<PadelMatch> {
    SCHEDULE
        .iter()
        .zip(0..ROUNDS_PER_CYCLE)
        .map(|(s, offset)| PadelMatch {
            id: match_id(cycle, s.round),
            cycle,
            round: s.round,
            global_round: start_global_round.saturating_add(offset),
            team1_player1: s.team1[0],
            team1_player2: s.team1[1],
            team2_player1: s.team2[0],
            team2_player2: s.team2[1],
            resting_player: s.resting,
            score1: None,
            score2: None,
            completed: false,
            updated_at: None,
        })
        .collect()
}

/// Global round of the last match of a cycle starting at `start_global_round`,
/// or None if it does not fit in a `u32`.
pub fn last_global_round(start_global_round: u32) -> Option<u32> {
    start_global_round.checked_add(ROUNDS_PER_CYCLE - 1)
}
