//! A scheduled padel match (2v2 with one player resting) and its outcome.

use crate::models::player::Player;
use crate::models::tournament::{Result, TournamentError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Match ids look like `cycle-2-round-7`.
pub type MatchId = String;

/// Build the id for a round of a cycle. Unique per (cycle, round).
pub fn match_id(cycle: u32, round: u32) -> MatchId {
    format!("cycle-{}-round-{}", cycle, round)
}

/// Which of the two score columns to write.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreField {
    Score1,
    Score2,
}

/// Result of a completed match.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    TeamOne,
    TeamTwo,
    Draw,
}

/// One round of one cycle, in the flat shape the `matches` table and the
/// JSON API both use.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PadelMatch {
    pub id: MatchId,
    pub cycle: u32,
    /// 1..=15 within the cycle.
    pub round: u32,
    /// Strictly increasing across every match ever created.
    pub global_round: u32,
    pub team1_player1: Player,
    pub team1_player2: Player,
    pub team2_player1: Player,
    pub team2_player2: Player,
    pub resting_player: Player,
    /// None until entered.
    pub score1: Option<u32>,
    pub score2: Option<u32>,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl PadelMatch {
    pub fn team1(&self) -> [Player; 2] {
        [self.team1_player1, self.team1_player2]
    }

    pub fn team2(&self) -> [Player; 2] {
        [self.team2_player1, self.team2_player2]
    }

    /// Check that the two teams and the resting player are five distinct players.
    pub fn check_lineup(&self) -> Result<()> {
        let lineup = [
            self.team1_player1,
            self.team1_player2,
            self.team2_player1,
            self.team2_player2,
            self.resting_player,
        ];
        for (i, p) in lineup.iter().enumerate() {
            if lineup[..i].contains(p) {
                return Err(TournamentError::InvalidMatch {
                    id: self.id.clone(),
                    reason: format!("{} appears more than once", p),
                });
            }
        }
        Ok(())
    }

    /// Both scores, when both have been entered.
    pub fn scores(&self) -> Option<(u32, u32)> {
        self.score1.zip(self.score2)
    }

    /// None while incomplete; equal scores are a draw.
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.completed {
            return None;
        }
        let (s1, s2) = self.scores()?;
        Some(match s1.cmp(&s2) {
            std::cmp::Ordering::Greater => Outcome::TeamOne,
            std::cmp::Ordering::Less => Outcome::TeamTwo,
            std::cmp::Ordering::Equal => Outcome::Draw,
        })
    }
}
