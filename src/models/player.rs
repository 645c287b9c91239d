//! The fixed roster and the per-player statistics derived from played matches.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// One of the five players in the rotation.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Player {
    Gonza,
    Pedro,
    Paulo,
    Ivo,
    Diogo,
}

impl Player {
    /// Roster order. Leaderboard ties keep this order.
    pub const ALL: [Player; 5] = [
        Player::Gonza,
        Player::Pedro,
        Player::Paulo,
        Player::Ivo,
        Player::Diogo,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Player::Gonza => "Gonza",
            Player::Pedro => "Pedro",
            Player::Paulo => "Paulo",
            Player::Ivo => "Ivo",
            Player::Diogo => "Diogo",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a stored or submitted name is not on the roster.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnknownPlayer(pub String);

impl fmt::Display for UnknownPlayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown player: {}", self.0)
    }
}

impl std::error::Error for UnknownPlayer {}

impl FromStr for Player {
    type Err = UnknownPlayer;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Player::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| UnknownPlayer(s.to_string()))
    }
}

/// Win percentage for the leaderboard.
///
/// Serializes as the number `0` when nothing has been played, otherwise as a
/// one-decimal string such as `"66.7"`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WinRate {
    Unplayed,
    Percent(f64),
}

impl WinRate {
    pub fn from_record(won: u32, played: u32) -> Self {
        if played == 0 {
            WinRate::Unplayed
        } else {
            WinRate::Percent(f64::from(won) / f64::from(played) * 100.0)
        }
    }
}

impl fmt::Display for WinRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WinRate::Unplayed => write!(f, "0"),
            WinRate::Percent(p) => write!(f, "{:.1}", p),
        }
    }
}

impl Serialize for WinRate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            WinRate::Unplayed => serializer.serialize_u32(0),
            WinRate::Percent(_) => serializer.collect_str(self),
        }
    }
}

/// Running totals for one player. Rebuilt from the match list on every request.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct PlayerStats {
    pub played: u32,
    pub won: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_diff: i64,
}

impl PlayerStats {
    /// Record one completed match from this player's side. A draw passes
    /// `won == lost == false`.
    pub fn record(&mut self, scored: u32, conceded: u32, won: bool, lost: bool) {
        self.played += 1;
        self.goals_for += scored;
        self.goals_against += conceded;
        if won {
            self.won += 1;
        } else if lost {
            self.lost += 1;
        }
    }

    pub fn finish(&mut self) {
        self.goal_diff = i64::from(self.goals_for) - i64::from(self.goals_against);
    }

    pub fn win_rate(&self) -> WinRate {
        WinRate::from_record(self.won, self.played)
    }
}

/// One leaderboard row.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LeaderEntry {
    pub name: Player,
    #[serde(flatten)]
    pub stats: PlayerStats,
    pub win_rate: WinRate,
}
