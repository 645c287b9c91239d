//! Tournament service: applies the schedule, records scores, resets.
//!
//! Every operation goes straight to the [`Database`]; nothing is cached, so
//! the store is always the source of truth.

use crate::logic::{
    check_score, group_by_cycle, last_global_round, leaderboard, matches_for_cycle,
    normalize_match, recompute_completed, set_score,
};
use crate::models::{
    LeaderEntry, MatchList, Overview, PadelMatch, Result, ScoreField, TournamentError,
};
use crate::store::Database;

pub struct TournamentService {
    db: Database,
}

impl TournamentService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Create the 15 matches of `cycle` and record `cycle` as the cycle count.
    pub fn add_cycle(&self, cycle: u32, start_global_round: u32) -> Result<Vec<PadelMatch>> {
        let last = last_global_round(start_global_round)
            .ok_or(TournamentError::NumberingOverflow("global round"))?;
        let matches = matches_for_cycle(cycle, start_global_round);
        self.db.insert_matches(&matches)?;
        self.db.set_cycles(cycle)?;
        log::info!(
            "Added cycle {} (global rounds {}..={})",
            cycle,
            start_global_round,
            last
        );
        Ok(matches)
    }

    /// Add the cycle after the highest one stored, continuing global rounds.
    pub fn add_next_cycle(&self) -> Result<Vec<PadelMatch>> {
        let cycle = match self.db.max_cycle()? {
            Some(c) => c
                .checked_add(1)
                .ok_or(TournamentError::NumberingOverflow("cycle"))?,
            None => 1,
        };
        let start = match self.db.max_global_round()? {
            Some(g) => g
                .checked_add(1)
                .ok_or(TournamentError::NumberingOverflow("global round"))?,
            None => 1,
        };
        self.add_cycle(cycle, start)
    }

    /// Store a client-built batch of matches (the `add_cycle` API action).
    ///
    /// Every match is checked before any row is written: scores in range and
    /// five distinct players. `completed` is recomputed from the scores.
    pub fn insert_cycle(&self, mut matches: Vec<PadelMatch>, cycles: u32) -> Result<()> {
        for m in &mut matches {
            normalize_match(m)?;
        }
        self.db.insert_matches(&matches)?;
        self.db.set_cycles(cycles)?;
        log::info!("Inserted {} matches, cycles now {}", matches.len(), cycles);
        Ok(())
    }

    /// Set or clear one score of a stored match.
    pub fn update_score(
        &self,
        match_id: &str,
        field: ScoreField,
        value: Option<u32>,
    ) -> Result<PadelMatch> {
        let mut m = self
            .db
            .get_match(match_id)?
            .ok_or_else(|| TournamentError::MatchNotFound(match_id.to_string()))?;
        set_score(&mut m, field, value);
        log::debug!("{}: {:?} -> {:?} (completed={})", match_id, field, value, m.completed);
        self.db.update_match(&m)
    }

    /// Persist both scores of a client-supplied match. `completed` is
    /// recomputed here rather than trusted.
    pub fn save_scores(&self, mut m: PadelMatch) -> Result<PadelMatch> {
        check_score(m.score1)?;
        check_score(m.score2)?;
        recompute_completed(&mut m);
        log::debug!("{}: scores {:?}/{:?}", m.id, m.score1, m.score2);
        self.db.update_match(&m)
    }

    /// Delete all matches and set cycles to 1, without re-seeding.
    pub fn clear(&self) -> Result<()> {
        self.db.reset()?;
        log::info!("Tournament cleared");
        Ok(())
    }

    /// Delete everything, then seed cycle 1 again.
    pub fn reset(&self) -> Result<Vec<PadelMatch>> {
        self.clear()?;
        self.add_cycle(1, 1)
    }

    /// Seed cycle 1 if the store holds no matches.
    pub fn ensure_seeded(&self) -> Result<()> {
        if self.db.match_count()? == 0 {
            self.add_cycle(1, 1)?;
        }
        Ok(())
    }

    /// All stored matches and the cycle count.
    pub fn match_list(&self) -> Result<MatchList> {
        Ok(MatchList {
            matches: self.db.all_matches()?,
            cycles: self.db.config()?.cycles,
        })
    }

    pub fn leaderboard(&self) -> Result<Vec<LeaderEntry>> {
        Ok(leaderboard(&self.db.all_matches()?))
    }

    /// Grouped matches and leaderboard for the page. Seeds cycle 1 on first use.
    pub fn overview(&self) -> Result<Overview> {
        self.ensure_seeded()?;
        let matches = self.db.all_matches()?;
        Ok(Overview {
            cycles: self.db.config()?.cycles,
            total_rounds: matches.len(),
            leaderboard: leaderboard(&matches),
            groups: group_by_cycle(&matches),
        })
    }
}
