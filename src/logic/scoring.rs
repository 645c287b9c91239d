//! Score entry: parsing raw input and keeping `completed` in sync.

use crate::models::{PadelMatch, Result, ScoreField, TournamentError};

/// Highest score the page accepts in one field.
pub const MAX_SCORE: u32 = 99;

/// Parse the text of a score field. Empty (or whitespace) clears the score.
pub fn parse_score_input(input: &str) -> Result<Option<u32>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<u32>() {
        Ok(v) if v <= MAX_SCORE => Ok(Some(v)),
        _ => Err(TournamentError::InvalidScore(input.to_string())),
    }
}

/// Reject a stored score above `MAX_SCORE`.
pub fn check_score(value: Option<u32>) -> Result<()> {
    match value {
        Some(v) if v > MAX_SCORE => Err(TournamentError::InvalidScore(v.to_string())),
        _ => Ok(()),
    }
}

/// Bring a client-supplied match in line: both scores in range, `completed`
/// derived from them, lineup of five distinct players.
pub fn normalize_match(m: &mut PadelMatch) -> Result<()> {
    check_score(m.score1)?;
    check_score(m.score2)?;
    m.check_lineup()?;
    recompute_completed(m);
    Ok(())
}

/// `completed` is true iff both scores are present.
pub fn recompute_completed(m: &mut PadelMatch) {
    m.completed = m.score1.is_some() && m.score2.is_some();
}

/// Set (or clear) one score and recompute `completed`.
pub fn set_score(m: &mut PadelMatch, field: ScoreField, value: Option<u32>) {
    match field {
        ScoreField::Score1 => m.score1 = value,
        ScoreField::Score2 => m.score2 = value,
    }
    recompute_completed(m);
}

/// Set both scores at once and recompute `completed`.
pub fn set_scores(m: &mut PadelMatch, score1: Option<u32>, score2: Option<u32>) {
    m.score1 = score1;
    m.score2 = score2;
    recompute_completed(m);
}
