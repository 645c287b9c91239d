//! Integration tests for the fixed rotation and score entry rules.

use padel_tournament_web::{
    last_global_round, matches_for_cycle, parse_score_input, set_score, Player, ScoreField,
    TournamentError, ROUNDS_PER_CYCLE, SCHEDULE,
};
use std::collections::HashSet;

#[test]
fn every_round_uses_all_five_players_once() {
    for m in matches_for_cycle(1, 1) {
        let mut seen = HashSet::new();
        for p in m.team1().into_iter().chain(m.team2()).chain([m.resting_player]) {
            assert!(seen.insert(p), "{} appears twice in {}", p, m.id);
        }
        assert_eq!(seen, Player::ALL.into_iter().collect::<HashSet<_>>());
        m.check_lineup().unwrap();
    }
}

#[test]
fn repeated_player_fails_lineup_check() {
    let mut m = matches_for_cycle(1, 1).remove(0);
    m.team2_player2 = Player::Pedro;
    assert!(matches!(
        m.check_lineup(),
        Err(TournamentError::InvalidMatch { id, .. }) if id == "cycle-1-round-1"
    ));
}

#[test]
fn global_rounds_saturate_at_the_top() {
    let matches = matches_for_cycle(9, u32::MAX - 2);
    assert_eq!(matches[2].global_round, u32::MAX);
    assert_eq!(matches[14].global_round, u32::MAX);
    assert_eq!(last_global_round(u32::MAX - 14), Some(u32::MAX));
    assert_eq!(last_global_round(u32::MAX - 13), None);
}

#[test]
fn cycle_has_fifteen_fresh_matches() {
    let matches = matches_for_cycle(1, 1);
    assert_eq!(matches.len(), ROUNDS_PER_CYCLE as usize);
    for (i, m) in matches.iter().enumerate() {
        assert_eq!(m.round, i as u32 + 1);
        assert_eq!(m.global_round, i as u32 + 1);
        assert_eq!(m.id, format!("cycle-1-round-{}", i + 1));
        assert_eq!(m.score1, None);
        assert_eq!(m.score2, None);
        assert!(!m.completed);
    }
}

#[test]
fn later_cycles_repeat_pairings_with_new_numbering() {
    let first = matches_for_cycle(1, 1);
    let third = matches_for_cycle(3, 31);
    for (a, b) in first.iter().zip(&third) {
        assert_eq!(a.team1(), b.team1());
        assert_eq!(a.team2(), b.team2());
        assert_eq!(a.resting_player, b.resting_player);
        assert_eq!(b.cycle, 3);
        assert_eq!(b.global_round, a.global_round + 30);
        assert_eq!(b.id, format!("cycle-3-round-{}", a.round));
    }
}

#[test]
fn each_player_rests_three_times() {
    for p in Player::ALL {
        assert_eq!(SCHEDULE.iter().filter(|r| r.resting == p).count(), 3);
    }
}

#[test]
fn completed_tracks_both_scores() {
    let mut m = matches_for_cycle(1, 1).remove(0);
    set_score(&mut m, ScoreField::Score1, Some(6));
    assert!(!m.completed);
    set_score(&mut m, ScoreField::Score2, Some(0));
    assert!(m.completed);
    set_score(&mut m, ScoreField::Score1, None);
    assert!(!m.completed);
    assert_eq!(m.score2, Some(0));
}

#[test]
fn score_input_parsing() {
    assert_eq!(parse_score_input("").unwrap(), None);
    assert_eq!(parse_score_input("  ").unwrap(), None);
    assert_eq!(parse_score_input("6").unwrap(), Some(6));
    assert_eq!(parse_score_input("0").unwrap(), Some(0));
    assert!(matches!(parse_score_input("-1"), Err(TournamentError::InvalidScore(_))));
    assert!(matches!(parse_score_input("100"), Err(TournamentError::InvalidScore(_))));
    assert!(matches!(parse_score_input("six"), Err(TournamentError::InvalidScore(_))));
}
