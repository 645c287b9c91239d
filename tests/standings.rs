//! Integration tests for the leaderboard: aggregation, ranking, win rate.

use padel_tournament_web::{
    calculate_stats, leaderboard, leaderboard_csv, matches_for_cycle, set_scores, Outcome,
    PadelMatch, Player, WinRate,
};

fn cycle_with_scores(scores: &[(usize, u32, u32)]) -> Vec<PadelMatch> {
    let mut matches = matches_for_cycle(1, 1);
    for &(idx, s1, s2) in scores {
        set_scores(&mut matches[idx], Some(s1), Some(s2));
    }
    matches
}

#[test]
fn first_round_result_credits_both_teams() {
    let matches = cycle_with_scores(&[(0, 6, 2)]);
    let stats = calculate_stats(&matches);

    for p in [Player::Pedro, Player::Paulo] {
        let s = &stats[&p];
        assert_eq!((s.played, s.won, s.lost), (1, 1, 0));
        assert_eq!((s.goals_for, s.goals_against, s.goal_diff), (6, 2, 4));
    }
    for p in [Player::Ivo, Player::Diogo] {
        let s = &stats[&p];
        assert_eq!((s.played, s.won, s.lost), (1, 0, 1));
        assert_eq!((s.goals_for, s.goals_against, s.goal_diff), (2, 6, -4));
    }
    assert_eq!(stats[&Player::Gonza].played, 0);
}

#[test]
fn draw_counts_games_but_no_result() {
    let matches = cycle_with_scores(&[(0, 6, 6)]);
    assert_eq!(matches[0].outcome(), Some(Outcome::Draw));
    let stats = calculate_stats(&matches);
    for p in [Player::Pedro, Player::Paulo, Player::Ivo, Player::Diogo] {
        let s = &stats[&p];
        assert_eq!(s.played, 1);
        assert_eq!(s.won, 0);
        assert_eq!(s.lost, 0);
        assert_eq!(s.goals_for, 6);
        assert_eq!(s.goals_against, 6);
    }
}

#[test]
fn incomplete_matches_are_ignored() {
    let mut matches = matches_for_cycle(1, 1);
    matches[0].score1 = Some(6);
    let stats = calculate_stats(&matches);
    assert!(stats.values().all(|s| s.played == 0 && s.goals_for == 0));
}

#[test]
fn aggregation_is_order_independent() {
    let matches = cycle_with_scores(&[(0, 6, 2), (1, 3, 6), (4, 7, 5), (9, 4, 4), (14, 6, 1)]);
    let mut reversed = matches.clone();
    reversed.reverse();
    let mut rotated = matches.clone();
    rotated.rotate_left(7);

    assert_eq!(calculate_stats(&matches), calculate_stats(&reversed));
    assert_eq!(calculate_stats(&matches), calculate_stats(&rotated));
    assert_eq!(leaderboard(&matches), leaderboard(&reversed));
}

#[test]
fn ranking_uses_wins_then_goal_difference() {
    // Round 1: Pedro & Paulo beat Ivo & Diogo 6-0.
    // Round 2: Gonza & Paulo beat Ivo & Diogo 6-5.
    let board = leaderboard(&cycle_with_scores(&[(0, 6, 0), (1, 6, 5)]));
    let names: Vec<Player> = board.iter().map(|e| e.name).collect();
    // Paulo 2 wins; Pedro 1 win +6; Gonza 1 win +1; Ivo and Diogo tie, roster order.
    assert_eq!(
        names,
        vec![Player::Paulo, Player::Pedro, Player::Gonza, Player::Ivo, Player::Diogo]
    );
}

#[test]
fn untouched_roster_keeps_roster_order() {
    let board = leaderboard(&matches_for_cycle(1, 1));
    let names: Vec<Player> = board.iter().map(|e| e.name).collect();
    assert_eq!(names, Player::ALL.to_vec());
}

#[test]
fn win_rate_is_zero_number_when_unplayed() {
    let board = leaderboard(&cycle_with_scores(&[(0, 6, 2), (1, 1, 6), (2, 6, 3)]));
    let gonza = board.iter().find(|e| e.name == Player::Gonza).unwrap();
    // Gonza: lost round 2, won round 3.
    assert_eq!(gonza.win_rate, WinRate::Percent(50.0));
    assert_eq!(serde_json::to_value(gonza.win_rate).unwrap(), serde_json::json!("50.0"));

    let fresh = leaderboard(&[]);
    assert_eq!(fresh[0].win_rate, WinRate::Unplayed);
    assert_eq!(serde_json::to_value(fresh[0].win_rate).unwrap(), serde_json::json!(0));
}

#[test]
fn win_rate_rounds_to_one_decimal() {
    // Ivo & Diogo: lose round 1, win rounds 2 and 3.
    let board = leaderboard(&cycle_with_scores(&[(0, 6, 2), (1, 1, 6), (2, 2, 6)]));
    let ivo = board.iter().find(|e| e.name == Player::Ivo).unwrap();
    assert_eq!(ivo.win_rate.to_string(), "66.7");
}

#[test]
fn csv_export_has_header_and_one_row_per_player() {
    let board = leaderboard(&cycle_with_scores(&[(0, 6, 2)]));
    let csv = leaderboard_csv(&board).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(
        lines[0],
        "rank,player,played,won,lost,goals_for,goals_against,goal_diff,win_rate"
    );
    assert_eq!(lines[1], "1,Pedro,1,1,0,6,2,4,100.0");
    assert!(lines.contains(&"3,Gonza,0,0,0,0,0,0,0"));
}
