//! Integration tests for progress reporting: round names, fractions, current match.

use bracket_vote_web::{
    apply_choice, build_game, current_match, round_name, tournament_progress, Item,
};

fn items(n: usize) -> Vec<Item> {
    (0..n).map(|i| Item::new(format!("Item {i}"), None)).collect()
}

#[test]
fn final_rounds_have_names() {
    assert_eq!(round_name(2, 2), "Final");
    assert_eq!(round_name(1, 2), "Semifinal");
    assert_eq!(round_name(1, 3), "Quarterfinal");
    assert_eq!(round_name(3, 3), "Final");
}

#[test]
fn early_rounds_are_named_by_field_size() {
    assert_eq!(round_name(1, 4), "Round of 16");
    assert_eq!(round_name(2, 5), "Round of 16");
    assert_eq!(round_name(1, 10), "Round of 1024");
    assert_eq!(round_name(2, 10), "Round of 512");
}

#[test]
fn current_match_tracks_the_cursor() {
    let mut state = build_game("test", items(4), 4).unwrap();
    let m = current_match(&state.tournament).unwrap();
    assert_eq!((m.round, m.match_number), (1, 1));

    let (match_id, winner_id) = (m.id, m.item_a.id);
    apply_choice(&mut state, match_id, winner_id).unwrap();
    let m = current_match(&state.tournament).unwrap();
    assert_eq!((m.round, m.match_number), (1, 2));
}

#[test]
fn padded_bracket_starts_with_partial_progress() {
    // 3 items in a 4 bracket: the bye match is already decided.
    let mut state = build_game("test", items(3), 4).unwrap();
    let p0 = tournament_progress(&state.tournament);
    assert!((p0 - 1.0 / 3.0).abs() < 1e-12);

    let m = current_match(&state.tournament).unwrap();
    let (match_id, winner_id) = (m.id, m.item_a.id);
    apply_choice(&mut state, match_id, winner_id).unwrap();
    let p1 = tournament_progress(&state.tournament);
    assert!((p1 - 2.0 / 3.0).abs() < 1e-12);

    let m = current_match(&state.tournament).unwrap();
    let (match_id, winner_id) = (m.id, m.item_a.id);
    apply_choice(&mut state, match_id, winner_id).unwrap();
    assert_eq!(tournament_progress(&state.tournament), 1.0);
    assert!(current_match(&state.tournament).is_none());
}

#[test]
fn full_bracket_starts_at_zero() {
    let state = build_game("test", items(8), 8).unwrap();
    assert_eq!(tournament_progress(&state.tournament), 0.0);
}
