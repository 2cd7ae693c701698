//! Integration tests for bracket building: seeding, byes, validation.

use bracket_vote_web::{build_game, current_match, GameError, Item, BRACKET_SIZES};

fn items(n: usize) -> Vec<Item> {
    (0..n).map(|i| Item::new(format!("Item {i}"), None)).collect()
}

#[test]
fn full_bracket_has_expected_rounds_and_matches() {
    for &size in BRACKET_SIZES {
        let state = build_game("test", items(size), size).unwrap();
        let t = &state.tournament;
        assert_eq!(t.total_rounds, size.trailing_zeros());
        assert_eq!(t.current_round, 1);
        assert_eq!(t.current_match_index, 1);
        assert_eq!(t.matches.len(), size / 2);
        assert_eq!(t.items.len(), size);
        assert!(t.matches.iter().all(|m| !m.has_bye() && !m.is_completed));
    }
}

#[test]
fn rejects_unsupported_bracket_sizes() {
    for size in [0, 1, 2, 3, 6, 100, 2048] {
        assert!(matches!(
            build_game("test", items(4), size),
            Err(GameError::InvalidBracketSize(s)) if s == size
        ));
    }
}

#[test]
fn rejects_fewer_than_two_items() {
    assert!(matches!(
        build_game("test", items(0), 4),
        Err(GameError::InsufficientItems(0))
    ));
    assert!(matches!(
        build_game("test", items(1), 8),
        Err(GameError::InsufficientItems(1))
    ));
}

#[test]
fn surplus_items_are_truncated_in_input_order() {
    let state = build_game("test", items(10), 4).unwrap();
    let t = &state.tournament;
    assert_eq!(t.items.len(), 4);
    let titles: Vec<&str> = t.items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, ["Item 0", "Item 1", "Item 2", "Item 3"]);
    assert_eq!(t.matches.len(), 2);
    // The full input list is still captured for restart.
    assert_eq!(state.original_items.len(), 10);
}

#[test]
fn seeding_pairs_adjacent_items() {
    let state = build_game("test", items(8), 8).unwrap();
    for (i, m) in state.tournament.matches.iter().enumerate() {
        assert_eq!(m.round, 1);
        assert_eq!(m.match_number, (i + 1) as u32);
        assert_eq!(m.item_a.title, format!("Item {}", 2 * i));
        assert_eq!(m.item_b.title, format!("Item {}", 2 * i + 1));
    }
}

#[test]
fn byes_pair_with_real_items_and_auto_complete() {
    // 5 items in an 8 bracket: 3 byes, each against a real item.
    let state = build_game("test", items(5), 8).unwrap();
    let t = &state.tournament;
    let auto: Vec<_> = t.matches.iter().filter(|m| m.is_completed).collect();
    assert_eq!(auto.len(), 3);
    for m in &auto {
        assert!(m.has_bye());
        let winner = m.winner.as_ref().unwrap();
        assert!(!winner.is_bye);
    }
    let auto_winners: Vec<&str> = auto
        .iter()
        .map(|m| m.winner.as_ref().unwrap().title.as_str())
        .collect();
    assert_eq!(auto_winners, ["Item 2", "Item 3", "Item 4"]);
    // The one real pairing is the current match.
    let current = current_match(t).unwrap();
    assert_eq!(current.match_number, 1);
    assert_eq!(current.item_a.title, "Item 0");
    assert_eq!(current.item_b.title, "Item 1");
}

#[test]
fn three_items_in_a_four_bracket() {
    let named: Vec<Item> = ["A", "B", "C"].iter().map(|t| Item::new(*t, None)).collect();
    let state = build_game("test", named, 4).unwrap();
    let t = &state.tournament;
    assert_eq!(t.total_rounds, 2);
    let m1 = &t.matches[0];
    let m2 = &t.matches[1];
    assert!(!m1.is_completed);
    assert_eq!((m1.item_a.title.as_str(), m1.item_b.title.as_str()), ("A", "B"));
    // C won its bye without a choice being made.
    assert!(m2.is_completed);
    assert_eq!(m2.winner.as_ref().unwrap().title, "C");
    assert_eq!(t.current_match_index, 1);
}

#[test]
fn deep_padding_skips_fully_resolved_rounds() {
    // 2 items in an 8 bracket: round 1 is all byes and resolves at creation.
    let state = build_game("test", items(2), 8).unwrap();
    let t = &state.tournament;
    assert_eq!(t.current_round, 2);
    assert!(!t.is_completed);
    let current = current_match(t).unwrap();
    assert!(!current.has_bye());
    assert_eq!(current.item_a.title, "Item 0");
    assert_eq!(current.item_b.title, "Item 1");
}
