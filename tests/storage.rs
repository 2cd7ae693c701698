//! Integration tests for the persistence contract.

use bracket_vote_web::{apply_choice, build_game, current_match, GameStore, Item, MemoryStore};

fn items(n: usize) -> Vec<Item> {
    (0..n).map(|i| Item::new(format!("Item {i}"), None)).collect()
}

#[test]
fn save_and_restore_round_trip() {
    let store = MemoryStore::new();
    let state = build_game("test", items(4), 4).unwrap();
    store.save("session-1", &state).unwrap();

    let restored = store.restore("session-1").unwrap().unwrap();
    assert_eq!(restored, state);
    assert!(store.restore("session-2").unwrap().is_none());
}

#[test]
fn latest_save_wins() {
    let store = MemoryStore::new();
    let mut state = build_game("test", items(4), 4).unwrap();
    store.save("session-1", &state).unwrap();

    let m = current_match(&state.tournament).unwrap();
    let (match_id, winner_id) = (m.id, m.item_a.id);
    apply_choice(&mut state, match_id, winner_id).unwrap();
    store.save("session-1", &state).unwrap();

    let restored = store.restore("session-1").unwrap().unwrap();
    assert_eq!(restored, state);
    assert_eq!(restored.history.len(), 1);
    assert!(restored.can_undo);
}
