//! Bracket building: turn an ordered item list into a seeded round 1.

use crate::logic::advance::advance_round;
use crate::models::{GameError, GameMatch, GameState, Item, Tournament};
use uuid::Uuid;

/// Bracket sizes the game offers.
pub const BRACKET_SIZES: &[usize] = &[4, 8, 16, 32, 64, 128, 256, 512, 1024];

/// Build a new game from an ordered item list and a requested bracket size.
///
/// The list may be longer than the bracket (the first `bracket_size` items are
/// used; any shuffling happens before this call) or shorter (byes pad the
/// field). Seeding is adjacent pairing in input order: slot 2i meets slot
/// 2i+1. Matches with a bye resolve at creation, so the returned game has
/// every bye already decided and the cursor on the first real pairing.
pub fn build_game(
    title: impl Into<String>,
    items: Vec<Item>,
    bracket_size: usize,
) -> Result<GameState, GameError> {
    validate(&items, bracket_size)?;
    let tournament = seed_tournament(title.into(), &items, bracket_size);
    Ok(GameState::from_parts(tournament, items, bracket_size))
}

fn validate(items: &[Item], bracket_size: usize) -> Result<(), GameError> {
    if !BRACKET_SIZES.contains(&bracket_size) {
        return Err(GameError::InvalidBracketSize(bracket_size));
    }
    if items.len() < 2 {
        return Err(GameError::InsufficientItems(items.len()));
    }
    Ok(())
}

/// Seed a fresh tournament from already-validated inputs. Infallible, so
/// restart can rebuild without re-validating.
pub(crate) fn seed_tournament(title: String, items: &[Item], bracket_size: usize) -> Tournament {
    let field = seed_field(items, bracket_size);

    let matches: Vec<GameMatch> = field
        .chunks_exact(2)
        .enumerate()
        .map(|(i, pair)| GameMatch::new(1, (i + 1) as u32, pair[0].clone(), pair[1].clone()))
        .collect();

    let first_open = matches
        .iter()
        .find(|m| !m.is_completed)
        .map(|m| m.match_number);

    let mut tournament = Tournament {
        id: Uuid::new_v4(),
        title,
        total_rounds: bracket_size.trailing_zeros(),
        current_round: 1,
        current_match_index: 1,
        matches,
        items: field,
        is_completed: false,
        winner: None,
    };

    match first_open {
        Some(number) => tournament.current_match_index = number,
        // Fewer items than half the bracket: round 1 was nothing but byes
        // against byes and solo items, so play starts in a later round.
        None => advance_round(&mut tournament),
    }
    tournament
}

/// Lay the items out over the bracket slots. A longer list is truncated to
/// the bracket size. A shorter one is padded: each bye slots in right after
/// one of the trailing items, so every bye resolves against a real item
/// (surplus byes beyond the item count pair with each other at the end).
/// Item order is preserved throughout.
fn seed_field(items: &[Item], bracket_size: usize) -> Vec<Item> {
    if items.len() >= bracket_size {
        return items[..bracket_size].to_vec();
    }
    let bye_count = bracket_size - items.len();
    // 2n - B items pair among themselves; the rest each get a bye.
    let paired = items.len().saturating_sub(bye_count);
    let mut field: Vec<Item> = items[..paired].to_vec();
    for item in &items[paired..] {
        field.push(item.clone());
        field.push(Item::bye());
    }
    while field.len() < bracket_size {
        field.push(Item::bye());
    }
    field
}
