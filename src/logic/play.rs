//! Play operations: apply a choice, undo it, or restart the game.

use crate::logic::advance::advance_round;
use crate::logic::builder::seed_tournament;
use crate::models::{GameError, GameState, ItemId, MatchId};
use chrono::Utc;

/// Decide the current match in favor of `winner_id`.
///
/// The match must be the one the cursor points at (choices resolve in order
/// within a round) and the winner must be one of its two items. Everything is
/// validated before anything is written, so a failure leaves the state
/// exactly as it was. On success the pre-choice tournament goes onto the
/// history stack, the cursor moves to the next undecided match, and finishing
/// a round hands off to round advancement.
pub fn apply_choice(
    state: &mut GameState,
    match_id: MatchId,
    winner_id: ItemId,
) -> Result<(), GameError> {
    if state.tournament.is_completed {
        return Err(GameError::TournamentAlreadyCompleted);
    }

    let (winner, is_current) = {
        let m = state
            .tournament
            .find_match(match_id)
            .ok_or(GameError::InvalidChoice(match_id))?;
        let is_current = m.round == state.tournament.current_round
            && m.match_number == state.tournament.current_match_index
            && !m.is_completed;
        let winner = m
            .item(winner_id)
            .ok_or(GameError::InvalidChoice(match_id))?
            .clone();
        (winner, is_current)
    };
    if !is_current {
        return Err(GameError::InvalidChoice(match_id));
    }

    state.history.push(state.tournament.clone());

    if let Some(m) = state.tournament.find_match_mut(match_id) {
        m.winner = Some(winner);
        m.is_completed = true;
    }

    let next_open = state
        .tournament
        .matches_in_round(state.tournament.current_round)
        .find(|m| !m.is_completed)
        .map(|m| m.match_number);
    match next_open {
        Some(number) => state.tournament.current_match_index = number,
        None => advance_round(&mut state.tournament),
    }

    if state.tournament.is_completed {
        state.end_time = Some(Utc::now());
    }
    state.can_undo = true;
    Ok(())
}

/// Roll back the most recent choice, including any round advancement it
/// triggered. One undo step per `apply_choice` call.
pub fn undo(state: &mut GameState) -> Result<(), GameError> {
    let previous = state.history.pop().ok_or(GameError::NothingToUndo)?;
    state.tournament = previous;
    state.can_undo = !state.history.is_empty();
    if !state.tournament.is_completed {
        state.end_time = None;
    }
    Ok(())
}

/// Throw the bracket away and re-seed from the items captured at build time.
/// The inputs were validated when the game was built, so this cannot fail.
pub fn restart(state: &mut GameState) {
    let title = state.tournament.title.clone();
    state.tournament = seed_tournament(title, &state.original_items, state.bracket_size);
    state.history.clear();
    state.can_undo = false;
    state.start_time = Utc::now();
    state.end_time = None;
}
