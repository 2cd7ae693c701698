//! Round advancement: winners of a finished round become the next round.

use crate::models::{GameMatch, Item, Tournament};

/// Materialize the round after `current_round`, whose matches must all be
/// completed. Winners pair adjacently in match_number order, exactly like the
/// round-1 seeding. Rounds that resolve entirely at creation (all byes)
/// cascade, so this either leaves the cursor on a decidable match or
/// completes the tournament with the single surviving item.
///
/// The bracket size is a power of two and byes never get injected past round
/// 1, so winner counts halve cleanly every step.
pub(crate) fn advance_round(tournament: &mut Tournament) {
    loop {
        let winners: Vec<Item> = tournament
            .matches_in_round(tournament.current_round)
            .filter_map(|m| m.winner.clone())
            .collect();
        debug_assert!(
            tournament
                .matches_in_round(tournament.current_round)
                .all(|m| m.is_completed),
            "advance_round called with undecided matches in round {}",
            tournament.current_round
        );

        if winners.len() == 1 {
            tournament.winner = winners.into_iter().next();
            tournament.is_completed = true;
            tournament.current_round += 1;
            return;
        }

        tournament.current_round += 1;
        let next_round = tournament.current_round;
        let next_matches: Vec<GameMatch> = winners
            .chunks_exact(2)
            .enumerate()
            .map(|(i, pair)| {
                GameMatch::new(next_round, (i + 1) as u32, pair[0].clone(), pair[1].clone())
            })
            .collect();

        let first_open = next_matches
            .iter()
            .find(|m| !m.is_completed)
            .map(|m| m.match_number);
        tournament.matches.extend(next_matches);

        match first_open {
            Some(number) => {
                tournament.current_match_index = number;
                return;
            }
            // Every pairing had a bye; keep advancing.
            None => continue,
        }
    }
}
