//! Read-only progress queries: current match, round names, completion.

use crate::models::{GameMatch, Tournament};

/// Labels for the last rounds, keyed by rounds remaining after the current
/// one. Swapping languages or naming schemes means swapping this table.
const ROUND_LABELS: &[(u32, &str)] = &[(0, "Final"), (1, "Semifinal"), (2, "Quarterfinal")];

/// The match waiting for a decision, or None once the tournament is over.
/// Bye pairings complete at creation and the cursor skips them, so the result
/// never contains a bye.
pub fn current_match(tournament: &Tournament) -> Option<&GameMatch> {
    if tournament.is_completed {
        return None;
    }
    tournament
        .matches_in_round(tournament.current_round)
        .find(|m| m.match_number == tournament.current_match_index)
}

/// Human-readable name for a round: "Final", "Semifinal", "Quarterfinal",
/// then "Round of N" by field size.
pub fn round_name(current_round: u32, total_rounds: u32) -> String {
    let remaining = total_rounds.saturating_sub(current_round);
    match ROUND_LABELS.iter().find(|(r, _)| *r == remaining) {
        Some((_, label)) => (*label).to_string(),
        None => format!("Round of {}", 1u64 << (remaining + 1)),
    }
}

/// Fraction of the bracket decided so far, in [0, 1]. Pre-resolved byes count
/// as decided, so a padded bracket starts above zero. The denominator is the
/// total number of matches a bracket of this size ever plays.
pub fn tournament_progress(tournament: &Tournament) -> f64 {
    let total = tournament.bracket_size().saturating_sub(1);
    if total == 0 {
        return 1.0;
    }
    tournament.completed_match_count() as f64 / total as f64
}
