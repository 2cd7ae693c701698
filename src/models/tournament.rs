//! Tournament: the bracket itself, plus the error type for game operations.

use crate::models::game::{GameMatch, MatchId};
use crate::models::item::Item;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur during game operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GameError {
    /// Requested bracket size is not one of the supported power-of-two sizes.
    InvalidBracketSize(usize),
    /// Fewer than 2 items supplied.
    InsufficientItems(usize),
    /// The referenced match cannot be decided: unknown id, wrong round,
    /// out of order, already completed, or the winner is not in the match.
    InvalidChoice(MatchId),
    /// The tournament already has a winner; no further choices are accepted.
    TournamentAlreadyCompleted,
    /// Undo called with an empty history.
    NothingToUndo,
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::InvalidBracketSize(size) => {
                write!(f, "Bracket size {} is not supported", size)
            }
            GameError::InsufficientItems(count) => {
                write!(f, "Need at least 2 items to build a bracket (got {})", count)
            }
            GameError::InvalidChoice(_) => write!(f, "That match cannot be decided right now"),
            GameError::TournamentAlreadyCompleted => write!(f, "The tournament is already over"),
            GameError::NothingToUndo => write!(f, "Nothing to undo"),
        }
    }
}

impl std::error::Error for GameError {}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Full bracket state: the seeded field, the matches played so far, and the
/// cursor (`current_round`, `current_match_index`) pointing at the next
/// decision.
///
/// Matches accumulate round by round: only rounds up to `current_round` exist
/// at any time, and `is_completed` holds exactly when `current_round` has run
/// past `total_rounds`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub title: String,
    /// The seeded field, byes included; length is always the bracket size.
    pub items: Vec<Item>,
    pub total_rounds: u32,
    pub current_round: u32,
    /// 1-based number of the next undecided match within `current_round`.
    pub current_match_index: u32,
    /// All materialized matches, in (round, match_number) order.
    pub matches: Vec<GameMatch>,
    pub is_completed: bool,
    pub winner: Option<Item>,
}

impl Tournament {
    /// Number of slots in the bracket (always a power of two).
    pub fn bracket_size(&self) -> usize {
        self.items.len()
    }

    /// Look up a match by id.
    pub fn find_match(&self, match_id: MatchId) -> Option<&GameMatch> {
        self.matches.iter().find(|m| m.id == match_id)
    }

    pub(crate) fn find_match_mut(&mut self, match_id: MatchId) -> Option<&mut GameMatch> {
        self.matches.iter_mut().find(|m| m.id == match_id)
    }

    /// All matches of one round, in match_number order.
    pub fn matches_in_round(&self, round: u32) -> impl Iterator<Item = &GameMatch> {
        self.matches.iter().filter(move |m| m.round == round)
    }

    /// Count of decided matches across all materialized rounds.
    pub fn completed_match_count(&self) -> usize {
        self.matches.iter().filter(|m| m.is_completed).count()
    }
}
