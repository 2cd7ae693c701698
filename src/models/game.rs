//! Match data structure: one pairing inside a bracket round.

use crate::models::item::{Item, ItemId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// A single pairing: two items, at most one winner.
///
/// `match_number` is 1-based and unique within its round. A match built with
/// a bye on either side is completed immediately: the real item advances.
/// When both sides are byes (heavily padded field) side A advances and keeps
/// auto-losing against real opposition in later rounds.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    /// Round this match belongs to (1 = first round).
    pub round: u32,
    /// Position within the round, starting at 1.
    pub match_number: u32,
    pub item_a: Item,
    pub item_b: Item,
    /// None until decided.
    pub winner: Option<Item>,
    pub is_completed: bool,
}

impl GameMatch {
    pub fn new(round: u32, match_number: u32, item_a: Item, item_b: Item) -> Self {
        let winner = match (item_a.is_bye, item_b.is_bye) {
            (false, false) => None,
            (false, true) => Some(item_a.clone()),
            (true, false) => Some(item_b.clone()),
            (true, true) => Some(item_a.clone()),
        };
        Self {
            id: Uuid::new_v4(),
            round,
            match_number,
            item_a,
            item_b,
            is_completed: winner.is_some(),
            winner,
        }
    }

    /// True if `item_id` is one of the two items in this match.
    pub fn contains(&self, item_id: ItemId) -> bool {
        self.item_a.id == item_id || self.item_b.id == item_id
    }

    /// The item in this match with the given id, if any.
    pub fn item(&self, item_id: ItemId) -> Option<&Item> {
        if self.item_a.id == item_id {
            Some(&self.item_a)
        } else if self.item_b.id == item_id {
            Some(&self.item_b)
        } else {
            None
        }
    }

    /// True if either side is a bye placeholder.
    pub fn has_bye(&self) -> bool {
        self.item_a.is_bye || self.item_b.is_bye
    }
}
