//! GameState: the live tournament plus the undo history around it.

use crate::models::item::Item;
use crate::models::tournament::Tournament;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One play-through: the live tournament, the snapshots that make undo work,
/// and the construction inputs kept for restart.
///
/// History entries are deep clones pushed before each successful choice, so
/// the live tournament never aliases a snapshot. The whole struct is the
/// payload handed to persistence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub tournament: Tournament,
    /// Pre-choice snapshots, most recent last. At most bracket_size - 1 entries.
    pub history: Vec<Tournament>,
    pub can_undo: bool,
    pub start_time: DateTime<Utc>,
    /// Set when the final choice lands; cleared again if that choice is undone.
    pub end_time: Option<DateTime<Utc>>,
    /// Items as handed to the builder, before truncation or bye padding.
    pub original_items: Vec<Item>,
    pub bracket_size: usize,
}

impl GameState {
    /// Wrap a freshly seeded tournament. Only the builder calls this.
    pub(crate) fn from_parts(
        tournament: Tournament,
        original_items: Vec<Item>,
        bracket_size: usize,
    ) -> Self {
        Self {
            tournament,
            history: Vec::new(),
            can_undo: false,
            start_time: Utc::now(),
            end_time: None,
            original_items,
            bracket_size,
        }
    }
}
