//! Item data structure: one entrant in the voting bracket.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an item (used in matches and lookups).
pub type ItemId = Uuid;

/// One entrant: something the user can vote for.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    /// Optional image reference (URL or path); the engine never loads it.
    pub image_url: Option<String>,
    /// Synthetic placeholder used to pad the field up to the bracket size.
    /// Byes are never offered as a choice and auto-advance their opponent.
    pub is_bye: bool,
}

impl Item {
    /// Create a new real item with the given title. Image is optional.
    pub fn new(title: impl Into<String>, image_url: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            image_url,
            is_bye: false,
        }
    }

    /// Create a bye placeholder.
    pub fn bye() -> Self {
        Self {
            id: Uuid::new_v4(),
            title: "Bye".to_string(),
            image_url: None,
            is_bye: true,
        }
    }
}
