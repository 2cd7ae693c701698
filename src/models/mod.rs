//! Data structures for the voting game: items, matches, tournament state.

mod game;
mod game_state;
mod item;
mod tournament;

pub use game::{GameMatch, MatchId};
pub use game_state::GameState;
pub use item::{Item, ItemId};
pub use tournament::{GameError, Tournament, TournamentId};
