//! Bracket voting game: library with models, game logic, and storage contract.

pub mod logic;
pub mod models;
pub mod storage;

pub use logic::{
    apply_choice, build_game, current_match, restart, round_name, tournament_progress, undo,
    BRACKET_SIZES,
};
pub use models::{
    GameError, GameMatch, GameState, Item, ItemId, MatchId, Tournament, TournamentId,
};
pub use storage::{GameStore, MemoryStore, StoreError};
