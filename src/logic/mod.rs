//! Game logic: bracket building, play, round advancement, progress queries.

mod advance;
mod builder;
mod play;
mod progress;

pub use builder::{build_game, BRACKET_SIZES};
pub use play::{apply_choice, restart, undo};
pub use progress::{current_match, round_name, tournament_progress};
