//! Persistence contract for game progress, plus an in-memory implementation.
//!
//! The engine never calls the store. The web layer saves after each committed
//! mutation and restores on session resume; a failed save is logged and the
//! in-memory state stays authoritative.

use crate::models::GameState;
use std::collections::HashMap;
use std::sync::RwLock;

/// Error from a store operation. Carries a message only; callers treat saves
/// as fire-and-forget and restores as best-effort.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StoreError(pub String);

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "store error: {}", self.0)
    }
}

impl std::error::Error for StoreError {}

/// Narrow persistence contract: snapshot in, snapshot out, keyed by an opaque
/// session key. Transport, expiry, and storage medium are the implementor's
/// business.
pub trait GameStore {
    fn save(&self, key: &str, state: &GameState) -> Result<(), StoreError>;
    fn restore(&self, key: &str) -> Result<Option<GameState>, StoreError>;
}

/// In-memory store keyed by session key. Suitable for a single-process
/// deployment; state does not survive a restart.
#[derive(Default)]
pub struct MemoryStore {
    games: RwLock<HashMap<String, GameState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameStore for MemoryStore {
    fn save(&self, key: &str, state: &GameState) -> Result<(), StoreError> {
        let mut g = self
            .games
            .write()
            .map_err(|_| StoreError("lock poisoned".to_string()))?;
        g.insert(key.to_string(), state.clone());
        Ok(())
    }

    fn restore(&self, key: &str) -> Result<Option<GameState>, StoreError> {
        let g = self
            .games
            .read()
            .map_err(|_| StoreError("lock poisoned".to_string()))?;
        Ok(g.get(key).cloned())
    }
}
