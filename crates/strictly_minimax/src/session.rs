//! Game sessions owned on behalf of a presentation shell.
//!
//! The core keeps no process-wide state: a shell creates a
//! [`SessionManager`], opens games on it and refers to them by handle.

use crate::error::SessionError;
use crate::{Board, Engine, Game, GameStatus};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, instrument, warn};

/// Opaque identifier for a game held by a [`SessionManager`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
    derive_more::Display,
)]
#[display("game-{}", _0)]
pub struct GameHandle(u64);

type GameSlot = Arc<Mutex<Game>>;

/// Manages isolated games, one per handle.
///
/// The store lock only guards the handle table. Each game has its own lock,
/// so a long search in one game never blocks another, and a panic inside
/// one game poisons only that game.
///
/// Cloning the manager shares the underlying store.
#[derive(Debug, Clone, Default)]
pub struct SessionManager {
    games: Arc<Mutex<HashMap<GameHandle, GameSlot>>>,
    next_id: Arc<AtomicU64>,
    seed: Option<u64>,
}

impl SessionManager {
    /// Creates a session manager whose engines draw from OS entropy.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating session manager");
        Self::default()
    }

    /// Creates a session manager with reproducible engines.
    ///
    /// Each game gets its own engine seeded from `seed` and its handle.
    #[instrument]
    pub fn with_seed(seed: Option<u64>) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<GameHandle, GameSlot>>, SessionError> {
        self.games.lock().map_err(|_| {
            warn!("Session store lock poisoned");
            SessionError::Poisoned
        })
    }

    fn with_game<T>(
        &self,
        handle: GameHandle,
        f: impl FnOnce(&mut Game) -> T,
    ) -> Result<T, SessionError> {
        let slot = self.slot(handle)?;
        let mut game = slot.lock().map_err(|_| {
            warn!(%handle, "Game lock poisoned");
            SessionError::Poisoned
        })?;
        Ok(f(&mut game))
    }

    // Store lock is released before the caller touches the game.
    fn slot(&self, handle: GameHandle) -> Result<GameSlot, SessionError> {
        self.lock()?.get(&handle).cloned().ok_or_else(|| {
            debug!(%handle, "Game not found");
            SessionError::UnknownGame(handle)
        })
    }

    /// Opens a fresh game and returns its handle.
    #[instrument(skip(self))]
    pub fn new_game(&self) -> Result<GameHandle, SessionError> {
        let handle = GameHandle(self.next_id.fetch_add(1, Ordering::Relaxed));
        let engine = Engine::from_seed(self.seed.map(|s| s.wrapping_add(handle.0)));
        self.lock()?
            .insert(handle, Arc::new(Mutex::new(Game::with_engine(engine))));
        info!(%handle, "Created new game");
        Ok(handle)
    }

    /// Snapshot of the game's board.
    #[instrument(skip(self))]
    pub fn current_board(&self, handle: GameHandle) -> Result<Board, SessionError> {
        self.with_game(handle, |game| *game.board())
    }

    /// Plays a human move (and the machine's reply) in the game.
    ///
    /// Rejected moves leave the game unchanged; the returned status is then
    /// the current one.
    #[instrument(skip(self))]
    pub fn apply_human_move(
        &self,
        handle: GameHandle,
        row: usize,
        col: usize,
    ) -> Result<GameStatus, SessionError> {
        self.with_game(handle, |game| game.apply_human_move(row, col))
    }

    /// Clears the game's board.
    #[instrument(skip(self))]
    pub fn reset_game(&self, handle: GameHandle) -> Result<(), SessionError> {
        self.with_game(handle, Game::reset)
    }

    /// Current status of the game.
    #[instrument(skip(self))]
    pub fn status(&self, handle: GameHandle) -> Result<GameStatus, SessionError> {
        self.with_game(handle, |game| game.status())
    }

    /// Copy of the whole game, history included.
    #[instrument(skip(self))]
    pub fn game(&self, handle: GameHandle) -> Result<Game, SessionError> {
        self.with_game(handle, |game| game.clone())
    }

    /// Drops the game; its handle becomes unknown.
    #[instrument(skip(self))]
    pub fn end_game(&self, handle: GameHandle) -> Result<(), SessionError> {
        match self.lock()?.remove(&handle) {
            Some(_) => {
                info!(%handle, "Ended game");
                Ok(())
            }
            None => Err(SessionError::UnknownGame(handle)),
        }
    }

    /// Handles of all open games, in creation order.
    #[instrument(skip(self))]
    pub fn list_games(&self) -> Result<Vec<GameHandle>, SessionError> {
        let mut handles: Vec<_> = self.lock()?.keys().copied().collect();
        handles.sort();
        debug!(count = handles.len(), "Listed games");
        Ok(handles)
    }
}
