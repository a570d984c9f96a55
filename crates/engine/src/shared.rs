//! Shared engine handle.
//!
//! One `GameState` behind one mutex. Every intent and tick holds the lock for
//! the whole call, so a rollback can never be observed half-done, and readers
//! copy a full snapshot under the same lock.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::core::{GameSnapshot, GameState, TickOutcome};
use crate::types::{GameAction, GamePhase};

/// Cloneable handle to a single engine instance.
///
/// Pass clones to whichever activity needs the engine (update loop, renderer,
/// input dispatch) instead of reaching for a global.
#[derive(Debug, Clone)]
pub struct SharedGame {
    inner: Arc<Mutex<GameState>>,
}

impl SharedGame {
    pub fn new(state: GameState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    /// Lock the engine.
    ///
    /// Mutations either complete or roll back before the guard drops, so a
    /// poisoned lock still holds a consistent state and is recovered.
    fn lock(&self) -> MutexGuard<'_, GameState> {
        self.inner.lock().unwrap_or_else(|poisoned: PoisonError<_>| {
            log::warn!("engine lock was poisoned; recovering");
            poisoned.into_inner()
        })
    }

    /// Run `f` with exclusive access to the engine.
    pub fn with<R>(&self, f: impl FnOnce(&mut GameState) -> R) -> R {
        let mut guard = self.lock();
        f(&mut guard)
    }

    pub fn move_piece(&self, dx: i32) -> bool {
        self.lock().move_piece(dx)
    }

    pub fn rotate(&self) -> bool {
        self.lock().rotate()
    }

    pub fn drop_piece(&self) -> bool {
        // Method syntax on the guard would pick `Drop::drop`.
        GameState::drop(&mut self.lock())
    }

    pub fn start(&self) -> bool {
        self.lock().start()
    }

    pub fn toggle_pause(&self) -> bool {
        self.lock().toggle_pause()
    }

    pub fn reset(&self) -> bool {
        self.lock().reset()
    }

    pub fn apply_action(&self, action: GameAction) -> bool {
        self.lock().apply_action(action)
    }

    pub fn tick(&self, dt: f32) -> TickOutcome {
        self.lock().tick(dt)
    }

    pub fn phase(&self) -> GamePhase {
        self.lock().phase()
    }

    pub fn score(&self) -> u32 {
        self.lock().score()
    }

    /// Copy the full read surface in one critical section.
    pub fn snapshot(&self) -> GameSnapshot {
        self.lock().snapshot()
    }

    /// Like [`SharedGame::snapshot`], reusing `out`'s allocation.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.lock().snapshot_into(out);
    }
}
