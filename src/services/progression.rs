use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result, anyhow};
use log::info;

use crate::domain::UpdateDelta;
use crate::scoring::apply_update;
use crate::store::PlayerStore;

/// Applies score/game-count deltas to stored players.
///
/// The store gives no atomicity between fetch and persist, so every update
/// runs inside a per-username critical section: concurrent updates to the
/// same player are serialized, updates to different players proceed freely.
pub struct ProgressionService<S: PlayerStore> {
    store: Arc<S>,
    update_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl<S: PlayerStore> ProgressionService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            update_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Fetches the named player, applies the delta under clamping rules and
    /// persists the result. Returns the persisted `(games_played,
    /// total_score)` pair, or `None` if no such player exists.
    pub fn update_player(&self, username: &str, delta: UpdateDelta) -> Result<Option<(i64, i64)>> {
        let lock = self.lock_for(username)?;
        let guard = lock
            .lock()
            .map_err(|_| anyhow!("Update lock poisoned for player: {}", username))?;

        let Some(current) = self
            .store
            .fetch_player_by_username(username)
            .context("Failed to fetch player for update")?
        else {
            info!("Update requested for unknown player: {}", username);
            drop(guard);
            self.discard_idle_lock(username, &lock)?;
            return Ok(None);
        };

        let (games_played, total_score) = apply_update(&current, delta);

        self.store
            .persist_player(username, games_played, total_score)
            .context("Failed to persist updated player")?;

        info!(
            "Updated player {}: games_played={}, total_score={}",
            username, games_played, total_score
        );
        Ok(Some((games_played, total_score)))
    }

    fn lock_for(&self, username: &str) -> Result<Arc<Mutex<()>>> {
        let mut locks = self
            .update_locks
            .lock()
            .map_err(|_| anyhow!("Update lock registry poisoned"))?;

        Ok(Arc::clone(
            locks.entry(username.to_string()).or_default(),
        ))
    }

    /// Removes the username's lock entry unless another updater holds a
    /// handle to it. Keeps the lock map from accumulating entries for
    /// usernames that never matched a stored player. New handles are only
    /// cloned under the registry mutex, so the count cannot grow while the
    /// entry is being removed.
    fn discard_idle_lock(&self, username: &str, lock: &Arc<Mutex<()>>) -> Result<()> {
        let mut locks = self
            .update_locks
            .lock()
            .map_err(|_| anyhow!("Update lock registry poisoned"))?;

        // One handle in the map plus the caller's
        if Arc::strong_count(lock) == 2 {
            locks.remove(username);
        }
        Ok(())
    }
}
