use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use anyhow::{Result, anyhow};

use crate::domain::PlayerSummary;

use super::PlayerStore;

/// In-process reference implementation of `PlayerStore`, keyed by username.
/// Backs the test suites and any embedding that has no real store yet.
#[derive(Default)]
pub struct InMemoryPlayerStore {
    players: RwLock<HashMap<String, PlayerSummary>>,
}

impl InMemoryPlayerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with an initial population, replacing any player
    /// already stored under the same username.
    pub fn seed(&self, players: Vec<PlayerSummary>) -> Result<()> {
        let mut guard = self.write_guard()?;
        for player in players {
            guard.insert(player.username.clone(), player);
        }
        Ok(())
    }

    fn read_guard(&self) -> Result<RwLockReadGuard<'_, HashMap<String, PlayerSummary>>> {
        self.players
            .read()
            .map_err(|_| anyhow!("Player store lock poisoned"))
    }

    fn write_guard(&self) -> Result<RwLockWriteGuard<'_, HashMap<String, PlayerSummary>>> {
        self.players
            .write()
            .map_err(|_| anyhow!("Player store lock poisoned"))
    }
}

impl PlayerStore for InMemoryPlayerStore {
    fn fetch_player_by_username(&self, username: &str) -> Result<Option<PlayerSummary>> {
        Ok(self.read_guard()?.get(username).cloned())
    }

    fn fetch_all_players(&self) -> Result<Vec<PlayerSummary>> {
        Ok(self.read_guard()?.values().cloned().collect())
    }

    fn persist_player(&self, username: &str, games_played: i64, total_score: i64) -> Result<()> {
        let mut guard = self.write_guard()?;

        let player = guard
            .get_mut(username)
            .ok_or_else(|| anyhow!("Cannot persist unknown player: {}", username))?;

        player.games_played = games_played;
        player.total_score = total_score;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(username: &str, games_played: i64, total_score: i64) -> PlayerSummary {
        PlayerSummary {
            username: username.to_string(),
            games_played,
            total_score,
        }
    }

    #[test]
    fn fetch_missing_player_is_none_not_error() {
        let store = InMemoryPlayerStore::new();

        assert!(store.fetch_player_by_username("ghost").unwrap().is_none());
    }

    #[test]
    fn persist_overwrites_the_stored_counters() {
        let store = InMemoryPlayerStore::new();
        store.seed(vec![summary("antoni_gn", 10, 40)]).unwrap();

        store.persist_player("antoni_gn", 12, 55).unwrap();

        let player = store
            .fetch_player_by_username("antoni_gn")
            .unwrap()
            .unwrap();
        assert_eq!(12, player.games_played);
        assert_eq!(55, player.total_score);
    }

    #[test]
    fn persist_unknown_player_fails() {
        let store = InMemoryPlayerStore::new();

        assert!(store.persist_player("ghost", 1, 1).is_err());
    }

    #[test]
    fn fetch_all_returns_the_population() {
        let store = InMemoryPlayerStore::new();
        store
            .seed(vec![summary("a", 1, 1), summary("b", 2, 2)])
            .unwrap();

        assert_eq!(2, store.fetch_all_players().unwrap().len());
    }
}
