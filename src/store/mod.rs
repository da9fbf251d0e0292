pub mod memory;

pub use memory::InMemoryPlayerStore;

use anyhow::Result;

use crate::domain::PlayerSummary;

/// Boundary to the external player record store. Lookups distinguish
/// absence (`Ok(None)`) from store failure (`Err`).
///
/// The store gives no atomicity across calls: a fetch followed by a persist
/// is a read-modify-write sequence that callers must serialize per username
/// (see `ProgressionService`).
pub trait PlayerStore: Send + Sync {
    fn fetch_player_by_username(&self, username: &str) -> Result<Option<PlayerSummary>>;

    fn fetch_all_players(&self) -> Result<Vec<PlayerSummary>>;

    fn persist_player(&self, username: &str, games_played: i64, total_score: i64) -> Result<()>;
}
