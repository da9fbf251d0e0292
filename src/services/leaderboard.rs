use std::sync::Arc;

use anyhow::{Context, Result};
use log::info;

use crate::domain::Podium;
use crate::ranking;
use crate::store::PlayerStore;

/// Builds the podium from the full stored population.
pub struct LeaderboardService<S: PlayerStore> {
    store: Arc<S>,
}

impl<S: PlayerStore> LeaderboardService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Fetches every player, ranks them by points-per-game ratio and groups
    /// the top three distinct ratios into tiers. An empty population yields
    /// an empty podium.
    pub fn podium(&self) -> Result<Podium> {
        let players = self
            .store
            .fetch_all_players()
            .context("Failed to fetch players for podium")?;

        info!("Building podium over {} players", players.len());

        let ranked = ranking::rank(&players);
        Ok(ranking::podium(ranked))
    }
}
