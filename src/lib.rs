pub mod domain;
pub mod ranking;
pub mod scoring;
pub mod services;
pub mod store;

pub use domain::{PlayerSummary, Podium, RankedPlayer, UpdateDelta};
pub use ranking::{podium, ppgr, rank};
pub use scoring::apply_update;
pub use services::{LeaderboardService, ProgressionService};
pub use store::{InMemoryPlayerStore, PlayerStore};
