pub mod models;

pub use models::{PlayerSummary, Podium, RankedPlayer, UpdateDelta};
