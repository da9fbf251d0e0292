pub mod leaderboard;
pub mod progression;

pub use leaderboard::LeaderboardService;
pub use progression::ProgressionService;
