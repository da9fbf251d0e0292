use serde::{Deserialize, Serialize};

/// Player progression snapshot as handed over by the record store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub username: String,
    pub games_played: i64,
    pub total_score: i64,
}

/// Signed increments applied to a single player's counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct UpdateDelta {
    pub games_delta: i64,
    pub score_delta: i64,
}

/// Player paired with its points-per-game ratio for the duration of one
/// ranking pass. Intentionally not serializable: the ratio is an internal
/// ordering key and must not appear in any output representation.
#[derive(Debug, Clone)]
pub struct RankedPlayer {
    pub player: PlayerSummary,
    pub ppgr: f64,
}

/// The top three distinct-ratio groups, each in ranking order.
/// All three keys are always serialized, empty tiers included.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Podium {
    pub gold: Vec<PlayerSummary>,
    pub silver: Vec<PlayerSummary>,
    pub bronze: Vec<PlayerSummary>,
}

impl Podium {
    pub(crate) fn tier_mut(&mut self, index: usize) -> &mut Vec<PlayerSummary> {
        match index {
            0 => &mut self.gold,
            1 => &mut self.silver,
            _ => &mut self.bronze,
        }
    }
}
