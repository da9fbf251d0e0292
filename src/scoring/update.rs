use crate::domain::{PlayerSummary, UpdateDelta};

/// Applies a signed delta to a player's counters and returns the new
/// `(games_played, total_score)` pair. Pure computation: the caller owns
/// fetching the current record and persisting the result.
///
/// Clamping rules:
/// - a negative games delta is discarded, games_played never decreases;
/// - a score delta that would drive total_score below zero clamps the
///   result to exactly 0 (no partial subtraction).
pub fn apply_update(current: &PlayerSummary, delta: UpdateDelta) -> (i64, i64) {
    let games_delta = delta.games_delta.max(0);
    let new_games_played = current.games_played + games_delta;

    let new_total_score = if -delta.score_delta > current.total_score {
        0
    } else {
        current.total_score + delta.score_delta
    };

    (new_games_played, new_total_score)
}
