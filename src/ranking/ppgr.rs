// Ratios at or above this magnitude are reported at coarser precision
const COARSE_THRESHOLD: f64 = 10.0;

const FINE_DECIMALS: i32 = 2;
const COARSE_DECIMALS: i32 = 1;

/// Points-per-game ratio: `total_score / games_played`.
///
/// Zero games played yields exactly 0. The raw quotient is rounded
/// half-to-even (`f64::round_ties_even`) to 2 decimal places below 10.0
/// and to 1 decimal place at or above it. The asymmetric precision is a
/// presentation rule inherited by existing clients and must not change.
pub fn ppgr(total_score: i64, games_played: i64) -> f64 {
    if games_played == 0 {
        return 0.0;
    }

    let raw = total_score as f64 / games_played as f64;
    let decimals = if raw >= COARSE_THRESHOLD {
        COARSE_DECIMALS
    } else {
        FINE_DECIMALS
    };

    round_to(raw, decimals)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    // The added zero collapses -0.0 to 0.0 so that zero ratios compare
    // equal under total ordering and fall through to the later sort keys
    (value * factor).round_ties_even() / factor + 0.0
}
