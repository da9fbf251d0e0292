use std::cmp::Ordering;

use crate::domain::{PlayerSummary, RankedPlayer};

use super::ppgr::ppgr;

/// Produces the full leaderboard order: highest ratio first, ties broken by
/// fewer games played, then by case-folded username. Usernames are unique,
/// so the resulting order is total.
pub fn rank(players: &[PlayerSummary]) -> Vec<RankedPlayer> {
    let mut ranked: Vec<RankedPlayer> = players
        .iter()
        .map(|player| RankedPlayer {
            ppgr: ppgr(player.total_score, player.games_played),
            player: player.clone(),
        })
        .collect();

    ranked.sort_by(compare_entries);
    ranked
}

fn compare_entries(a: &RankedPlayer, b: &RankedPlayer) -> Ordering {
    b.ppgr
        .total_cmp(&a.ppgr)
        .then_with(|| a.player.games_played.cmp(&b.player.games_played))
        .then_with(|| {
            a.player
                .username
                .to_lowercase()
                .cmp(&b.player.username.to_lowercase())
        })
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

    fn usernames(ranked: &[RankedPlayer]) -> Vec<&str> {
        ranked.iter().map(|r| r.player.username.as_str()).collect()
    }

    #[test]
    fn orders_by_ratio_descending() {
        let players = vec![
            summary("low", 10, 10),
            summary("high", 10, 90),
            summary("mid", 10, 50),
        ];

        assert_eq!(vec!["high", "mid", "low"], usernames(&rank(&players)));
    }

    #[test]
    fn equal_ratios_rank_fewer_games_first() {
        // Both at ratio 4.0, but "veteran" needed twice the games
        let players = vec![summary("veteran", 20, 80), summary("rookie", 10, 40)];

        assert_eq!(vec!["rookie", "veteran"], usernames(&rank(&players)));
    }

    #[test]
    fn remaining_ties_break_on_casefolded_username() {
        let players = vec![
            summary("Zed", 10, 40),
            summary("anna", 10, 40),
            summary("Bob", 10, 40),
        ];

        assert_eq!(vec!["anna", "Bob", "Zed"], usernames(&rank(&players)));
    }

    #[test]
    fn zero_ratios_of_either_sign_tie_break_on_games() {
        // Both ratios round to zero; -1/10000 must not sort as a distinct
        // negative zero, so the fewer-games player ranks first
        let players = vec![
            summary("many_games", 20000, 0),
            summary("few_games", 10000, -1),
        ];

        assert_eq!(vec!["few_games", "many_games"], usernames(&rank(&players)));
    }

    #[test]
    fn empty_population_ranks_to_empty() {
        assert!(rank(&[]).is_empty());
    }
}
