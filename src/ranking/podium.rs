use crate::domain::{Podium, RankedPlayer};

/// Groups the ranked sequence into gold/silver/bronze by distinct ratio
/// (dense rank): every player sharing the current ratio joins the current
/// tier, each new ratio opens the next tier, and the walk stops once a
/// fourth distinct ratio appears. A tied tier can therefore hold any number
/// of players; this is not a fixed top-N cut.
pub fn podium(ranked: Vec<RankedPlayer>) -> Podium {
    let mut podium = Podium::default();

    let Some(first) = ranked.first() else {
        return podium;
    };

    let mut current_ppgr = first.ppgr;
    let mut tier = 0;

    for entry in ranked {
        if entry.ppgr != current_ppgr {
            current_ppgr = entry.ppgr;
            tier += 1;
            if tier > 2 {
                break;
            }
        }
        podium.tier_mut(tier).push(entry.player);
    }

    podium
}
