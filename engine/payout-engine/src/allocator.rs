//! Payout allocation: walk tie groups down the percentage curve and
//! assign each eligible golfer a dollar share of the purse.

use crate::config::PayoutConfig;
use crate::format::format_currency;
use crate::tie_groups::resolve_tie_groups;
use golfer_registry::{GolferResult, Position, Score, Tournament};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A single golfer's computed payout. Only payout-eligible golfers get
/// an entry; callers must treat a missing name as payout 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoutResult {
    pub name: String,
    pub position: Position,
    pub score: Score,
    pub thru_status: String,
    /// Dollar amount, unrounded; rounding happens at the display edge
    pub payout: f64,
}

impl PayoutResult {
    /// The comma-grouped whole-dollar string the app renders.
    pub fn payout_display(&self) -> String {
        format_currency(self.payout)
    }
}

/// Compute per-golfer payouts for one tournament snapshot.
///
/// Golfers are filtered to the paid field (not amateur, holding an
/// ordinal position, with a posted score), grouped by ties, and walked
/// down the curve. The curve cursor advances by group size rather than
/// by raw position, so golfers filtered out upstream (amateurs, cuts)
/// don't leave holes in the paid range. Tied golfers split the sum of
/// the percentages their range occupies.
///
/// Degenerate inputs (no purse, no golfers, empty curve) yield an
/// empty list rather than an error.
pub fn compute_payouts(
    tournament: &Tournament,
    golfers: &[GolferResult],
    config: &PayoutConfig,
) -> Vec<PayoutResult> {
    if !tournament.has_purse() {
        debug!("Tournament '{}' has no purse, skipping payouts", tournament.name);
        return Vec::new();
    }
    if golfers.is_empty() || config.curve.is_empty() {
        return Vec::new();
    }

    let eligible: Vec<GolferResult> = golfers
        .iter()
        .filter(|g| !config.is_amateur(&g.name) && g.is_payout_eligible())
        .cloned()
        .collect();

    let groups = resolve_tie_groups(&eligible);
    let mut payouts = Vec::with_capacity(eligible.len());
    let mut cursor: usize = 1;

    for group in groups {
        let count = group.count();
        let pct_sum: f64 = config.curve.slice(cursor, count).iter().sum();
        let mut share = tournament.purse * pct_sum / 100.0 / count as f64;
        if !share.is_finite() {
            share = 0.0;
        }

        for golfer in group.golfers {
            let payout = config.special_for(&golfer.name).unwrap_or(share);
            payouts.push(PayoutResult {
                name: golfer.name,
                position: golfer.position,
                score: golfer.score,
                thru_status: golfer.thru_status,
                payout,
            });
        }

        cursor += count;
    }

    debug!(
        "Allocated {} payouts for '{}' (purse ${})",
        payouts.len(),
        tournament.name,
        tournament.purse
    );
    payouts
}
