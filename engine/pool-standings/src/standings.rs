//! Standings aggregation: roll per-golfer payouts and scores up to
//! each participant and produce the ranked scoreboard.

use crate::types::Participant;
use golfer_registry::{GolferRegistry, Position, Score};
use payout_engine::PayoutResult;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// One scoreboard row. Complete slates carry a 1-indexed rank;
/// incomplete slates trail the ranked list with `rank = None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingsEntry {
    pub participant: Participant,
    /// Sum of picks' scores relative to par
    pub total_score: i32,
    /// Sum of picks' payouts in dollars
    pub total_winnings: f64,
    pub rank: Option<u32>,
}

/// One rendered pick row in a participant's card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickLine {
    pub golfer: String,
    pub position: Position,
    pub score: Score,
    pub thru_status: String,
    pub payout: f64,
}

fn payout_index(payouts: &[PayoutResult]) -> HashMap<&str, f64> {
    payouts.iter().map(|p| (p.name.as_str(), p.payout)).collect()
}

fn totals(
    participant: &Participant,
    payouts_by_name: &HashMap<&str, f64>,
    registry: &GolferRegistry,
) -> (i32, f64) {
    let mut total_score = 0;
    let mut total_winnings = 0.0;
    for pick in participant.filled_picks() {
        // Unknown golfers and unposted scores read as zero, never as
        // an error: picks can go stale between snapshots.
        total_score += registry.score_to_par(pick).unwrap_or(0);
        total_winnings += payouts_by_name.get(pick).copied().unwrap_or(0.0);
    }
    (total_score, total_winnings)
}

/// Aggregate payouts and scores per participant and rank the pool.
///
/// Participants with a full slate are sorted by total winnings
/// descending (stable, so equal-winnings participants keep their
/// original order) and ranked 1..N. Participants still picking are
/// appended after the ranked list, unranked, in original order.
pub fn compute_standings(
    participants: &[Participant],
    payouts: &[PayoutResult],
    registry: &GolferRegistry,
) -> Vec<StandingsEntry> {
    let payouts_by_name = payout_index(payouts);

    let mut ranked: Vec<StandingsEntry> = Vec::new();
    let mut unranked: Vec<StandingsEntry> = Vec::new();

    for participant in participants {
        let (total_score, total_winnings) = totals(participant, &payouts_by_name, registry);
        let entry = StandingsEntry {
            participant: participant.clone(),
            total_score,
            total_winnings,
            rank: None,
        };
        if participant.has_full_slate() {
            ranked.push(entry);
        } else {
            unranked.push(entry);
        }
    }

    ranked.sort_by(|a, b| b.total_winnings.total_cmp(&a.total_winnings));
    for (i, entry) in ranked.iter_mut().enumerate() {
        entry.rank = Some((i + 1) as u32);
    }

    debug!("Computed standings: {} ranked, {} still picking", ranked.len(), unranked.len());

    ranked.extend(unranked);
    ranked
}

/// Resolve one participant's filled picks into rendered rows, ordered
/// by each pick's payout descending.
pub fn pick_breakdown(
    participant: &Participant,
    payouts: &[PayoutResult],
    registry: &GolferRegistry,
) -> Vec<PickLine> {
    let payouts_by_name = payout_index(payouts);

    let mut lines: Vec<PickLine> = participant
        .filled_picks()
        .map(|pick| PickLine {
            golfer: pick.to_string(),
            position: registry.position_of(pick),
            score: registry.get(pick).map(|g| g.score).unwrap_or(Score::NoScore),
            thru_status: registry.thru_status_of(pick),
            payout: payouts_by_name.get(pick).copied().unwrap_or(0.0),
        })
        .collect();

    lines.sort_by(|a, b| b.payout.total_cmp(&a.payout));
    lines
}

/// Ordinal suffix for a scoreboard rank (1 -> "st", 2 -> "nd",
/// 3 -> "rd", everything else "th").
pub fn rank_suffix(rank: u32) -> &'static str {
    match rank {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// A rank with its suffix, e.g. "4th".
pub fn display_rank(rank: u32) -> String {
    format!("{rank}{}", rank_suffix(rank))
}

#[cfg(test)]
mod tests {
    use super::*;
    use golfer_registry::{GolferResult, RawGolfer, Tournament};
    use payout_engine::{compute_payouts, PayoutConfig, PayoutCurve};

    fn golfer(name: &str, position: &str, score: &str) -> GolferResult {
        GolferResult::from_raw(RawGolfer {
            name: name.to_string(),
            position: position.to_string(),
            score: score.to_string(),
            thru_status: "F".to_string(),
            round: None,
            country: None,
            rounds: vec![],
        })
    }

    fn picks(names: &[&str]) -> Vec<Option<String>> {
        names
            .iter()
            .map(|n| if n.is_empty() { None } else { Some(n.to_string()) })
            .collect()
    }

    /// Field of four golfers with a clean 40/30/20/10 curve over a
    /// $1,000 purse: A=$400, B=$300, C=$200, D=$100.
    fn test_pipeline() -> (Vec<PayoutResult>, GolferRegistry) {
        let golfers = vec![
            golfer("A", "1", "-8"),
            golfer("B", "2", "-6"),
            golfer("C", "3", "-4"),
            golfer("D", "4", "-2"),
        ];
        let tournament = Tournament { name: "Test Open".to_string(), purse: 1_000.0, year: 2025 };
        let config = PayoutConfig::new(PayoutCurve::new(vec![40.0, 30.0, 20.0, 10.0]));
        let payouts = compute_payouts(&tournament, &golfers, &config);
        (payouts, GolferRegistry::new(golfers))
    }

    #[test]
    fn test_standings_rank_by_winnings() {
        let (payouts, registry) = test_pipeline();
        let participants = vec![
            Participant::new("low", picks(&["C", "D"])),
            Participant::new("high", picks(&["A", "B"])),
        ];

        let standings = compute_standings(&participants, &payouts, &registry);
        assert_eq!(standings[0].participant.username, "high");
        assert_eq!(standings[0].total_winnings, 700.0);
        assert_eq!(standings[0].total_score, -14);
        assert_eq!(standings[0].rank, Some(1));
        assert_eq!(standings[1].participant.username, "low");
        assert_eq!(standings[1].rank, Some(2));
    }

    #[test]
    fn test_incomplete_slate_trails_unranked() {
        let (payouts, registry) = test_pipeline();
        let participants = vec![
            Participant::new("picking", picks(&["A", ""])),
            Participant::new("done", picks(&["C", "D"])),
        ];

        let standings = compute_standings(&participants, &payouts, &registry);
        assert_eq!(standings[0].participant.username, "done");
        assert_eq!(standings[0].rank, Some(1));
        // Incomplete slate comes after every ranked entry, unranked,
        // but still totaled for display.
        assert_eq!(standings[1].participant.username, "picking");
        assert_eq!(standings[1].rank, None);
        assert_eq!(standings[1].total_winnings, 400.0);
    }

    #[test]
    fn test_ties_keep_original_order() {
        let (payouts, registry) = test_pipeline();
        // A+D (400+100) and B+C (300+200) both total $500, so
        // insertion order must decide.
        let participants = vec![
            Participant::new("first", picks(&["A", "D"])),
            Participant::new("second", picks(&["B", "C"])),
        ];

        let standings = compute_standings(&participants, &payouts, &registry);
        assert_eq!(standings[0].participant.username, "first");
        assert_eq!(standings[1].participant.username, "second");
    }

    #[test]
    fn test_stale_pick_counts_zero() {
        let (payouts, registry) = test_pipeline();
        let participants = vec![Participant::new("stale", picks(&["A", "Gone Golfer"]))];

        let standings = compute_standings(&participants, &payouts, &registry);
        assert_eq!(standings[0].total_winnings, 400.0);
        assert_eq!(standings[0].total_score, -8);
    }

    #[test]
    fn test_pick_breakdown_sorted_by_payout() {
        let (payouts, registry) = test_pipeline();
        let participant = Participant::new("justin", picks(&["D", "A", "C"]));

        let lines = pick_breakdown(&participant, &payouts, &registry);
        let golfers: Vec<&str> = lines.iter().map(|l| l.golfer.as_str()).collect();
        assert_eq!(golfers, vec!["A", "C", "D"]);
        assert_eq!(lines[0].payout, 400.0);
    }

    #[test]
    fn test_determinism() {
        let (payouts, registry) = test_pipeline();
        let participants = vec![
            Participant::new("u1", picks(&["A", "C"])),
            Participant::new("u2", picks(&["B", "D"])),
        ];

        let first = compute_standings(&participants, &payouts, &registry);
        let second = compute_standings(&participants, &payouts, &registry);
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.participant.username, b.participant.username);
            assert_eq!(a.total_winnings, b.total_winnings);
            assert_eq!(a.rank, b.rank);
        }
    }

    #[test]
    fn test_rank_suffixes() {
        assert_eq!(display_rank(1), "1st");
        assert_eq!(display_rank(2), "2nd");
        assert_eq!(display_rank(3), "3rd");
        assert_eq!(display_rank(7), "7th");
    }
}
