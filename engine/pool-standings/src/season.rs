//! Season-long views: cumulative winnings leaderboard and per-week
//! earnings series for charting.

use crate::types::Participant;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One tournament week's earnings by participant username.
pub type WeeklyEarnings = HashMap<String, f64>;

/// One row of the season leaderboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonStanding {
    pub rank: u32,
    pub username: String,
    pub season_winnings: f64,
}

/// Rank the pool by season winnings, descending. Stable, so ties keep
/// pool order.
pub fn season_leaderboard(participants: &[Participant]) -> Vec<SeasonStanding> {
    let mut ordered: Vec<&Participant> = participants.iter().collect();
    ordered.sort_by(|a, b| b.season_winnings.total_cmp(&a.season_winnings));

    ordered
        .into_iter()
        .enumerate()
        .map(|(i, p)| SeasonStanding {
            rank: (i + 1) as u32,
            username: p.username.clone(),
            season_winnings: p.season_winnings,
        })
        .collect()
}

/// Build each participant's week-by-week earnings series from the
/// stored per-tournament earnings maps. Every series spans all weeks;
/// a week a participant is missing from contributes 0.
pub fn earnings_series(weeks: &[WeeklyEarnings]) -> HashMap<String, Vec<f64>> {
    let mut series: HashMap<String, Vec<f64>> = HashMap::new();

    let mut names: Vec<&String> = weeks.iter().flat_map(|w| w.keys()).collect();
    names.sort();
    names.dedup();

    for name in names {
        let values = weeks.iter().map(|w| w.get(name).copied().unwrap_or(0.0)).collect();
        series.insert(name.clone(), values);
    }
    series
}
