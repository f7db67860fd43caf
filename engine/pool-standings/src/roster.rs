//! Roster rules for salary-cap pools and pick-history accounting.

use crate::types::PickHistory;
use serde::{Deserialize, Serialize};

/// Salary-cap rules for a pool. Every pick carries the same flat cost.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterRules {
    /// Total salary budget per participant
    pub salary_cap: u32,
    /// Cost of one pick slot
    pub player_cost: u32,
    /// Number of pick slots in a slate
    pub slots: usize,
}

impl Default for RosterRules {
    fn default() -> Self {
        Self { salary_cap: 50_000, player_cost: 5_000, slots: 6 }
    }
}

/// A slate evaluated against [`RosterRules`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterStatus {
    /// Filled pick slots
    pub picked: usize,
    /// Salary committed so far
    pub current_salary: u32,
    /// Budget left (negative when over the cap)
    pub remaining_salary: i64,
    /// Average salary per filled slot
    pub average_salary: f64,
    /// Whether every slot is filled
    pub complete: bool,
    /// Whether the committed salary fits the cap
    pub within_cap: bool,
}

impl RosterStatus {
    /// Whether this slate may be saved: full and under the cap.
    pub fn save_allowed(&self) -> bool {
        self.complete && self.within_cap
    }
}

impl RosterRules {
    /// Evaluate a slate against these rules.
    pub fn evaluate(&self, picks: &[Option<String>]) -> RosterStatus {
        let picked =
            picks.iter().filter(|p| p.as_deref().is_some_and(|name| !name.is_empty())).count();
        let current_salary = picked as u32 * self.player_cost;
        let average_salary =
            if picked > 0 { current_salary as f64 / picked as f64 } else { 0.0 };

        RosterStatus {
            picked,
            current_salary,
            remaining_salary: self.salary_cap as i64 - current_salary as i64,
            average_salary,
            complete: picked >= self.slots,
            within_cap: current_salary <= self.salary_cap,
        }
    }
}

/// Fold a retiring slate into a participant's pick history: each filled
/// pick bumps its golfer's usage count, first-time golfers get a fresh
/// entry.
pub fn record_picks(history: &mut Vec<PickHistory>, picks: &[Option<String>]) {
    for pick in picks.iter().flatten().filter(|name| !name.is_empty()) {
        match history.iter_mut().find(|entry| entry.player == *pick) {
            Some(entry) => entry.used += 1,
            None => history.push(PickHistory { player: pick.clone(), used: 1 }),
        }
    }
}
