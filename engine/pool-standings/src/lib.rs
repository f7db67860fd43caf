//! Pool Standings - fantasy-pool aggregation over tournament payouts
//!
//! Takes the per-golfer payouts produced by `payout-engine` and the
//! golfer registry, and rolls them up per pool participant: ranked
//! tournament standings, per-pick breakdowns, season leaderboards,
//! pick popularity, and salary-cap roster rules.
//!
//! Like the payout engine, everything here is a pure function over its
//! inputs; stale or missing data reads as zero rather than erroring.

mod popularity;
mod roster;
mod season;
mod standings;
mod types;

pub use popularity::{pick_popularity, top_picked, PickCount, PopularPick};
pub use roster::{record_picks, RosterRules, RosterStatus};
pub use season::{earnings_series, season_leaderboard, SeasonStanding, WeeklyEarnings};
pub use standings::{
    compute_standings, display_rank, pick_breakdown, rank_suffix, PickLine, StandingsEntry,
};
pub use types::{Participant, PickHistory};
