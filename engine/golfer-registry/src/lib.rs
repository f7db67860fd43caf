//! Golfer Registry - typed leaderboard data and name-keyed lookup
//!
//! This crate owns the data model for live tournament leaderboards: the
//! feed's stringly-typed rows are decoded once at ingestion into typed
//! positions and scores, then served through a name-keyed registry that
//! the payout and standings layers resolve picks against.

mod error;
mod registry;
mod types;

pub use error::GolferLookupError;
pub use registry::GolferRegistry;
pub use types::{GolferResult, LeaderboardSnapshot, Position, RawGolfer, Score, Tournament};
