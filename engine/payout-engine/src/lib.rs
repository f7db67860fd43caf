//! Payout Engine - deterministic tournament prize allocation
//!
//! Given a tournament purse, a snapshot of golfer results, a payout
//! percentage curve, amateur exclusions, and optional fixed-payout
//! overrides, computes each golfer's dollar payout. Ties split the sum
//! of the percentages their range occupies, and the curve cursor
//! advances by paid-group size so upstream exclusions never leave holes
//! in the paid range.
//!
//! The whole pipeline is a pure function of its inputs: no I/O, no
//! shared state, and malformed input degrades to empty output instead
//! of erroring.

mod allocator;
mod config;
mod error;
pub mod format;
mod tie_groups;

pub use allocator::{compute_payouts, PayoutResult};
pub use config::{PayoutConfig, PayoutCurve, SpecialPayout};
pub use error::{PayoutError, Result};
pub use tie_groups::{resolve_tie_groups, TieGroup};
