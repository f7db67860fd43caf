use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A golfer's finishing position, decoded once at ingestion.
///
/// The leaderboard feed encodes positions as strings: `"5"` for an
/// outright position, `"T5"` for a tie, `"CUT"` for golfers who missed
/// the cut, and `"N/A"` for withdrawals or golfers with no standing.
/// Anything that doesn't parse is treated as `NotAvailable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    /// Holding an ordinal finishing position (1-indexed), possibly tied
    Ranked { ordinal: u32, tied: bool },
    /// Missed the cut; ineligible for payout
    Cut,
    /// Withdrawn, disqualified, or otherwise without a standing
    NotAvailable,
}

impl Position {
    /// Decode a feed position string (`"T5"`, `"5"`, `"CUT"`, `"N/A"`).
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match raw {
            "CUT" => return Position::Cut,
            "N/A" | "" => return Position::NotAvailable,
            _ => {}
        }
        let (tied, digits) = match raw.strip_prefix('T') {
            Some(rest) => (true, rest),
            None => (false, raw),
        };
        match digits.parse::<u32>() {
            Ok(ordinal) if ordinal > 0 => Position::Ranked { ordinal, tied },
            _ => Position::NotAvailable,
        }
    }

    /// Ordinal finishing position, if the golfer holds one.
    pub fn ordinal(&self) -> Option<u32> {
        match self {
            Position::Ranked { ordinal, .. } => Some(*ordinal),
            _ => None,
        }
    }

    /// Whether this position shares its ordinal with other golfers.
    pub fn is_tied(&self) -> bool {
        matches!(self, Position::Ranked { tied: true, .. })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Ranked { ordinal, tied: true } => write!(f, "T{ordinal}"),
            Position::Ranked { ordinal, tied: false } => write!(f, "{ordinal}"),
            Position::Cut => write!(f, "CUT"),
            Position::NotAvailable => write!(f, "N/A"),
        }
    }
}

/// A golfer's score relative to par, decoded once at ingestion.
///
/// The feed encodes scores as `"E"` (even), `"+N"`, `"-N"`, or `"-"`
/// for golfers without a score (which also marks them payout-ineligible).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Score {
    /// Strokes relative to par (0 = even)
    ToPar(i32),
    /// No score posted
    NoScore,
}

impl Score {
    /// Decode a feed score string (`"E"`, `"+3"`, `"-2"`, `"-"`).
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match raw {
            "E" => Score::ToPar(0),
            "-" | "" => Score::NoScore,
            _ => match raw.trim_start_matches('+').parse::<i32>() {
                Ok(n) => Score::ToPar(n),
                Err(_) => Score::NoScore,
            },
        }
    }

    /// Numeric score relative to par, if one is posted.
    pub fn to_par(&self) -> Option<i32> {
        match self {
            Score::ToPar(n) => Some(*n),
            Score::NoScore => None,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::ToPar(0) => write!(f, "E"),
            Score::ToPar(n) if *n > 0 => write!(f, "+{n}"),
            Score::ToPar(n) => write!(f, "{n}"),
            Score::NoScore => write!(f, "-"),
        }
    }
}

/// One golfer's state in a tournament snapshot, with the feed's string
/// encodings already decoded into typed fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GolferResult {
    /// Golfer name (e.g., "Scottie Scheffler")
    pub name: String,
    /// Finishing position
    pub position: Position,
    /// Total score relative to par
    pub score: Score,
    /// Hole progress ("F", "THRU 12", or a tee time like "10:45am")
    pub thru_status: String,
    /// Current-round score string, if the round has started
    pub round: Option<String>,
    /// ISO country code for flag display, if the feed supplies one
    pub country: Option<String>,
    /// Completed per-round scores (R1..R4)
    pub rounds: Vec<String>,
}

impl GolferResult {
    /// Decode a raw feed row into a typed result.
    pub fn from_raw(raw: RawGolfer) -> Self {
        Self {
            name: raw.name,
            position: Position::parse(&raw.position),
            score: Score::parse(&raw.score),
            thru_status: raw.thru_status,
            round: raw.round.filter(|r| !r.is_empty()),
            country: raw.country.filter(|c| !c.is_empty()),
            rounds: raw.rounds,
        }
    }

    /// Whether this golfer can be assigned a payout at all: holds an
    /// ordinal position and has a posted score. Amateur exclusion is a
    /// separate, config-driven concern.
    pub fn is_payout_eligible(&self) -> bool {
        self.position.ordinal().is_some() && self.score.to_par().is_some()
    }
}

/// A leaderboard row exactly as the scraper feed stores it, all fields
/// stringly typed. Decoded into [`GolferResult`] at the ingestion edge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawGolfer {
    pub name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub score: String,
    #[serde(default)]
    pub thru_status: String,
    #[serde(default)]
    pub round: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    /// Per-round score strings (R1..R4)
    #[serde(default)]
    pub rounds: Vec<String>,
}

/// A real-world tournament whose purse gets distributed by position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tournament {
    /// Tournament name (e.g., "The Masters")
    pub name: String,
    /// Total prize money in dollars
    pub purse: f64,
    /// Tournament year
    pub year: u32,
}

impl Tournament {
    /// Whether the tournament has a usable purse. A missing or zero
    /// purse short-circuits payout computation entirely.
    pub fn has_purse(&self) -> bool {
        self.purse.is_finite() && self.purse > 0.0
    }
}

/// Container for a stored leaderboard snapshot: one tournament plus
/// the golfer rows captured from the feed at `last_updated`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardSnapshot {
    pub tournament: Tournament,
    /// When this snapshot was captured
    pub last_updated: DateTime<Utc>,
    /// Raw feed rows, in feed order (leaders first)
    pub golfers: Vec<RawGolfer>,
}
