use serde::{Deserialize, Serialize};

/// How often a participant has drafted a given golfer across the
/// season, maintained when a tournament's picks are retired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickHistory {
    /// Golfer name
    pub player: String,
    /// Number of tournaments the golfer was picked for
    pub used: u32,
}

/// One fantasy-pool member and their drafted slate for the active
/// tournament. Slots are fixed-size and may be empty until the
/// participant finishes picking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    pub username: String,
    /// Golfer names by pick slot; `None` for unfilled slots
    pub picks: Vec<Option<String>>,
    /// Dollars won across the whole season
    #[serde(default)]
    pub season_winnings: f64,
    #[serde(default)]
    pub pick_history: Vec<PickHistory>,
}

impl Participant {
    /// Create a participant with the given slate.
    pub fn new(username: impl Into<String>, picks: Vec<Option<String>>) -> Self {
        Self { username: username.into(), picks, season_winnings: 0.0, pick_history: Vec::new() }
    }

    /// Whether every pick slot is filled. Incomplete slates stay off
    /// the ranked portion of the scoreboard.
    pub fn has_full_slate(&self) -> bool {
        self.picks.iter().all(|p| p.as_deref().is_some_and(|name| !name.is_empty()))
    }

    /// Filled pick names, in slot order.
    pub fn filled_picks(&self) -> impl Iterator<Item = &str> {
        self.picks.iter().flatten().map(|s| s.as_str()).filter(|s| !s.is_empty())
    }
}
