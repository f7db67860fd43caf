use crate::error::GolferLookupError;
use crate::types::{GolferResult, LeaderboardSnapshot, Position, Score, Tournament};
use anyhow::Context;
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

/// Golfer Registry - name-keyed view over one leaderboard snapshot
///
/// Built from the decoded feed rows for the active tournament. The
/// payout and standings layers resolve picks against it by name;
/// missing names are a normal condition (stale picks) and surface as
/// `None`, never as an error.
pub struct GolferRegistry {
    /// Golfers in feed order (leaders first)
    golfers: Vec<GolferResult>,

    /// Map from golfer name to index in `golfers`
    by_name: HashMap<String, usize>,
}

impl GolferRegistry {
    /// Create a registry from decoded golfer rows. If the feed repeats
    /// a name, the last row wins.
    pub fn new(golfers: Vec<GolferResult>) -> Self {
        let mut by_name = HashMap::with_capacity(golfers.len());
        for (idx, golfer) in golfers.iter().enumerate() {
            if by_name.insert(golfer.name.clone(), idx).is_some() {
                warn!("Duplicate golfer row for '{}', keeping latest", golfer.name);
            }
        }
        Self { golfers, by_name }
    }

    /// Load a snapshot JSON file and build the registry from it,
    /// returning the tournament alongside.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<(Tournament, Self)> {
        info!("Loading leaderboard snapshot from: {:?}", path.as_ref());

        let json_content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read snapshot file {:?}", path.as_ref()))?;
        let snapshot: LeaderboardSnapshot =
            serde_json::from_str(&json_content).context("Failed to parse snapshot JSON")?;

        info!(
            "Loaded {} golfers for '{}' (captured {})",
            snapshot.golfers.len(),
            snapshot.tournament.name,
            snapshot.last_updated
        );

        let golfers = snapshot.golfers.into_iter().map(GolferResult::from_raw).collect();
        Ok((snapshot.tournament, Self::new(golfers)))
    }

    /// Look up a golfer by exact name.
    pub fn get(&self, name: &str) -> Option<&GolferResult> {
        self.by_name.get(name).map(|idx| &self.golfers[*idx])
    }

    /// Look up a golfer by exact name, surfacing an error for callers
    /// that require presence.
    pub fn get_required(&self, name: &str) -> Result<&GolferResult, GolferLookupError> {
        if self.golfers.is_empty() {
            return Err(GolferLookupError::RegistryEmpty);
        }
        self.get(name).ok_or_else(|| GolferLookupError::GolferNotFound(name.to_string()))
    }

    /// Numeric score relative to par for a golfer. `None` when the
    /// golfer is unknown or has no posted score.
    pub fn score_to_par(&self, name: &str) -> Option<i32> {
        self.get(name).and_then(|g| g.score.to_par())
    }

    /// Position for a golfer; unknown names read as `NotAvailable`.
    pub fn position_of(&self, name: &str) -> Position {
        self.get(name).map(|g| g.position).unwrap_or(Position::NotAvailable)
    }

    /// Thru status for a golfer; unknown names read as "N/A".
    pub fn thru_status_of(&self, name: &str) -> String {
        self.get(name).map(|g| g.thru_status.clone()).unwrap_or_else(|| "N/A".to_string())
    }

    /// All golfers in feed order.
    pub fn iter(&self) -> impl Iterator<Item = &GolferResult> {
        self.golfers.iter()
    }

    /// All golfers in feed order, as a slice.
    pub fn golfers(&self) -> &[GolferResult] {
        &self.golfers
    }

    /// Number of golfers in the snapshot.
    pub fn len(&self) -> usize {
        self.golfers.len()
    }

    /// Check if the registry has no golfers.
    pub fn is_empty(&self) -> bool {
        self.golfers.is_empty()
    }

    /// Search for golfers by partial name match (case-insensitive).
    pub fn search(&self, query: &str) -> Vec<&GolferResult> {
        let query_lower = query.to_lowercase();
        self.golfers.iter().filter(|g| g.name.to_lowercase().contains(&query_lower)).collect()
    }

    /// Projected cut line: the score held by the last golfer inside the
    /// paid field, i.e. the feed row at index `paid_positions - 1`.
    /// `None` when the field is smaller than the paid range.
    pub fn projected_cut_line(&self, paid_positions: usize) -> Option<Score> {
        if paid_positions == 0 {
            return None;
        }
        self.golfers.get(paid_positions - 1).map(|g| g.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RawGolfer;

    fn raw(name: &str, position: &str, score: &str, thru: &str) -> RawGolfer {
        RawGolfer {
            name: name.to_string(),
            position: position.to_string(),
            score: score.to_string(),
            thru_status: thru.to_string(),
            round: None,
            country: None,
            rounds: vec![],
        }
    }

    fn test_registry() -> GolferRegistry {
        let golfers = vec![
            GolferResult::from_raw(raw("Scottie Scheffler", "1", "-10", "F")),
            GolferResult::from_raw(raw("Rory McIlroy", "T2", "-7", "F")),
            GolferResult::from_raw(raw("Ludvig Aberg", "T2", "-7", "F")),
            GolferResult::from_raw(raw("Jordan Spieth", "CUT", "+5", "F")),
        ];
        GolferRegistry::new(golfers)
    }

    #[test]
    fn test_lookup_by_name() {
        let registry = test_registry();

        let rory = registry.get("Rory McIlroy").unwrap();
        assert_eq!(rory.position, Position::Ranked { ordinal: 2, tied: true });
        assert_eq!(registry.score_to_par("Rory McIlroy"), Some(-7));
        assert_eq!(registry.thru_status_of("Rory McIlroy"), "F");
    }

    #[test]
    fn test_unknown_name_is_soft() {
        let registry = test_registry();

        assert!(registry.get("Tiger Woods").is_none());
        assert_eq!(registry.score_to_par("Tiger Woods"), None);
        assert_eq!(registry.position_of("Tiger Woods"), Position::NotAvailable);
        assert_eq!(registry.thru_status_of("Tiger Woods"), "N/A");
        assert!(registry.get_required("Tiger Woods").is_err());
    }

    #[test]
    fn test_search_case_insensitive() {
        let registry = test_registry();

        let results = registry.search("rory");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Rory McIlroy");
    }

    #[test]
    fn test_duplicate_name_keeps_latest() {
        let golfers = vec![
            GolferResult::from_raw(raw("Rory McIlroy", "5", "-3", "THRU 9")),
            GolferResult::from_raw(raw("Rory McIlroy", "4", "-4", "THRU 10")),
        ];
        let registry = GolferRegistry::new(golfers);

        assert_eq!(registry.score_to_par("Rory McIlroy"), Some(-4));
    }

    #[test]
    fn test_projected_cut_line() {
        let registry = test_registry();

        // Field of 4, paid positions 2: cut line is the 2nd row's score.
        assert_eq!(registry.projected_cut_line(2), Some(Score::ToPar(-7)));
        assert_eq!(registry.projected_cut_line(0), None);
        assert_eq!(registry.projected_cut_line(100), None);
    }
}
