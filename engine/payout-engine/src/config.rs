//! Payout configuration: percentage curve, amateur exclusions, and
//! special fixed payouts. All of it is explicit caller-supplied input,
//! selected per tournament; the engine keeps no built-in defaults
//! beyond the named curve constructors.

use crate::error::{PayoutError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::{info, warn};

/// Percentage-of-purse by ordinal finishing position (1-indexed).
/// The curve's length determines how many positions are paid; golfers
/// beyond its reach receive nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoutCurve(Vec<f64>);

impl PayoutCurve {
    /// Create a curve from ordered percentages.
    pub fn new(percentages: Vec<f64>) -> Self {
        Self(percentages)
    }

    /// The standard PGA Tour curve: 65 paid positions, headed by 18%
    /// for the winner.
    pub fn pga_standard() -> Self {
        Self(vec![
            18.0, 10.9, 6.9, 4.9, 4.1, 3.625, 3.375, 3.125, 2.925, 2.725, 2.525, 2.325, 2.125,
            1.925, 1.825, 1.725, 1.625, 1.525, 1.425, 1.325, 1.225, 1.125, 1.045, 0.965, 0.885,
            0.805, 0.775, 0.745, 0.715, 0.685, 0.655, 0.625, 0.595, 0.57, 0.545, 0.52, 0.495,
            0.475, 0.455, 0.435, 0.415, 0.395, 0.375, 0.355, 0.335, 0.315, 0.295, 0.279, 0.265,
            0.257, 0.251, 0.245, 0.241, 0.237, 0.235, 0.233, 0.231, 0.229, 0.227, 0.225, 0.223,
            0.221, 0.219, 0.217, 0.215,
        ])
    }

    /// Number of paid positions.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the curve pays nobody.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All percentages in position order.
    pub fn percentages(&self) -> &[f64] {
        &self.0
    }

    /// The `count` percentages starting at 1-indexed position `cursor`.
    /// Positions past the end of the curve are simply absent, so the
    /// returned slice may be shorter than `count` (or empty).
    pub fn slice(&self, cursor: usize, count: usize) -> &[f64] {
        let start = (cursor.saturating_sub(1)).min(self.0.len());
        let end = start.saturating_add(count).min(self.0.len());
        &self.0[start..end]
    }

    /// Validate curve contents. Percentages must be finite and
    /// non-negative; a total above 100% is an upstream data problem
    /// the engine tolerates, so it only warns.
    pub fn validate(&self) -> Result<()> {
        for (i, pct) in self.0.iter().enumerate() {
            if !pct.is_finite() || *pct < 0.0 {
                return Err(PayoutError::InvalidCurve(format!(
                    "percentage at position {} is {}",
                    i + 1,
                    pct
                )));
            }
        }
        let total: f64 = self.0.iter().sum();
        if total > 100.0 {
            warn!("Payout curve percentages sum to {total:.3}%, exceeding the purse");
        }
        Ok(())
    }
}

/// A guaranteed fixed payout for one golfer, overriding the computed
/// share when enabled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpecialPayout {
    pub enabled: bool,
    pub payout: f64,
}

/// Full payout configuration for one tournament.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoutConfig {
    /// Percentage-of-purse curve
    pub curve: PayoutCurve,

    /// Golfer names excluded from prize money entirely
    #[serde(default)]
    pub amateurs: HashSet<String>,

    /// Per-golfer fixed payout overrides, keyed by name
    #[serde(default)]
    pub special: HashMap<String, SpecialPayout>,
}

impl PayoutConfig {
    /// Create a config with no exclusions or overrides.
    pub fn new(curve: PayoutCurve) -> Self {
        Self { curve, amateurs: HashSet::new(), special: HashMap::new() }
    }

    /// Load and validate a payout config from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        info!("Loading payout config from: {:?}", path.as_ref());

        let json_content = std::fs::read_to_string(&path)?;
        let config: PayoutConfig = serde_json::from_str(&json_content)?;
        config.curve.validate()?;

        info!(
            "Loaded payout config: {} paid positions, {} amateurs, {} special payouts",
            config.curve.len(),
            config.amateurs.len(),
            config.special.len()
        );
        Ok(config)
    }

    /// Whether the given golfer is excluded from prize money.
    pub fn is_amateur(&self, name: &str) -> bool {
        self.amateurs.contains(name)
    }

    /// Active fixed payout for the given golfer, if one is configured
    /// and enabled.
    pub fn special_for(&self, name: &str) -> Option<f64> {
        self.special.get(name).filter(|s| s.enabled).map(|s| s.payout)
    }
}
