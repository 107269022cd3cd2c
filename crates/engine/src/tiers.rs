//! Tier threshold tables and progress computation
//!
//! Users and groups share the same "largest threshold ≤ points" rule over
//! independently configured tables. The tables are configuration data, not
//! code paths; both live here.

use common::models::EntityTier;
use serde::{Deserialize, Serialize};

/// Which threshold table to evaluate points against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TierTable {
    #[default]
    Users,
    Groups,
}

/// Descending (tier, lower bound) pairs for individual users
const USER_THRESHOLDS: [(EntityTier, u64); 5] = [
    (EntityTier::PlanetGuardian, 5000),
    (EntityTier::Forest, 1500),
    (EntityTier::Tree, 500),
    (EntityTier::Sprout, 100),
    (EntityTier::Seedling, 0),
];

/// Descending (tier, lower bound) pairs for groups
const GROUP_THRESHOLDS: [(EntityTier, u64); 5] = [
    (EntityTier::PlanetGuardian, 5000),
    (EntityTier::Forest, 2500),
    (EntityTier::Tree, 1000),
    (EntityTier::Sprout, 250),
    (EntityTier::Seedling, 0),
];

/// Where a point total sits: tier, distance to the next one, and how far
/// through the current bracket it is (for a progress bar)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierStanding {
    pub tier: EntityTier,
    /// Zero at the top tier
    pub points_to_next: u64,
    /// Clamped to [0, 100]; 100 when there is no upper bound
    pub progress_pct: f64,
}

/// Scan thresholds descending and return the first satisfied (inclusive
/// lower bound).
pub fn tier_for(points: u64, table: TierTable) -> TierStanding {
    let thresholds: &[(EntityTier, u64)] = match table {
        TierTable::Users => &USER_THRESHOLDS,
        TierTable::Groups => &GROUP_THRESHOLDS,
    };

    // The bottom threshold is 0, so a match always exists.
    let idx = thresholds
        .iter()
        .position(|(_, bound)| points >= *bound)
        .unwrap_or(thresholds.len() - 1);
    let (tier, lower) = thresholds[idx];

    if idx == 0 {
        return TierStanding {
            tier,
            points_to_next: 0,
            progress_pct: 100.0,
        };
    }

    let (_, upper) = thresholds[idx - 1];
    let progress = (points - lower) as f64 / (upper - lower) as f64 * 100.0;
    TierStanding {
        tier,
        points_to_next: upper - points,
        progress_pct: progress.clamp(0.0, 100.0),
    }
}
