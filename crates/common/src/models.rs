//! Domain models

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Partner-declared sustainability attributes for one product.
///
/// Every field is optional: a missing field contributes zero to its scoring
/// category (worst case, not an error). Immutable once submitted for a score
/// computation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SustainabilityProfile {
    pub renewable_energy_pct: Option<f64>,
    pub recycled_content_pct: Option<f64>,
    pub bio_based_content_pct: Option<f64>,
    pub plastic_free_packaging: Option<bool>,
    pub packaging_recyclable: Option<Recyclability>,
    pub fair_labor_certified: Option<bool>,
    pub worker_safety_programs: Option<bool>,
    pub take_back_program: Option<bool>,
    pub expected_lifespan_years: Option<f64>,
    pub certification_count: Option<u32>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Recyclability {
    Yes,
    Partial,
    No,
}

/// Product sustainability tier, always derived from the stored EcoScore
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum ProductTier {
    Standard,
    EcoEntry,
    EcoAware,
    EcoSelect,
    EcoPioneer,
    EcoChampion,
}

/// User or group tier, always derived from cumulative impact points
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EntityTier {
    Seedling,
    Sprout,
    Tree,
    Forest,
    PlanetGuardian,
}

/// A catalog product with its declared attributes and stored EcoScore.
///
/// The tier is never stored: it is derived from `eco_score` at read time so
/// the two can never drift apart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub category: String,
    pub profile: SustainabilityProfile,
    /// 0-1000, recomputed whenever the profile changes
    pub eco_score: u16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A buying group of users
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// A calendar year-month, the granularity of the streak rule and of the
/// forecast history
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Period {
    pub year: i32,
    pub month: u32,
}

impl Period {
    pub fn from_ts(ts: DateTime<Utc>) -> Self {
        Self {
            year: ts.year(),
            month: ts.month(),
        }
    }
}

/// One trailing cumulative sample in an entity's monthly history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySample {
    pub period: Period,
    pub points: u64,
    pub carbon_g: u64,
    pub water_l: u64,
    pub waste_g: u64,
}

/// Read-consistent view of one entity's cumulative impact counters.
///
/// All counters are monotonically non-decreasing except `streak`, which
/// resets to zero on an explicit reset signal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactSnapshot {
    pub points: u64,
    pub carbon_g: u64,
    pub water_l: u64,
    pub waste_g: u64,
    pub streak: u32,
    /// Last period in which the streak was continued
    pub last_streak_period: Option<Period>,
    /// Trailing cumulative samples, one per calendar month with activity
    pub history: Vec<MonthlySample>,
}

/// Whether a delta continues or breaks the entity's activity streak
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreakSignal {
    #[default]
    None,
    Continue,
    Reset,
}

/// Increments applied to a ledger in one atomic step.
///
/// Fields are signed on the wire so a negative submission can be rejected
/// explicitly rather than silently wrapped.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ImpactDelta {
    #[serde(default)]
    pub points: i64,
    #[serde(default)]
    pub carbon_g: i64,
    #[serde(default)]
    pub water_l: i64,
    #[serde(default)]
    pub waste_g: i64,
    #[serde(default)]
    pub streak: StreakSignal,
}

/// Reward categories
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RewardCategory {
    Discount,
    Badge,
    Access,
}

/// Which cumulative counter a reward unlocks against
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CounterKind {
    Points,
    CarbonG,
    WaterL,
    WasteG,
}

/// What an unlocked reward grants
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RewardPayload {
    Discount { percent: u8 },
    Badge { badge_id: &'static str },
    Access { flag: &'static str },
}

/// A static reward definition.
///
/// Unlock status is computed from a ledger snapshot on every query, never
/// persisted.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct RewardDef {
    pub id: &'static str,
    pub category: RewardCategory,
    pub counter: CounterKind,
    pub threshold: u64,
    pub tier_label: EntityTier,
    pub payload: RewardPayload,
}

/// Group-buy campaign lifecycle states. Everything but `Open` is terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CampaignState {
    Open,
    Fulfilled,
    Expired,
    Cancelled,
}

impl CampaignState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, CampaignState::Open)
    }
}

/// A time-boxed, capacity-bounded collective purchase commitment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupBuyCampaign {
    pub id: Uuid,
    pub product_id: Uuid,
    pub group_id: Uuid,
    /// Fixed at creation, always positive
    pub target_quantity: u32,
    /// 0 ≤ current ≤ target; the sum of participant quantities
    pub current_quantity: u32,
    /// Fixed at creation
    pub discount_pct: u8,
    /// Fixed at creation
    pub deadline: DateTime<Utc>,
    pub state: CampaignState,
    pub created_at: DateTime<Utc>,
}

/// One user's commitment to a campaign. At most one row per (campaign, user);
/// joining again updates the quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Participant {
    pub campaign_id: Uuid,
    pub user_id: Uuid,
    pub quantity: u32,
}

/// Emitted exactly once, when a campaign reaches its target quantity.
/// Consumed by the order subsystem to charge the discount and credit impact
/// points at the group-buy multiplier.
#[derive(Debug, Clone, Serialize)]
pub struct FulfillmentEvent {
    pub campaign_id: Uuid,
    pub product_id: Uuid,
    pub group_id: Uuid,
    pub discount_pct: u8,
    pub participants: Vec<Participant>,
    pub fulfilled_at: DateTime<Utc>,
}

/// Fixed campaign-level policy: group-buy purchases earn impact points at
/// twice the solo rate
pub const GROUP_BUY_POINTS_MULTIPLIER: i64 = 2;

/// Leaderboard entry, derived from ledger snapshots at query time
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub entity_id: Uuid,
    pub points: u64,
    pub tier: EntityTier,
}
