//! Static reward catalog and unlock computation
//!
//! A reward is unlocked iff its named counter in a ledger snapshot meets the
//! threshold. Unlock status is recomputed on every query, never cached, so
//! it can never disagree with the counters it derives from.

use common::models::{
    CounterKind, EntityTier, ImpactSnapshot, RewardCategory, RewardDef, RewardPayload,
};

/// All reward definitions, ordered by threshold within each counter.
pub const REWARDS: [RewardDef; 8] = [
    RewardDef {
        id: "first_steps",
        category: RewardCategory::Badge,
        counter: CounterKind::Points,
        threshold: 100,
        tier_label: EntityTier::Sprout,
        payload: RewardPayload::Badge {
            badge_id: "first_steps",
        },
    },
    RewardDef {
        id: "eco_discount_5",
        category: RewardCategory::Discount,
        counter: CounterKind::Points,
        threshold: 500,
        tier_label: EntityTier::Tree,
        payload: RewardPayload::Discount { percent: 5 },
    },
    RewardDef {
        id: "eco_discount_10",
        category: RewardCategory::Discount,
        counter: CounterKind::Points,
        threshold: 1500,
        tier_label: EntityTier::Forest,
        payload: RewardPayload::Discount { percent: 10 },
    },
    RewardDef {
        id: "guardian_access",
        category: RewardCategory::Access,
        counter: CounterKind::Points,
        threshold: 5000,
        tier_label: EntityTier::PlanetGuardian,
        payload: RewardPayload::Access {
            flag: "early_access",
        },
    },
    RewardDef {
        id: "carbon_saver",
        category: RewardCategory::Badge,
        counter: CounterKind::CarbonG,
        threshold: 100_000,
        tier_label: EntityTier::Tree,
        payload: RewardPayload::Badge {
            badge_id: "carbon_saver",
        },
    },
    RewardDef {
        id: "water_guardian",
        category: RewardCategory::Badge,
        counter: CounterKind::WaterL,
        threshold: 10_000,
        tier_label: EntityTier::Tree,
        payload: RewardPayload::Badge {
            badge_id: "water_guardian",
        },
    },
    RewardDef {
        id: "waste_warrior",
        category: RewardCategory::Badge,
        counter: CounterKind::WasteG,
        threshold: 50_000,
        tier_label: EntityTier::Tree,
        payload: RewardPayload::Badge {
            badge_id: "waste_warrior",
        },
    },
    RewardDef {
        id: "guardian_discount_15",
        category: RewardCategory::Discount,
        counter: CounterKind::Points,
        threshold: 10_000,
        tier_label: EntityTier::PlanetGuardian,
        payload: RewardPayload::Discount { percent: 15 },
    },
];

/// Rewards unlocked by the given snapshot
pub fn unlocked(snapshot: &ImpactSnapshot) -> Vec<&'static RewardDef> {
    REWARDS
        .iter()
        .filter(|def| counter_value(snapshot, def.counter) >= def.threshold)
        .collect()
}

/// Ids of the rewards unlocked by the given snapshot
pub fn unlocked_ids(snapshot: &ImpactSnapshot) -> Vec<&'static str> {
    unlocked(snapshot).into_iter().map(|def| def.id).collect()
}

fn counter_value(snapshot: &ImpactSnapshot, counter: CounterKind) -> u64 {
    match counter {
        CounterKind::Points => snapshot.points,
        CounterKind::CarbonG => snapshot.carbon_g,
        CounterKind::WaterL => snapshot.water_l,
        CounterKind::WasteG => snapshot.waste_g,
    }
}
