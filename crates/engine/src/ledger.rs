//! Impact ledger operations
//!
//! The ledger is the authoritative counter store for one user's or group's
//! cumulative impact. Counters only move through `apply`, which validates
//! the whole delta before taking the entity lock so a failed call leaves
//! every counter exactly as it was.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use common::models::{ImpactDelta, ImpactSnapshot, MonthlySample, Period, StreakSignal};
use common::{Error, Result};
use store::LedgerStore;
use tracing::debug;
use uuid::Uuid;

/// Trailing monthly samples kept per entity
const HISTORY_CAP: usize = 24;

/// Applies deltas to per-entity ledgers and reads consistent snapshots.
#[derive(Clone)]
pub struct ImpactLedger {
    ledgers: Arc<LedgerStore>,
}

impl ImpactLedger {
    pub fn new(ledgers: Arc<LedgerStore>) -> Self {
        Self { ledgers }
    }

    /// Apply one delta atomically and return the resulting snapshot.
    ///
    /// The streak increments at most once per calendar month on a continue
    /// signal and resets to zero on a reset signal; every other counter is
    /// monotonically non-decreasing. The entity's monthly history sample is
    /// updated in the same critical section.
    pub async fn apply(
        &self,
        entity_id: Uuid,
        delta: &ImpactDelta,
        now: DateTime<Utc>,
    ) -> Result<ImpactSnapshot> {
        validate(delta)?;

        let period = Period::from_ts(now);
        let applied = *delta;
        let snapshot = self
            .ledgers
            .with(entity_id, move |ledger| {
                ledger.points += applied.points as u64;
                ledger.carbon_g += applied.carbon_g as u64;
                ledger.water_l += applied.water_l as u64;
                ledger.waste_g += applied.waste_g as u64;

                match applied.streak {
                    StreakSignal::Reset => {
                        ledger.streak = 0;
                        ledger.last_streak_period = Some(period);
                    }
                    StreakSignal::Continue => {
                        if ledger.last_streak_period != Some(period) {
                            ledger.streak += 1;
                            ledger.last_streak_period = Some(period);
                        }
                    }
                    StreakSignal::None => {}
                }

                record_sample(ledger, period);
                ledger.clone()
            })
            .await?;

        debug!(
            entity = %entity_id,
            points = snapshot.points,
            streak = snapshot.streak,
            "Applied impact delta"
        );
        Ok(snapshot)
    }

    /// Read-consistent snapshot; never observes a partially applied delta.
    pub async fn snapshot(&self, entity_id: Uuid) -> Result<ImpactSnapshot> {
        self.ledgers.read(entity_id).await
    }

    /// Every entity with a ledger
    pub async fn entity_ids(&self) -> Vec<Uuid> {
        self.ledgers.entity_ids().await
    }

    /// Pure sum of member snapshots. Group totals are always derived this
    /// way rather than mutated independently, so they cannot drift from the
    /// member contributions they summarize.
    pub fn roll_up(members: &[ImpactSnapshot]) -> ImpactSnapshot {
        let mut total = ImpactSnapshot::default();
        for member in members {
            total.points += member.points;
            total.carbon_g += member.carbon_g;
            total.water_l += member.water_l;
            total.waste_g += member.waste_g;
        }
        total
    }
}

/// Update the cumulative sample for the current month: overwrite within the
/// same month, append on a new one, drop the oldest past the cap.
fn record_sample(ledger: &mut ImpactSnapshot, period: Period) {
    let sample = MonthlySample {
        period,
        points: ledger.points,
        carbon_g: ledger.carbon_g,
        water_l: ledger.water_l,
        waste_g: ledger.waste_g,
    };
    match ledger.history.last_mut() {
        Some(last) if last.period == period => *last = sample,
        _ => ledger.history.push(sample),
    }
    if ledger.history.len() > HISTORY_CAP {
        let excess = ledger.history.len() - HISTORY_CAP;
        ledger.history.drain(..excess);
    }
}

fn validate(delta: &ImpactDelta) -> Result<()> {
    let fields = [
        ("points", delta.points),
        ("carbon_g", delta.carbon_g),
        ("water_l", delta.water_l),
        ("waste_g", delta.waste_g),
    ];
    for (name, value) in fields {
        if value < 0 {
            return Err(Error::InvalidDelta(format!("{name} must be non-negative")));
        }
    }
    Ok(())
}
