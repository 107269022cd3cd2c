//! Order finalization and fulfillment credit
//!
//! The integration seam for the order subsystem: it reports finalized
//! orders here, and consumes fulfillment events by crediting every
//! participant. The core never moves money; it only reports the discount
//! and applies the impact-point delta.

use chrono::{DateTime, Utc};
use common::models::{
    FulfillmentEvent, ImpactDelta, ImpactSnapshot, StreakSignal, GROUP_BUY_POINTS_MULTIPLIER,
};
use common::Result;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::ledger::ImpactLedger;
use crate::rewards;

/// Impact reported by the order subsystem for one finalized order
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderImpact {
    pub points: i64,
    pub carbon_g: i64,
    pub water_l: i64,
    pub waste_g: i64,
}

/// What one finalized order did to the buyer's ledger
#[derive(Debug, Clone, Serialize)]
pub struct OrderOutcome {
    pub snapshot: ImpactSnapshot,
    /// Reward ids that crossed their threshold on this order
    pub newly_unlocked: Vec<&'static str>,
}

/// Applies order impact to ledgers and reports newly unlocked rewards.
pub struct OrderEventHandler {
    ledger: ImpactLedger,
}

impl OrderEventHandler {
    pub fn new(ledger: ImpactLedger) -> Self {
        Self { ledger }
    }

    pub fn ledger(&self) -> &ImpactLedger {
        &self.ledger
    }

    /// Credit a finalized order. A purchase continues the buyer's streak;
    /// group-buy purchases earn points at the fixed campaign multiplier.
    pub async fn order_finalized(
        &self,
        user_id: Uuid,
        impact: OrderImpact,
        group_buy: bool,
        now: DateTime<Utc>,
    ) -> Result<OrderOutcome> {
        let multiplier = if group_buy {
            GROUP_BUY_POINTS_MULTIPLIER
        } else {
            1
        };
        let delta = ImpactDelta {
            points: impact.points.saturating_mul(multiplier),
            carbon_g: impact.carbon_g,
            water_l: impact.water_l,
            waste_g: impact.waste_g,
            streak: StreakSignal::Continue,
        };

        let before = self.ledger.snapshot(user_id).await?;
        let after = self.ledger.apply(user_id, &delta, now).await?;

        let already: Vec<&str> = rewards::unlocked_ids(&before);
        let newly_unlocked: Vec<&'static str> = rewards::unlocked_ids(&after)
            .into_iter()
            .filter(|id| !already.contains(id))
            .collect();
        for id in &newly_unlocked {
            info!(user = %user_id, reward = id, "Reward unlocked");
        }

        Ok(OrderOutcome {
            snapshot: after,
            newly_unlocked,
        })
    }

    /// Credit every participant of a fulfilled campaign independently.
    ///
    /// Each participant's ledger update stands alone: one failure is logged
    /// and does not block the rest, and the failed credit can be retried per
    /// participant. Returns the ids that failed.
    pub async fn campaign_fulfilled(
        &self,
        event: &FulfillmentEvent,
        points_per_unit: u64,
        now: DateTime<Utc>,
    ) -> Vec<Uuid> {
        let mut failed = Vec::new();
        for participant in &event.participants {
            let impact = OrderImpact {
                points: (u64::from(participant.quantity) * points_per_unit) as i64,
                ..OrderImpact::default()
            };
            match self
                .order_finalized(participant.user_id, impact, true, now)
                .await
            {
                Ok(outcome) => {
                    info!(
                        campaign = %event.campaign_id,
                        user = %participant.user_id,
                        points = outcome.snapshot.points,
                        discount = event.discount_pct,
                        "Credited group-buy participant"
                    );
                }
                Err(err) => {
                    warn!(
                        campaign = %event.campaign_id,
                        user = %participant.user_id,
                        error = %err,
                        "Participant credit failed; retry individually"
                    );
                    failed.push(participant.user_id);
                }
            }
        }
        failed
    }
}
