//! Group-buy campaign lifecycle
//!
//! One campaign moves OPEN → FULFILLED | EXPIRED | CANCELLED, all terminal.
//! Every mutation runs inside the campaign's own critical section, so the
//! capacity check, the quantity update, the threshold check and the single
//! fulfillment emission are one atomic step per campaign.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use common::models::{CampaignState, FulfillmentEvent, GroupBuyCampaign, Participant};
use common::{Error, Result};
use serde::Serialize;
use store::{CampaignRecord, CampaignStore};
use tokio::sync::mpsc;
use tracing::{info, warn};
use uuid::Uuid;

/// What a join call observed after its atomic step
#[derive(Debug, Clone, Serialize)]
pub struct JoinOutcome {
    pub state: CampaignState,
    pub current_quantity: u32,
    /// True only for the call that crossed the threshold
    pub fulfilled: bool,
}

/// What a leave call observed after its atomic step
#[derive(Debug, Clone, Serialize)]
pub struct LeaveOutcome {
    pub state: CampaignState,
    pub current_quantity: u32,
}

/// A campaign and its participant rows, for read endpoints
#[derive(Debug, Clone, Serialize)]
pub struct CampaignView {
    pub campaign: GroupBuyCampaign,
    pub participants: Vec<Participant>,
}

/// Owns the lifecycle of group-buy campaigns.
pub struct GroupBuyCoordinator {
    campaigns: Arc<CampaignStore>,
    events: mpsc::UnboundedSender<FulfillmentEvent>,
}

impl GroupBuyCoordinator {
    /// The receiver half carries each campaign's fulfillment event exactly
    /// once; the order subsystem consumes it.
    pub fn new(
        campaigns: Arc<CampaignStore>,
        events: mpsc::UnboundedSender<FulfillmentEvent>,
    ) -> Self {
        Self { campaigns, events }
    }

    pub async fn create(
        &self,
        product_id: Uuid,
        group_id: Uuid,
        target_quantity: u32,
        discount_pct: u8,
        deadline: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<GroupBuyCampaign> {
        if target_quantity == 0 {
            return Err(Error::InvalidInput(
                "target quantity must be positive".into(),
            ));
        }
        if discount_pct > 100 {
            return Err(Error::InvalidInput("discount percent above 100".into()));
        }
        if deadline <= now {
            return Err(Error::InvalidInput("deadline must be in the future".into()));
        }

        let campaign = GroupBuyCampaign {
            id: Uuid::new_v4(),
            product_id,
            group_id,
            target_quantity,
            current_quantity: 0,
            discount_pct,
            deadline,
            state: CampaignState::Open,
            created_at: now,
        };
        self.campaigns.create(campaign.clone()).await?;
        info!(
            campaign = %campaign.id,
            target = target_quantity,
            discount = discount_pct,
            "Created group-buy campaign"
        );
        Ok(campaign)
    }

    /// Upsert the caller's commitment to `quantity` units.
    ///
    /// The capacity check is against the change from the caller's existing
    /// quantity, so raising an existing commitment is checked against the
    /// remaining headroom exactly like a first join. Repeating a join with
    /// the same quantity is a no-op.
    pub async fn join(
        &self,
        campaign_id: Uuid,
        user_id: Uuid,
        quantity: u32,
        now: DateTime<Utc>,
    ) -> Result<JoinOutcome> {
        if quantity == 0 {
            return Err(Error::InvalidInput("quantity must be at least 1".into()));
        }

        let events = self.events.clone();
        self.campaigns
            .with(campaign_id, move |record| {
                expire_if_overdue(record, now);
                ensure_open(&record.campaign)?;

                let existing = record.participants.get(&user_id).copied().unwrap_or(0);
                if quantity < existing {
                    return Err(Error::InvalidInput(
                        "cannot lower a commitment via join; leave instead".into(),
                    ));
                }
                let delta = quantity - existing;
                let headroom = record.campaign.target_quantity - record.campaign.current_quantity;
                if delta > headroom {
                    return Err(Error::CapacityExceeded {
                        requested: delta,
                        headroom,
                    });
                }

                record.participants.insert(user_id, quantity);
                record.campaign.current_quantity += delta;

                let mut fulfilled = false;
                if record.campaign.current_quantity == record.campaign.target_quantity {
                    record.campaign.state = CampaignState::Fulfilled;
                    fulfilled = true;

                    let event = FulfillmentEvent {
                        campaign_id: record.campaign.id,
                        product_id: record.campaign.product_id,
                        group_id: record.campaign.group_id,
                        discount_pct: record.campaign.discount_pct,
                        participants: record.participant_rows(),
                        fulfilled_at: now,
                    };
                    info!(
                        campaign = %campaign_id,
                        quantity = record.campaign.current_quantity,
                        "Campaign fulfilled"
                    );
                    if events.send(event).is_err() {
                        warn!(campaign = %campaign_id, "No fulfillment consumer attached");
                    }
                }

                Ok(JoinOutcome {
                    state: record.campaign.state,
                    current_quantity: record.campaign.current_quantity,
                    fulfilled,
                })
            })
            .await
    }

    /// Remove the caller's commitment entirely.
    pub async fn leave(
        &self,
        campaign_id: Uuid,
        user_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<LeaveOutcome> {
        self.campaigns
            .with(campaign_id, move |record| {
                expire_if_overdue(record, now);
                ensure_open(&record.campaign)?;

                let quantity = record
                    .participants
                    .remove(&user_id)
                    .ok_or_else(|| Error::NotFound(format!("participant {user_id}")))?;
                record.campaign.current_quantity -= quantity;

                Ok(LeaveOutcome {
                    state: record.campaign.state,
                    current_quantity: record.campaign.current_quantity,
                })
            })
            .await
    }

    /// Administrative close of an open campaign. No charge or credit is
    /// applied to any participant.
    pub async fn cancel(&self, campaign_id: Uuid, now: DateTime<Utc>) -> Result<CampaignState> {
        self.campaigns
            .with(campaign_id, move |record| {
                expire_if_overdue(record, now);
                ensure_open(&record.campaign)?;
                record.campaign.state = CampaignState::Cancelled;
                Ok(record.campaign.state)
            })
            .await
    }

    /// Flip every overdue OPEN campaign to EXPIRED. Idempotent; safe to run
    /// repeatedly or on demand. Returns how many campaigns transitioned.
    pub async fn expire_sweep(&self, now: DateTime<Utc>) -> usize {
        let mut expired = 0;
        for id in self.campaigns.ids().await {
            let result = self
                .campaigns
                .with(id, move |record| Ok(expire_if_overdue(record, now)))
                .await;
            match result {
                Ok(true) => expired += 1,
                Ok(false) => {}
                // A contended or vanished campaign is picked up next sweep.
                Err(err) => warn!(campaign = %id, error = %err, "Sweep skipped campaign"),
            }
        }
        if expired > 0 {
            info!(count = expired, "Expired overdue campaigns");
        }
        expired
    }

    /// Read-consistent view of a campaign and its participants.
    pub async fn get(&self, campaign_id: Uuid) -> Result<CampaignView> {
        let (campaign, participants) = self.campaigns.read(campaign_id).await?;
        Ok(CampaignView {
            campaign,
            participants,
        })
    }
}

/// Lazy deadline check: an overdue OPEN campaign expires before the caller's
/// operation is considered. Returns whether a transition happened.
fn expire_if_overdue(record: &mut CampaignRecord, now: DateTime<Utc>) -> bool {
    let campaign = &mut record.campaign;
    if campaign.state == CampaignState::Open && now > campaign.deadline {
        campaign.state = CampaignState::Expired;
        return true;
    }
    false
}

fn ensure_open(campaign: &GroupBuyCampaign) -> Result<()> {
    match campaign.state {
        CampaignState::Open => Ok(()),
        CampaignState::Fulfilled => Err(Error::CampaignClosed("campaign already fulfilled".into())),
        CampaignState::Expired => Err(Error::CampaignClosed("campaign deadline passed".into())),
        CampaignState::Cancelled => Err(Error::CampaignClosed("campaign was cancelled".into())),
    }
}
