//! Group-buy campaign records

use std::collections::HashMap;

use common::models::{GroupBuyCampaign, Participant};
use common::{Error, Result};
use uuid::Uuid;

use crate::registry::Registry;
use crate::LockBounds;

/// A campaign and its participant rows, locked and mutated as one unit so
/// the quantity sum invariant can never be observed broken.
pub struct CampaignRecord {
    pub campaign: GroupBuyCampaign,
    pub participants: HashMap<Uuid, u32>,
}

impl CampaignRecord {
    pub fn new(campaign: GroupBuyCampaign) -> Self {
        Self {
            campaign,
            participants: HashMap::new(),
        }
    }

    /// Participant rows in a stable order
    pub fn participant_rows(&self) -> Vec<Participant> {
        let mut rows: Vec<Participant> = self
            .participants
            .iter()
            .map(|(user_id, quantity)| Participant {
                campaign_id: self.campaign.id,
                user_id: *user_id,
                quantity: *quantity,
            })
            .collect();
        rows.sort_by_key(|p| p.user_id);
        rows
    }
}

/// Holds every campaign, keyed by campaign id. All mutation goes through
/// `with`, which serializes per campaign.
pub struct CampaignStore {
    registry: Registry<CampaignRecord>,
}

impl CampaignStore {
    pub fn new(bounds: LockBounds) -> Self {
        Self {
            registry: Registry::new(bounds),
        }
    }

    pub async fn create(&self, campaign: GroupBuyCampaign) -> Result<()> {
        self.registry
            .insert(campaign.id, CampaignRecord::new(campaign))
            .await
    }

    /// Run `f` on the campaign record under its lock. `f` may fail; a failed
    /// call must leave the record exactly as it found it.
    pub async fn with<T>(
        &self,
        campaign_id: Uuid,
        f: impl FnOnce(&mut CampaignRecord) -> Result<T>,
    ) -> Result<T> {
        let record = self
            .registry
            .get(&campaign_id)
            .await
            .ok_or_else(|| Error::NotFound(format!("campaign {campaign_id}")))?;
        let mut guard = self.registry.lock(record).await?;
        f(&mut guard)
    }

    /// Read-consistent view of a campaign and its participants.
    pub async fn read(&self, campaign_id: Uuid) -> Result<(GroupBuyCampaign, Vec<Participant>)> {
        let record = self
            .registry
            .get(&campaign_id)
            .await
            .ok_or_else(|| Error::NotFound(format!("campaign {campaign_id}")))?;
        let guard = self.registry.lock(record).await?;
        Ok((guard.campaign.clone(), guard.participant_rows()))
    }

    pub async fn ids(&self) -> Vec<Uuid> {
        self.registry.ids().await
    }
}
