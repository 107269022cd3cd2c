//! Per-entity impact ledger records

use common::models::ImpactSnapshot;
use common::Result;
use uuid::Uuid;

use crate::registry::Registry;
use crate::LockBounds;

/// Holds one ledger per user or group, keyed by entity id.
///
/// A ledger comes into existence empty the first time it is touched; there
/// is no separate registration step.
pub struct LedgerStore {
    registry: Registry<ImpactSnapshot>,
}

impl LedgerStore {
    pub fn new(bounds: LockBounds) -> Self {
        Self {
            registry: Registry::new(bounds),
        }
    }

    /// Run `f` on the entity's ledger under its lock.
    ///
    /// All validation must happen before calling this; `f` itself must not
    /// fail so a ledger is never left half-updated.
    pub async fn with<T>(
        &self,
        entity_id: Uuid,
        f: impl FnOnce(&mut ImpactSnapshot) -> T,
    ) -> Result<T> {
        let record = self.registry.get_or_default(entity_id).await;
        let mut guard = self.registry.lock(record).await?;
        Ok(f(&mut guard))
    }

    /// Read-consistent clone of the entity's ledger. An entity that was
    /// never credited reads as an empty ledger.
    pub async fn read(&self, entity_id: Uuid) -> Result<ImpactSnapshot> {
        match self.registry.get(&entity_id).await {
            Some(record) => {
                let guard = self.registry.lock(record).await?;
                Ok(guard.clone())
            }
            None => Ok(ImpactSnapshot::default()),
        }
    }

    /// Every entity that has ever been credited
    pub async fn entity_ids(&self) -> Vec<Uuid> {
        self.registry.ids().await
    }
}
