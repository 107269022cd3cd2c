//! Keyed registry of independently locked records

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};
use tokio::time::timeout;
use uuid::Uuid;

use common::{Error, Result};

use crate::LockBounds;

/// Records keyed by id, each behind its own mutex.
///
/// The outer map lock is only held to fetch or insert an `Arc`, never while
/// a record lock is being waited on.
pub(crate) struct Registry<V> {
    records: RwLock<HashMap<Uuid, Arc<Mutex<V>>>>,
    bounds: LockBounds,
}

impl<V> Registry<V> {
    pub fn new(bounds: LockBounds) -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            bounds,
        }
    }

    pub async fn get(&self, id: &Uuid) -> Option<Arc<Mutex<V>>> {
        self.records.read().await.get(id).cloned()
    }

    /// Insert a fresh record, failing if the id is already taken.
    pub async fn insert(&self, id: Uuid, value: V) -> Result<()> {
        let mut records = self.records.write().await;
        if records.contains_key(&id) {
            return Err(Error::InvalidInput(format!("duplicate id {id}")));
        }
        records.insert(id, Arc::new(Mutex::new(value)));
        Ok(())
    }

    pub async fn ids(&self) -> Vec<Uuid> {
        self.records.read().await.keys().copied().collect()
    }

    /// Acquire a record lock with a bounded wait, retried up to the
    /// configured attempt count, then `Contended`.
    pub async fn lock(&self, record: Arc<Mutex<V>>) -> Result<OwnedMutexGuard<V>> {
        for _ in 0..self.bounds.retries {
            if let Ok(guard) = timeout(self.bounds.wait, record.clone().lock_owned()).await {
                return Ok(guard);
            }
        }
        Err(Error::Contended)
    }
}

impl<V: Default> Registry<V> {
    /// Fetch a record, creating an empty one on first touch.
    pub async fn get_or_default(&self, id: Uuid) -> Arc<Mutex<V>> {
        if let Some(record) = self.get(&id).await {
            return record;
        }
        let mut records = self.records.write().await;
        records
            .entry(id)
            .or_insert_with(|| Arc::new(Mutex::new(V::default())))
            .clone()
    }
}
