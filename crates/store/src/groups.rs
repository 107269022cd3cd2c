//! Group membership records

use std::collections::{BTreeSet, HashMap};

use chrono::{DateTime, Utc};
use common::models::Group;
use common::{Error, Result};
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

struct GroupRecord {
    group: Group,
    members: BTreeSet<Uuid>,
}

/// Groups and their member sets.
///
/// Group impact totals are not stored here: they are always rolled up from
/// member ledgers, so membership is the only state a group owns.
pub struct GroupStore {
    groups: RwLock<HashMap<Uuid, GroupRecord>>,
}

impl GroupStore {
    pub fn new() -> Self {
        Self {
            groups: RwLock::new(HashMap::new()),
        }
    }

    pub async fn create(&self, name: &str, now: DateTime<Utc>) -> Result<Group> {
        if name.trim().is_empty() {
            return Err(Error::InvalidInput("group name must not be empty".into()));
        }
        let group = Group {
            id: Uuid::new_v4(),
            name: name.trim().to_string(),
            created_at: now,
        };
        self.groups.write().await.insert(
            group.id,
            GroupRecord {
                group: group.clone(),
                members: BTreeSet::new(),
            },
        );
        info!("Created group '{}' ({})", group.name, group.id);
        Ok(group)
    }

    /// Returns false if the user was already a member.
    pub async fn add_member(&self, group_id: Uuid, user_id: Uuid) -> Result<bool> {
        let mut groups = self.groups.write().await;
        let record = groups
            .get_mut(&group_id)
            .ok_or_else(|| Error::NotFound(format!("group {group_id}")))?;
        Ok(record.members.insert(user_id))
    }

    /// Returns false if the user was not a member.
    pub async fn remove_member(&self, group_id: Uuid, user_id: Uuid) -> Result<bool> {
        let mut groups = self.groups.write().await;
        let record = groups
            .get_mut(&group_id)
            .ok_or_else(|| Error::NotFound(format!("group {group_id}")))?;
        Ok(record.members.remove(&user_id))
    }

    pub async fn get(&self, group_id: Uuid) -> Result<Group> {
        self.groups
            .read()
            .await
            .get(&group_id)
            .map(|r| r.group.clone())
            .ok_or_else(|| Error::NotFound(format!("group {group_id}")))
    }

    pub async fn members(&self, group_id: Uuid) -> Result<Vec<Uuid>> {
        self.groups
            .read()
            .await
            .get(&group_id)
            .map(|r| r.members.iter().copied().collect())
            .ok_or_else(|| Error::NotFound(format!("group {group_id}")))
    }

    pub async fn list(&self) -> Vec<Group> {
        let mut all: Vec<Group> = self
            .groups
            .read()
            .await
            .values()
            .map(|r| r.group.clone())
            .collect();
        all.sort_by_key(|g| g.created_at);
        all
    }
}

impl Default for GroupStore {
    fn default() -> Self {
        Self::new()
    }
}
