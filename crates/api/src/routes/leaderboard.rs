//! Leaderboard routes
//!
//! Rankings are derived from ledger snapshots at query time; nothing here
//! is cached or stored.

use axum::{
    extract::{Query, State},
    Json,
};
use common::models::LeaderboardEntry;
use engine::tiers::{self, TierTable};
use engine::ImpactLedger;
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    #[default]
    Users,
    Groups,
}

#[derive(Deserialize)]
pub struct LeaderboardQuery {
    #[serde(default)]
    pub scope: Scope,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    20
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LeaderboardQuery>,
) -> ApiResult<Json<Vec<LeaderboardEntry>>> {
    let limit = query.limit.clamp(1, 100);
    let (table, mut totals) = match query.scope {
        Scope::Users => (TierTable::Users, user_totals(&state).await?),
        Scope::Groups => (TierTable::Groups, group_totals(&state).await?),
    };

    totals.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    let entries = totals
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(idx, (entity_id, points))| LeaderboardEntry {
            rank: (idx + 1) as u32,
            entity_id,
            points,
            tier: tiers::tier_for(points, table).tier,
        })
        .collect();

    Ok(Json(entries))
}

async fn user_totals(state: &AppState) -> Result<Vec<(Uuid, u64)>, common::Error> {
    let mut totals = Vec::new();
    for entity in state.ledger.entity_ids().await {
        let snapshot = state.ledger.snapshot(entity).await?;
        totals.push((entity, snapshot.points));
    }
    Ok(totals)
}

async fn group_totals(state: &AppState) -> Result<Vec<(Uuid, u64)>, common::Error> {
    let mut totals = Vec::new();
    for group in state.groups.list().await {
        let mut snapshots = Vec::new();
        for member in state.groups.members(group.id).await? {
            snapshots.push(state.ledger.snapshot(member).await?);
        }
        totals.push((group.id, ImpactLedger::roll_up(&snapshots).points));
    }
    Ok(totals)
}
