//! Impact ledger routes

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use common::models::{ImpactDelta, ImpactSnapshot, MonthlySample, RewardDef};
use common::Error;
use engine::forecast::{self, ProjectedTotals};
use engine::tiers::{self, TierStanding, TierTable};
use engine::rewards as reward_catalog;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Serialize)]
pub struct SnapshotResponse {
    pub entity_id: Uuid,
    #[serde(flatten)]
    pub snapshot: ImpactSnapshot,
    pub standing: TierStanding,
}

#[derive(Serialize)]
pub struct RewardsResponse {
    pub entity_id: Uuid,
    pub unlocked: Vec<&'static RewardDef>,
}

#[derive(Deserialize)]
pub struct TierQuery {
    pub points: u64,
    #[serde(default)]
    pub table: TierTable,
}

#[derive(Deserialize)]
pub struct ProjectionQuery {
    #[serde(default = "default_horizon")]
    pub horizon_months: u32,
}

fn default_horizon() -> u32 {
    12
}

/// Projection outcome: thin history is a state, not a failure.
#[derive(Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ProjectionResponse {
    Ready {
        #[serde(flatten)]
        totals: ProjectedTotals,
    },
    InsufficientHistory {
        samples: usize,
        needed: usize,
    },
}

/// Apply one impact delta to an entity's ledger
pub async fn apply(
    State(state): State<Arc<AppState>>,
    Path(entity): Path<Uuid>,
    Json(delta): Json<ImpactDelta>,
) -> ApiResult<Json<SnapshotResponse>> {
    let snapshot = state.ledger.apply(entity, &delta, Utc::now()).await?;
    Ok(Json(respond(entity, snapshot)))
}

pub async fn snapshot(
    State(state): State<Arc<AppState>>,
    Path(entity): Path<Uuid>,
) -> ApiResult<Json<SnapshotResponse>> {
    let snapshot = state.ledger.snapshot(entity).await?;
    Ok(Json(respond(entity, snapshot)))
}

/// Rewards unlocked by the entity's current counters, recomputed per query
pub async fn rewards(
    State(state): State<Arc<AppState>>,
    Path(entity): Path<Uuid>,
) -> ApiResult<Json<RewardsResponse>> {
    let snapshot = state.ledger.snapshot(entity).await?;
    Ok(Json(RewardsResponse {
        entity_id: entity,
        unlocked: reward_catalog::unlocked(&snapshot),
    }))
}

/// Evaluate a point total against a threshold table
pub async fn tier(Query(query): Query<TierQuery>) -> Json<TierStanding> {
    Json(tiers::tier_for(query.points, query.table))
}

/// Linear projection over the entity's monthly history. Group histories are
/// merged from the members' ledgers.
pub async fn projection(
    State(state): State<Arc<AppState>>,
    Path(entity): Path<Uuid>,
    Query(query): Query<ProjectionQuery>,
) -> ApiResult<Json<ProjectionResponse>> {
    let samples = entity_history(&state, entity).await?;

    match forecast::project(&samples, query.horizon_months) {
        Ok(totals) => Ok(Json(ProjectionResponse::Ready { totals })),
        Err(Error::InsufficientHistory { got, need }) => {
            Ok(Json(ProjectionResponse::InsufficientHistory {
                samples: got,
                needed: need,
            }))
        }
        Err(err) => Err(err.into()),
    }
}

async fn entity_history(
    state: &AppState,
    entity: Uuid,
) -> Result<Vec<MonthlySample>, common::Error> {
    if state.groups.get(entity).await.is_ok() {
        let mut histories = Vec::new();
        for member in state.groups.members(entity).await? {
            histories.push(state.ledger.snapshot(member).await?.history);
        }
        let slices: Vec<&[MonthlySample]> = histories.iter().map(|h| h.as_slice()).collect();
        Ok(forecast::merge_histories(&slices))
    } else {
        Ok(state.ledger.snapshot(entity).await?.history)
    }
}

fn respond(entity_id: Uuid, snapshot: ImpactSnapshot) -> SnapshotResponse {
    let standing = tiers::tier_for(snapshot.points, TierTable::Users);
    SnapshotResponse {
        entity_id,
        snapshot,
        standing,
    }
}
