//! Group management routes

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use common::models::{Group, ImpactSnapshot};
use engine::tiers::{self, TierStanding, TierTable};
use engine::ImpactLedger;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateGroupRequest {
    pub name: String,
}

#[derive(Deserialize)]
pub struct AddMemberRequest {
    pub user_id: Uuid,
}

#[derive(Serialize)]
pub struct MembershipResponse {
    pub group_id: Uuid,
    pub user_id: Uuid,
    pub changed: bool,
}

/// A group plus its rolled-up impact, derived from member ledgers on read
#[derive(Serialize)]
pub struct GroupSummary {
    pub group: Group,
    pub members: Vec<Uuid>,
    pub totals: ImpactSnapshot,
    pub standing: TierStanding,
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateGroupRequest>,
) -> ApiResult<Json<Group>> {
    let group = state.groups.create(&request.name, Utc::now()).await?;
    Ok(Json(group))
}

pub async fn list(State(state): State<Arc<AppState>>) -> Json<Vec<Group>> {
    Json(state.groups.list().await)
}

pub async fn add_member(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(request): Json<AddMemberRequest>,
) -> ApiResult<Json<MembershipResponse>> {
    let changed = state.groups.add_member(id, request.user_id).await?;
    Ok(Json(MembershipResponse {
        group_id: id,
        user_id: request.user_id,
        changed,
    }))
}

pub async fn remove_member(
    State(state): State<Arc<AppState>>,
    Path((id, user_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<Json<MembershipResponse>> {
    let changed = state.groups.remove_member(id, user_id).await?;
    Ok(Json(MembershipResponse {
        group_id: id,
        user_id,
        changed,
    }))
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<GroupSummary>> {
    let group = state.groups.get(id).await?;
    let members = state.groups.members(id).await?;

    let mut snapshots = Vec::with_capacity(members.len());
    for member in &members {
        snapshots.push(state.ledger.snapshot(*member).await?);
    }
    let totals = ImpactLedger::roll_up(&snapshots);
    let standing = tiers::tier_for(totals.points, TierTable::Groups);

    Ok(Json(GroupSummary {
        group,
        members,
        totals,
        standing,
    }))
}
