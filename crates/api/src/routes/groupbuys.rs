//! Group-buy campaign routes

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use common::models::{CampaignState, GroupBuyCampaign};
use engine::groupbuy::{CampaignView, JoinOutcome, LeaveOutcome};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateCampaignRequest {
    pub product_id: Uuid,
    pub group_id: Uuid,
    pub target_quantity: u32,
    pub discount_pct: u8,
    pub deadline: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct JoinRequest {
    pub user_id: Uuid,
    pub quantity: u32,
}

#[derive(Deserialize)]
pub struct LeaveRequest {
    pub user_id: Uuid,
}

#[derive(Serialize)]
pub struct CancelResponse {
    pub state: CampaignState,
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateCampaignRequest>,
) -> ApiResult<Json<GroupBuyCampaign>> {
    // The campaign must point at real records before it opens.
    if state.products.get(request.product_id).await.is_none() {
        return Err(ApiError::NotFound(format!(
            "Product {} not found",
            request.product_id
        )));
    }
    state.groups.get(request.group_id).await?;

    let campaign = state
        .coordinator
        .create(
            request.product_id,
            request.group_id,
            request.target_quantity,
            request.discount_pct,
            request.deadline,
            Utc::now(),
        )
        .await?;
    Ok(Json(campaign))
}

pub async fn join(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(request): Json<JoinRequest>,
) -> ApiResult<Json<JoinOutcome>> {
    let outcome = state
        .coordinator
        .join(id, request.user_id, request.quantity, Utc::now())
        .await?;
    Ok(Json(outcome))
}

pub async fn leave(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(request): Json<LeaveRequest>,
) -> ApiResult<Json<LeaveOutcome>> {
    let outcome = state
        .coordinator
        .leave(id, request.user_id, Utc::now())
        .await?;
    Ok(Json(outcome))
}

pub async fn cancel(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<CancelResponse>> {
    let state_after = state.coordinator.cancel(id, Utc::now()).await?;
    Ok(Json(CancelResponse { state: state_after }))
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<CampaignView>> {
    Ok(Json(state.coordinator.get(id).await?))
}
