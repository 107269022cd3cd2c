//! Order finalization route
//!
//! The order subsystem reports a finalized order here; the core applies the
//! impact delta and answers with the buyer's new standing.

use axum::{extract::State, Json};
use chrono::Utc;
use engine::handler::{OrderImpact, OrderOutcome};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct FinalizeOrderRequest {
    pub user_id: Uuid,
    #[serde(default)]
    pub points: i64,
    #[serde(default)]
    pub carbon_g: i64,
    #[serde(default)]
    pub water_l: i64,
    #[serde(default)]
    pub waste_g: i64,
    /// True when the order came out of a fulfilled group buy
    #[serde(default)]
    pub group_buy: bool,
}

pub async fn finalize(
    State(state): State<Arc<AppState>>,
    Json(request): Json<FinalizeOrderRequest>,
) -> ApiResult<Json<OrderOutcome>> {
    let impact = OrderImpact {
        points: request.points,
        carbon_g: request.carbon_g,
        water_l: request.water_l,
        waste_g: request.waste_g,
    };
    let outcome = state
        .handler
        .order_finalized(request.user_id, impact, request.group_buy, Utc::now())
        .await?;
    Ok(Json(outcome))
}
