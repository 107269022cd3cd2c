//! Product scoring routes

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use common::models::{Product, ProductTier, SustainabilityProfile};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Serialize)]
pub struct ScoreResponse {
    pub score: u16,
    pub tier: ProductTier,
}

#[derive(Deserialize)]
pub struct UpsertProductRequest {
    pub category: String,
    pub profile: SustainabilityProfile,
}

#[derive(Serialize)]
pub struct ProductResponse {
    #[serde(flatten)]
    pub product: Product,
    /// Derived from the stored score on every read
    pub tier: ProductTier,
}

/// Score a profile without storing anything
pub async fn compute(Json(profile): Json<SustainabilityProfile>) -> Json<ScoreResponse> {
    let score = engine::score::compute(&profile);
    Json(ScoreResponse {
        score,
        tier: engine::score::tier_for_score(score),
    })
}

/// Store a product's declared attributes and recompute its EcoScore
pub async fn upsert(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpsertProductRequest>,
) -> ApiResult<Json<ProductResponse>> {
    if request.category.trim().is_empty() {
        return Err(ApiError::Validation("category must not be empty".into()));
    }

    let now = Utc::now();
    let eco_score = engine::score::compute(&request.profile);
    let product = state
        .products
        .upsert(Product {
            id,
            category: request.category.trim().to_string(),
            profile: request.profile,
            eco_score,
            created_at: now,
            updated_at: now,
        })
        .await;

    info!(product = %id, score = eco_score, "Scored product");
    Ok(Json(ProductResponse {
        tier: engine::score::tier_for_score(product.eco_score),
        product,
    }))
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ProductResponse>> {
    let product = state
        .products
        .get(id)
        .await
        .ok_or_else(|| ApiError::NotFound(format!("Product {id} not found")))?;

    Ok(Json(ProductResponse {
        tier: engine::score::tier_for_score(product.eco_score),
        product,
    }))
}

pub async fn score(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ScoreResponse>> {
    let product = state
        .products
        .get(id)
        .await
        .ok_or_else(|| ApiError::NotFound(format!("Product {id} not found")))?;

    Ok(Json(ScoreResponse {
        score: product.eco_score,
        tier: engine::score::tier_for_score(product.eco_score),
    }))
}
