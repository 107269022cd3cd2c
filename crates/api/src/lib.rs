//! EcoImpact API surface
//!
//! Thin axum layer over the engine: route handlers translate HTTP shapes to
//! core operations and map the core error taxonomy onto status codes.

use std::sync::Arc;

use axum::routing::{delete, get, post, put};
use axum::Router;

pub mod error;
pub mod routes;
pub mod state;

pub use state::AppState;

/// Build the API router over shared state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(routes::health::health))
        .route("/api/scores/compute", post(routes::products::compute))
        .route(
            "/api/products/:id",
            put(routes::products::upsert).get(routes::products::get),
        )
        .route("/api/products/:id/score", get(routes::products::score))
        .route("/api/impact/:entity/apply", post(routes::impact::apply))
        .route("/api/impact/:entity", get(routes::impact::snapshot))
        .route("/api/impact/:entity/rewards", get(routes::impact::rewards))
        .route(
            "/api/impact/:entity/projection",
            get(routes::impact::projection),
        )
        .route("/api/tiers", get(routes::impact::tier))
        .route("/api/leaderboard", get(routes::leaderboard::get))
        .route(
            "/api/groups",
            post(routes::groups::create).get(routes::groups::list),
        )
        .route("/api/groups/:id", get(routes::groups::get))
        .route("/api/groups/:id/members", post(routes::groups::add_member))
        .route(
            "/api/groups/:id/members/:user_id",
            delete(routes::groups::remove_member),
        )
        .route("/api/group-buys", post(routes::groupbuys::create))
        .route("/api/group-buys/:id", get(routes::groupbuys::get))
        .route("/api/group-buys/:id/join", post(routes::groupbuys::join))
        .route("/api/group-buys/:id/leave", post(routes::groupbuys::leave))
        .route("/api/group-buys/:id/cancel", post(routes::groupbuys::cancel))
        .route("/api/orders/finalize", post(routes::orders::finalize))
        .with_state(state)
}
