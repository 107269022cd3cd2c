//! EcoImpact API Server

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use api::{router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api=debug".parse()?)
                .add_directive("engine=debug".parse()?)
                .add_directive("store=debug".parse()?),
        )
        .init();

    info!("🌱 Starting EcoImpact API");

    let config = common::Config::from_env();
    let (state, mut events) = AppState::new(config.clone());
    let state = Arc::new(state);

    // Fulfillment consumer: credits participants as campaigns fill. Each
    // credit stands alone, so one failure never blocks the rest.
    {
        let state = state.clone();
        tokio::spawn(async move {
            while let Some(event) = events.recv().await {
                let failed = state
                    .handler
                    .campaign_fulfilled(&event, state.config.points_per_unit, Utc::now())
                    .await;
                if !failed.is_empty() {
                    warn!(
                        campaign = %event.campaign_id,
                        failed = failed.len(),
                        "Participant credits failed; retry individually"
                    );
                }
            }
        });
    }

    // Background expire sweep (if enabled). Joins and leaves also expire
    // overdue campaigns lazily, so this only bounds how stale a quiet
    // campaign can get.
    if config.sweep_interval_secs > 0 {
        let state = state.clone();
        let interval = Duration::from_secs(config.sweep_interval_secs);
        tokio::spawn(async move {
            loop {
                tokio::time::sleep(interval).await;
                state.coordinator.expire_sweep(Utc::now()).await;
            }
        });
        info!(
            "⏱️ Expire sweep enabled (every {}s)",
            config.sweep_interval_secs
        );
    } else {
        info!("⏱️ Expire sweep disabled (SWEEP_INTERVAL_SECS=0)");
    }

    let app = router(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.host, config.port);
    info!("🚀 Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
