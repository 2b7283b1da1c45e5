// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::costs_service::CostsService;
use crate::application::overview_service::OverviewService;
use crate::application::reports_service::ReportsService;
use crate::application::trends_service::TrendsService;
use crate::application::venues_service::VenuesService;
use crate::infrastructure::config::{load_sample_profile, load_service_config};
use crate::infrastructure::mock_api::MockAnalyticsApi;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    costs_page, health_check, list_filters, overview_page, reports_page, trends_page, venues_page,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let service_config = load_service_config().context("loading service config")?;
    let sample_profile = load_sample_profile().context("loading sample profile")?;

    // Create the analytics backend (infrastructure layer)
    let api = Arc::new(MockAnalyticsApi::new(sample_profile, &service_config.api));

    // Create page services (application layer)
    let policy = service_config.store.stale_policy.to_policy();
    let state = Arc::new(AppState {
        overview: OverviewService::new(api.clone(), policy),
        trends: TrendsService::new(api.clone(), policy),
        costs: CostsService::new(api.clone(), policy),
        venues: VenuesService::new(api.clone(), policy),
        reports: ReportsService::new(api, policy),
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/filters", get(list_filters))
        .route("/pages/overview", get(overview_page))
        .route("/pages/trends", get(trends_page))
        .route("/pages/costs", get(costs_page))
        .route("/pages/venues", get(venues_page))
        .route("/pages/reports", get(reports_page))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = service_config
        .server
        .bind
        .parse()
        .context("invalid server bind address")?;
    tracing::info!("starting canteen-analytics service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
