use anyhow::{Context, Result};
use axum::{
    Router,
    http::{HeaderName, Method, header},
    response::Json,
    routing::get,
};
use serde_json::{Value, json};
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::api::{self, AppState};
use crate::config::WanderlyConfig;
use crate::route_generation::RouteGenerationService;
use crate::weather::WeatherLookupService;

/// Any origin; the headers browser clients send alongside the JSON body
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
        ])
}

/// Requests still running after `request_timeout` are answered with 408
pub fn app(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .nest("/api", api::router(state))
        .route("/health", get(health))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn run(config: &WanderlyConfig) -> Result<()> {
    if config.ai.api_key.is_none() {
        tracing::warn!("No AI gateway API key configured; route generation requests will fail");
    }

    let state = AppState::new(
        RouteGenerationService::new(&config.ai)?,
        WeatherLookupService::new(&config.weather)?,
    );

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Web server running at http://{}", addr);

    axum::serve(listener, app(state, config.request_timeout()))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Web server terminated unexpectedly")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}
