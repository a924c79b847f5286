use std::sync::Arc;

use axum::{
    Router,
    extract::{State, rejection::JsonRejection},
    response::Json,
    routing::post,
};
use tracing::warn;

use crate::{
    WanderlyError,
    models::{
        BudgetEstimate, BudgetRequest, RouteItinerary, RouteRequest, WeatherQuery,
        WeatherSnapshot, estimate_budget,
    },
    route_generation::RouteGenerationService,
    weather::WeatherLookupService,
};

/// Services shared by all handlers. Both are stateless; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub route_service: Arc<RouteGenerationService>,
    pub weather_service: Arc<WeatherLookupService>,
}

impl AppState {
    #[must_use]
    pub fn new(
        route_service: RouteGenerationService,
        weather_service: WeatherLookupService,
    ) -> Self {
        Self {
            route_service: Arc::new(route_service),
            weather_service: Arc::new(weather_service),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/generate-route", post(generate_route))
        .route("/get-weather", post(get_weather))
        .route("/estimate-budget", post(estimate_trip_budget))
        .with_state(state)
}

fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, WanderlyError> {
    payload.map(|Json(value)| value).map_err(|rejection| {
        warn!("Rejected request body: {}", rejection.body_text());
        WanderlyError::validation("Invalid request body")
    })
}

async fn generate_route(
    State(state): State<AppState>,
    payload: Result<Json<RouteRequest>, JsonRejection>,
) -> Result<Json<RouteItinerary>, WanderlyError> {
    let request = body(payload)?;
    let itinerary = state.route_service.generate(&request).await?;
    Ok(Json(itinerary))
}

async fn get_weather(
    State(state): State<AppState>,
    payload: Result<Json<WeatherQuery>, JsonRejection>,
) -> Result<Json<WeatherSnapshot>, WanderlyError> {
    let query = body(payload)?;
    let snapshot = state.weather_service.lookup(&query).await?;
    Ok(Json(snapshot))
}

async fn estimate_trip_budget(
    payload: Result<Json<BudgetRequest>, JsonRejection>,
) -> Result<Json<BudgetEstimate>, WanderlyError> {
    let request = body(payload)?;
    Ok(Json(estimate_budget(request)?))
}
