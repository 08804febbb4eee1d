use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::Utc;
use log::info;
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::compare::compare_all;
use crate::algorithm::Criterion;
use crate::config::SearchConfig;
use crate::graph::{City, FlightNetwork, NetworkStats};
use crate::web::models::*;

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Shared application state.
///
/// The network is loaded once and only read afterwards, so handlers share it
/// without locking; each request owns its own search state.
#[derive(Clone)]
pub struct AppState {
    pub network: Arc<FlightNetwork>,
    pub config: SearchConfig,
}

impl AppState {
    pub fn new(network: FlightNetwork, config: SearchConfig) -> Self {
        Self {
            network: Arc::new(network),
            config,
        }
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/routes/search", post(search_routes))
        .route("/api/routes/compare", post(compare_routes))
        .route("/api/cities", get(list_cities))
        .route("/api/cities/:code", get(get_city))
        .route("/api/stats", get(network_stats))
        .route("/api/health", get(health_check))
}

/// Upper-cases a code and rejects codes the network has never heard of
fn resolve_code(network: &FlightNetwork, raw: &str) -> Result<String, ApiError> {
    let code = raw.trim().to_ascii_uppercase();
    if network.city(&code).is_some() || network.node_id(&code).is_some() {
        Ok(code)
    } else {
        Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("unknown_city", format!("Unknown city code: {}", raw))),
        ))
    }
}

/// Run one search between two cities
pub async fn search_routes(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let criterion: Criterion = request.criterion.parse().map_err(|err: crate::Error| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("invalid_criterion", err.to_string())),
        )
    })?;
    let source = resolve_code(&state.network, &request.source)?;
    let target = resolve_code(&state.network, &request.target)?;

    let start_time = Instant::now();
    let routes = criterion.search(&state.network, &source, &target, &state.config);
    let execution_time = start_time.elapsed();

    info!(
        "{} search {} -> {}: {} routes in {:?}",
        criterion,
        source,
        target,
        routes.len(),
        execution_time
    );

    Ok(Json(SearchResponse {
        query_id: Uuid::new_v4(),
        criterion: criterion.to_string(),
        source,
        target,
        executed_at: Utc::now(),
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
        route_count: routes.len(),
        routes,
    }))
}

/// Compare cheapest, fastest and minimum-stop itineraries
pub async fn compare_routes(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> Result<Json<CompareResponse>, ApiError> {
    let source = resolve_code(&state.network, &request.source)?;
    let target = resolve_code(&state.network, &request.target)?;

    let start_time = Instant::now();
    let comparison = compare_all(&state.network, &source, &target, &state.config);
    let execution_time = start_time.elapsed();

    Ok(Json(CompareResponse {
        query_id: Uuid::new_v4(),
        source,
        target,
        executed_at: Utc::now(),
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
        comparison,
    }))
}

/// All cities ordered by code
pub async fn list_cities(State(state): State<AppState>) -> Json<Vec<City>> {
    Json(state.network.cities_sorted().into_iter().cloned().collect())
}

/// Metadata of one city
pub async fn get_city(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<City>, ApiError> {
    let code = code.trim().to_ascii_uppercase();
    match state.network.city(&code) {
        Some(city) => Ok(Json(city.clone())),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("city_not_found", format!("City not found: {}", code))),
        )),
    }
}

/// Network statistics with the five busiest hubs
pub async fn network_stats(State(state): State<AppState>) -> Json<NetworkStats> {
    Json(state.network.stats(5))
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
