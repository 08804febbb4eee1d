use axum::{
    http::{header, Method},
    Router,
};
use log::info;
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::config::SearchConfig;
use crate::graph::FlightNetwork;
use crate::web::api::{create_router, AppState};

/// Configuration for the web server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub enable_cors: bool,
    pub search: SearchConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3005,
            enable_cors: true,
            search: SearchConfig::default(),
        }
    }
}

/// Build the application router over a loaded network
pub fn build_app(network: FlightNetwork, config: &ServerConfig) -> Router {
    let app_state = AppState::new(network, config.search);
    let app = Router::new().merge(create_router()).with_state(app_state);

    if config.enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);
        app.layer(ServiceBuilder::new().layer(cors).into_inner())
    } else {
        app
    }
}

/// Start the web server with custom configuration
pub async fn start_server(
    network: FlightNetwork,
    config: ServerConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_app(network, &config);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    info!("Route finder API listening on http://{}", addr);
    println!("🚀 Route Finder API starting on http://{}", addr);
    println!("📊 Endpoints under http://{}/api", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
