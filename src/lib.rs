//! Catálogo de vehículos Ford
//!
//! Aplicación web que construye vehículos con Factory Method + Builder y los
//! guarda en un repositorio en memoria. `main.rs` es la raíz de composición;
//! aquí solo se exponen los módulos y el router para poder probarlo.

pub mod builders;
pub mod config;
pub mod controllers;
pub mod dto;
pub mod factories;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;
pub mod views;

use axum::{response::Json, routing::get, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use state::AppState;

/// Construir el router completo de la aplicación
pub fn create_app(state: AppState) -> Router {
    let cors = if state.config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(state.config.cors_origins.clone())
    };

    Router::new()
        .route("/health", get(health_endpoint))
        .merge(routes::home_routes::create_home_router())
        .nest("/api/vehicles", routes::vehicle_routes::create_vehicle_router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Endpoint de salud simple
async fn health_endpoint(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> Json<serde_json::Value> {
    Json(json!({
        "message": "¡Catálogo de vehículos funcionando correctamente!",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "vehicles": state.repository.count().await,
    }))
}
