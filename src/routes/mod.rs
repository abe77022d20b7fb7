//! Rutas HTTP
//!
//! `/` portada, `/game` lectura, `/create` escritura.

pub mod create_routes;
pub mod game_routes;

use axum::{
    http::{Method, Uri},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::dto::game_dto::LandingResponse;
use crate::middleware::cors_middleware;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Construir el router completo de la aplicación
pub fn create_app_router(state: AppState) -> Router {
    let cors = cors_middleware(&state.config.cors_origins);

    Router::new()
        .route("/", get(landing))
        .route("/health", get(health))
        .nest("/game", game_routes::create_router())
        .nest("/create", create_routes::create_router())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn landing() -> Json<LandingResponse> {
    Json(LandingResponse {
        title: "Home",
        message: "Register cities and vehicles, then plan routes between them",
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn not_found(method: Method, uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {} {}", method, uri.path()))
}
