use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::game_controller::GameController;
use crate::dto::game_dto::{DashboardResponse, VehicleListResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard))
        .route("/vehicles", get(list_vehicles))
}

async fn dashboard(State(state): State<AppState>) -> Result<Json<DashboardResponse>, AppError> {
    let controller = GameController::new(state.repositories.clone());
    let dashboard = controller.dashboard().await?;

    Ok(Json(DashboardResponse {
        title: "Dashboard",
        cities: dashboard.cities,
        vehicles: dashboard.vehicles,
        routes: dashboard.routes,
    }))
}

async fn list_vehicles(State(state): State<AppState>) -> Result<Json<VehicleListResponse>, AppError> {
    let controller = GameController::new(state.repositories.clone());
    let vehicles = controller.list_vehicles().await?;

    Ok(Json(VehicleListResponse {
        title: "Vehicles",
        vehicles,
    }))
}
