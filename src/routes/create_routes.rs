use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::post,
    Json, Router,
};

use crate::controllers::city_controller::CityController;
use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::city_dto::CreateCityRequest;
use crate::dto::route_dto::CreateRouteRequest;
use crate::dto::vehicle_dto::CreateVehicleRequest;
use crate::services::RouteWorkflowError;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::JsonOrForm;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/city", post(create_city))
        .route("/vehicle", post(create_vehicle))
        .route("/route", post(create_route))
}

async fn create_city(
    State(state): State<AppState>,
    JsonOrForm(request): JsonOrForm<CreateCityRequest>,
) -> Result<Response, AppError> {
    let controller = CityController::new(state.repositories.cities.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::OK, Json(response)).into_response())
}

async fn create_vehicle(
    State(state): State<AppState>,
    JsonOrForm(request): JsonOrForm<CreateVehicleRequest>,
) -> Result<Response, AppError> {
    let controller = VehicleController::new(state.repositories.vehicles.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)).into_response())
}

/// Runs the route assembly workflow and redirects to the dashboard
async fn create_route(
    State(state): State<AppState>,
    JsonOrForm(request): JsonOrForm<CreateRouteRequest>,
) -> Result<Redirect, RouteWorkflowError> {
    state.route_assembly().assemble(&request).await?;
    Ok(Redirect::to("/game"))
}
