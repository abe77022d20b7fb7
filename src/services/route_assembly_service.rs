//! Flujo de creación de rutas
//!
//! Convierte una petición (ciudad de origen, ciudad de destino, vehículo)
//! en una ruta guardada:
//!
//! Received → CitiesResolved → DistanceResolved → CostComputed → Persisted → Done
//!
//! Cualquier etapa puede fallar; el error indica la última etapa alcanzada.
//! No se escribe nada si alguna etapa anterior falló, y los identificadores
//! se comprueban antes de llamar a la API de distancias.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

use super::cost_model::{self, RevenueError, VehicleProfile};
use super::distance_service::{DistanceError, DistanceResolver};
use crate::dto::route_dto::CreateRouteRequest;
use crate::models::{City, CityId, NewRoute, Route, Vehicle, VehicleId};
use crate::repositories::{CityRepository, Repositories, RouteRepository, VehicleRepository};
use crate::utils::errors::{AppError, ErrorResponse};
use crate::utils::validation::parse_id;

/// Time string stored when the vehicle has no usable speed
pub const UNKNOWN_DURATION: &str = "unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteStage {
    Received,
    CitiesResolved,
    DistanceResolved,
    CostComputed,
    Persisted,
    Done,
}

impl fmt::Display for RouteStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RouteStage::Received => "received",
            RouteStage::CitiesResolved => "cities_resolved",
            RouteStage::DistanceResolved => "distance_resolved",
            RouteStage::CostComputed => "cost_computed",
            RouteStage::Persisted => "persisted",
            RouteStage::Done => "done",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum RouteFailure {
    #[error("{0}")]
    InvalidIdentifier(String),

    #[error("Invalid city or vehicle ID: start city {0} not found")]
    StartCityNotFound(CityId),

    #[error("Invalid city or vehicle ID: end city {0} not found")]
    EndCityNotFound(CityId),

    #[error("Invalid city or vehicle ID: vehicle {0} not found")]
    VehicleNotFound(VehicleId),

    #[error("Unable to calculate distance: {0}")]
    Distance(#[from] DistanceError),

    #[error("Unable to calculate distance: got {0} km")]
    NonPositiveDistance(f64),

    #[error("Invalid revenue: {0}")]
    Revenue(#[from] RevenueError),

    #[error("{0}")]
    Storage(#[from] AppError),
}

impl RouteFailure {
    fn status_code(&self) -> StatusCode {
        match self {
            RouteFailure::InvalidIdentifier(_)
            | RouteFailure::StartCityNotFound(_)
            | RouteFailure::EndCityNotFound(_)
            | RouteFailure::VehicleNotFound(_) => StatusCode::BAD_REQUEST,
            RouteFailure::Revenue(_) => StatusCode::UNPROCESSABLE_ENTITY,
            RouteFailure::Distance(_)
            | RouteFailure::NonPositiveDistance(_)
            | RouteFailure::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            RouteFailure::InvalidIdentifier(_) => "INVALID_IDENTIFIER",
            RouteFailure::StartCityNotFound(_)
            | RouteFailure::EndCityNotFound(_)
            | RouteFailure::VehicleNotFound(_) => "NOT_FOUND",
            RouteFailure::Distance(_) | RouteFailure::NonPositiveDistance(_) => "DISTANCE_UNAVAILABLE",
            RouteFailure::Revenue(_) => "INVALID_REVENUE",
            RouteFailure::Storage(_) => "STORAGE_ERROR",
        }
    }
}

/// Failure of the workflow, with the last stage it reached
#[derive(Debug, Error)]
#[error("route creation failed after stage '{stage}': {failure}")]
pub struct RouteWorkflowError {
    pub stage: RouteStage,
    pub failure: RouteFailure,
}

impl RouteWorkflowError {
    fn at(stage: RouteStage, failure: impl Into<RouteFailure>) -> Self {
        Self {
            stage,
            failure: failure.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        self.failure.status_code()
    }
}

impl IntoResponse for RouteWorkflowError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(stage = %self.stage, "❌ {}", self.failure);
        } else {
            warn!(stage = %self.stage, "⚠️ {}", self.failure);
        }

        let body = ErrorResponse::new("Failed to create route", self.failure.to_string(), self.failure.code())
            .with_details(json!({
                "stage": self.stage,
                "reason": self.failure.to_string(),
            }));

        (status, Json(body)).into_response()
    }
}

pub struct RouteAssemblyService {
    cities: Arc<dyn CityRepository>,
    vehicles: Arc<dyn VehicleRepository>,
    routes: Arc<dyn RouteRepository>,
    distance: Arc<dyn DistanceResolver>,
}

impl RouteAssemblyService {
    pub fn new(repositories: &Repositories, distance: Arc<dyn DistanceResolver>) -> Self {
        Self {
            cities: repositories.cities.clone(),
            vehicles: repositories.vehicles.clone(),
            routes: repositories.routes.clone(),
            distance,
        }
    }

    /// Run the whole workflow for one request
    pub async fn assemble(&self, request: &CreateRouteRequest) -> Result<Route, RouteWorkflowError> {
        let mut stage = RouteStage::Received;
        info!(stage = %stage, "🧭 Route creation request received");

        let (start_city, end_city, vehicle) = self
            .resolve_entities(request)
            .await
            .map_err(|failure| RouteWorkflowError::at(stage, failure))?;
        stage = RouteStage::CitiesResolved;
        info!(
            stage = %stage,
            start = %start_city.name,
            end = %end_city.name,
            vehicle = %vehicle.id,
            "🏙️ Cities and vehicle resolved"
        );

        let distance = self
            .distance
            .driving_distance_km(start_city.coordinates(), end_city.coordinates())
            .await
            .map_err(|e| RouteWorkflowError::at(stage, e))?;
        if !(distance > 0.0) {
            return Err(RouteWorkflowError::at(stage, RouteFailure::NonPositiveDistance(distance)));
        }
        stage = RouteStage::DistanceResolved;
        info!(stage = %stage, distance_km = distance, "📏 Distance resolved");

        let load = vehicle.regular_load;
        let profile = VehicleProfile::from(&vehicle);
        let estimate = cost_model::estimate_cost(distance, &profile);
        let time_in_minutes = estimate
            .time_in_minutes
            .map(cost_model::format_duration)
            .unwrap_or_else(|| UNKNOWN_DURATION.to_string());
        let revenue = cost_model::calculate_revenue(
            Some(distance),
            Some(load),
            Some(vehicle.capacity),
            estimate.total_cost,
        )
        .map_err(|e| RouteWorkflowError::at(stage, e))?;
        stage = RouteStage::CostComputed;
        info!(
            stage = %stage,
            cost = estimate.total_cost,
            basis = ?estimate.basis,
            revenue,
            time = %time_in_minutes,
            "💰 Cost computed"
        );

        let route = self
            .routes
            .create(NewRoute {
                start_city_id: start_city.id,
                end_city_id: end_city.id,
                vehicle_id: vehicle.id,
                distance,
                cost: estimate.total_cost,
                cost_basis: estimate.basis,
                time_in_minutes,
                revenue,
            })
            .await
            .map_err(|e| RouteWorkflowError::at(stage, e))?;
        stage = RouteStage::Persisted;
        info!(stage = %stage, route = %route.id, "💾 Route persisted");

        stage = RouteStage::Done;
        info!(stage = %stage, route = %route.id, "✅ Route created");
        Ok(route)
    }

    async fn resolve_entities(&self, request: &CreateRouteRequest) -> Result<(City, City, Vehicle), RouteFailure> {
        let start_city_id: CityId = parse_id("startCityId", request.start_city_id.as_deref())
            .map_err(|e| RouteFailure::InvalidIdentifier(bad_request_message(e)))?;
        let end_city_id: CityId = parse_id("endCityId", request.end_city_id.as_deref())
            .map_err(|e| RouteFailure::InvalidIdentifier(bad_request_message(e)))?;
        let vehicle_id: VehicleId = parse_id("vehicleId", request.vehicle_id.as_deref())
            .map_err(|e| RouteFailure::InvalidIdentifier(bad_request_message(e)))?;

        let start_city = self
            .cities
            .find_by_id(start_city_id)
            .await?
            .ok_or(RouteFailure::StartCityNotFound(start_city_id))?;
        let end_city = self
            .cities
            .find_by_id(end_city_id)
            .await?
            .ok_or(RouteFailure::EndCityNotFound(end_city_id))?;
        let vehicle = self
            .vehicles
            .find_by_id(vehicle_id)
            .await?
            .ok_or(RouteFailure::VehicleNotFound(vehicle_id))?;

        Ok((start_city, end_city, vehicle))
    }
}

fn bad_request_message(error: AppError) -> String {
    match error {
        AppError::BadRequest(message) => message,
        other => other.to_string(),
    }
}
