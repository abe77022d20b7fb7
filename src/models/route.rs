//! Modelo de ruta
//!
//! Mapea la tabla `routes`. Cada valor derivado se calcula una sola vez en
//! el flujo de creación de rutas y nunca se recalcula.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};

use super::ids::{CityId, RouteId, VehicleId};

/// Which computation produced a route's cost - maps to the `cost_basis` ENUM
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "cost_basis", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CostBasis {
    /// Fuel + maintenance + time
    Full,
    /// distance x fuel cost, used when the full model cannot run
    Degraded,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub id: RouteId,
    pub start_city_id: CityId,
    pub end_city_id: CityId,
    pub vehicle_id: VehicleId,
    /// km
    pub distance: f64,
    pub cost: f64,
    pub cost_basis: CostBasis,
    /// Formatted duration, e.g. "1 hours 30 minutes 0 seconds"
    pub time_in_minutes: String,
    pub revenue: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewRoute {
    pub start_city_id: CityId,
    pub end_city_id: CityId,
    pub vehicle_id: VehicleId,
    pub distance: f64,
    pub cost: f64,
    pub cost_basis: CostBasis,
    pub time_in_minutes: String,
    pub revenue: f64,
}
