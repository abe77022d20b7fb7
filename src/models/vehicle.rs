//! Modelo de vehículo
//!
//! Mapea la tabla `vehicles`. Los vehículos no se modifican una vez creados.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};

use super::ids::VehicleId;

/// Vehicle kind - maps to the `vehicle_type` ENUM
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "vehicle_type")]
pub enum VehicleType {
    Truck,
    Train,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: VehicleId,
    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,
    /// km/h
    pub speed: f64,
    /// Load units
    pub capacity: f64,
    /// Price of one fuel unit. The cost model uses this as the fuel price.
    pub fuel_cost: f64,
    /// Distance travelled per fuel unit
    pub fuel_efficiency: f64,
    pub maintenance_cost_per_km: f64,
    pub time_cost_per_hour: f64,
    /// Default shipment quantity for new routes
    pub regular_load: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewVehicle {
    pub vehicle_type: VehicleType,
    pub speed: f64,
    pub capacity: f64,
    pub fuel_cost: f64,
    pub fuel_efficiency: f64,
    pub maintenance_cost_per_km: f64,
    pub time_cost_per_hour: f64,
    pub regular_load: f64,
}
