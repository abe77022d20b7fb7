//! Modelo de costes de ruta
//!
//! Cálculos puros: coste de combustible, mantenimiento y tiempo para una
//! distancia recorrida por un vehículo, el tiempo transcurrido y el ingreso
//! por transportar una carga en esa distancia. Sin I/O y sin estado entre
//! llamadas.
//!
//! El `fuel_cost` guardado del vehículo se usa como precio por unidad de
//! combustible.

use thiserror::Error;

use crate::models::{CostBasis, Vehicle};

/// Revenue earned per km at a full load factor, identical for every vehicle type
pub const BASE_PRICE_PER_KM: f64 = 5.0;

/// The subset of a vehicle the cost model reads
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleProfile {
    pub speed: f64,
    pub fuel_efficiency: f64,
    pub fuel_price_per_unit: f64,
    pub maintenance_cost_per_km: f64,
    pub time_cost_per_hour: f64,
    pub capacity: f64,
}

impl From<&Vehicle> for VehicleProfile {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            speed: vehicle.speed,
            fuel_efficiency: vehicle.fuel_efficiency,
            fuel_price_per_unit: vehicle.fuel_cost,
            maintenance_cost_per_km: vehicle.maintenance_cost_per_km,
            time_cost_per_hour: vehicle.time_cost_per_hour,
            capacity: vehicle.capacity,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostBreakdown {
    pub fuel_cost: f64,
    pub maintenance_cost: f64,
    pub time_cost: f64,
    pub total_cost: f64,
    pub time_in_hours: f64,
    pub time_in_minutes: f64,
}

#[derive(Debug, Error, PartialEq)]
pub enum CostModelError {
    #[error("distance must be a positive number of km, got {0}")]
    InvalidDistance(f64),

    #[error("vehicle speed must be greater than zero, got {0}")]
    InvalidSpeed(f64),

    #[error("vehicle fuel efficiency must be greater than zero, got {0}")]
    InvalidFuelEfficiency(f64),

    #[error("cost computation produced a non-finite value")]
    NonFinite,
}

#[derive(Debug, Error, PartialEq)]
pub enum RevenueError {
    #[error("missing input for revenue calculation: {0}")]
    MissingInput(&'static str),

    #[error("load factor {0} is outside [0, 1]")]
    InvalidLoadFactor(f64),
}

/// Full cost of travelling `distance` km with `vehicle`
pub fn compute_cost(distance: f64, vehicle: &VehicleProfile) -> Result<CostBreakdown, CostModelError> {
    if !distance.is_finite() || distance <= 0.0 {
        return Err(CostModelError::InvalidDistance(distance));
    }
    if !(vehicle.speed > 0.0) {
        return Err(CostModelError::InvalidSpeed(vehicle.speed));
    }
    if !(vehicle.fuel_efficiency > 0.0) {
        return Err(CostModelError::InvalidFuelEfficiency(vehicle.fuel_efficiency));
    }

    let fuel_cost = (distance / vehicle.fuel_efficiency) * vehicle.fuel_price_per_unit;
    let maintenance_cost = distance * vehicle.maintenance_cost_per_km;
    let time_in_hours = distance / vehicle.speed;
    let time_cost = time_in_hours * vehicle.time_cost_per_hour;
    let total_cost = fuel_cost + maintenance_cost + time_cost;
    let time_in_minutes = time_in_hours * 60.0;

    let breakdown = CostBreakdown {
        fuel_cost,
        maintenance_cost,
        time_cost,
        total_cost,
        time_in_hours,
        time_in_minutes,
    };

    if [total_cost, time_in_minutes].iter().all(|v| v.is_finite()) {
        Ok(breakdown)
    } else {
        Err(CostModelError::NonFinite)
    }
}

/// Cost figure a route is stored with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostEstimate {
    pub basis: CostBasis,
    pub total_cost: f64,
    /// `None` when the vehicle has no usable speed
    pub time_in_minutes: Option<f64>,
}

impl CostEstimate {
    pub fn full(breakdown: &CostBreakdown) -> Self {
        Self {
            basis: CostBasis::Full,
            total_cost: breakdown.total_cost,
            time_in_minutes: Some(breakdown.time_in_minutes),
        }
    }

    /// Fallback estimate: distance x fuel cost
    pub fn degraded(distance: f64, vehicle: &VehicleProfile) -> Self {
        let time_in_minutes = (vehicle.speed > 0.0)
            .then(|| distance / vehicle.speed * 60.0)
            .filter(|minutes| minutes.is_finite());

        Self {
            basis: CostBasis::Degraded,
            total_cost: distance * vehicle.fuel_price_per_unit,
            time_in_minutes,
        }
    }
}

/// Full cost when the model can run, the degraded estimate otherwise
pub fn estimate_cost(distance: f64, vehicle: &VehicleProfile) -> CostEstimate {
    match compute_cost(distance, vehicle) {
        Ok(breakdown) => CostEstimate::full(&breakdown),
        Err(e) => {
            log::warn!("⚠️ Full cost model unavailable ({}), using degraded estimate", e);
            CostEstimate::degraded(distance, vehicle)
        }
    }
}

/// Revenue of carrying `load` over `distance` km, net of `total_cost`.
///
/// Negative revenue is a valid result. Missing inputs and a load factor
/// outside `[0, 1]` are reported as errors instead of NaN.
pub fn calculate_revenue(
    distance: Option<f64>,
    load: Option<f64>,
    capacity: Option<f64>,
    total_cost: f64,
) -> Result<f64, RevenueError> {
    let distance = distance
        .filter(|d| d.is_finite() && *d > 0.0)
        .ok_or(RevenueError::MissingInput("distance"))?;
    let load = load
        .filter(|l| l.is_finite())
        .ok_or(RevenueError::MissingInput("load"))?;
    let capacity = capacity
        .filter(|c| c.is_finite() && *c > 0.0)
        .ok_or(RevenueError::MissingInput("capacity"))?;
    if !total_cost.is_finite() {
        return Err(RevenueError::MissingInput("total cost"));
    }

    let load_factor = load / capacity;
    if !(0.0..=1.0).contains(&load_factor) {
        return Err(RevenueError::InvalidLoadFactor(load_factor));
    }

    Ok(BASE_PRICE_PER_KM * distance * load_factor - total_cost)
}

/// Render minutes as "H hours M minutes S seconds".
///
/// Hours are omitted when zero, minutes are omitted only when both hours
/// and minutes are zero, seconds are always present.
pub fn format_duration(time_in_minutes: f64) -> String {
    let total_seconds = (time_in_minutes.max(0.0) * 60.0).round() as u64;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    let mut parts = Vec::with_capacity(3);
    if hours > 0 {
        parts.push(format!("{} hours", hours));
    }
    if minutes > 0 || hours > 0 {
        parts.push(format!("{} minutes", minutes));
    }
    parts.push(format!("{} seconds", seconds));
    parts.join(" ")
}
