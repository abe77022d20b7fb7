use serde::Deserialize;
use validator::Validate;

use crate::models::{NewVehicle, VehicleType};
use crate::utils::validation::{validate_non_negative, validate_positive};

/// Body of `POST /create/vehicle`
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleRequest {
    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,

    #[validate(custom = "validate_positive")]
    pub speed: f64,

    #[validate(custom = "validate_positive")]
    pub capacity: f64,

    #[validate(custom = "validate_non_negative")]
    pub fuel_cost: f64,

    #[validate(custom = "validate_positive")]
    pub fuel_efficiency: f64,

    #[validate(custom = "validate_non_negative")]
    pub maintenance_cost_per_km: f64,

    #[validate(custom = "validate_non_negative")]
    pub time_cost_per_hour: f64,

    // Not checked against capacity here; revenue calculation reports that
    #[validate(custom = "validate_non_negative")]
    pub regular_load: f64,
}

impl From<CreateVehicleRequest> for NewVehicle {
    fn from(request: CreateVehicleRequest) -> Self {
        Self {
            vehicle_type: request.vehicle_type,
            speed: request.speed,
            capacity: request.capacity,
            fuel_cost: request.fuel_cost,
            fuel_efficiency: request.fuel_efficiency,
            maintenance_cost_per_km: request.maintenance_cost_per_km,
            time_cost_per_hour: request.time_cost_per_hour,
            regular_load: request.regular_load,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(overrides: serde_json::Value) -> CreateVehicleRequest {
        let mut body = json!({
            "type": "Truck",
            "speed": 50.0,
            "capacity": 1000.0,
            "fuelCost": 1.5,
            "fuelEfficiency": 10.0,
            "maintenanceCostPerKm": 0.2,
            "timeCostPerHour": 20.0,
            "regularLoad": 500.0
        });
        for (key, value) in overrides.as_object().unwrap() {
            body[key] = value.clone();
        }
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_valid_vehicle_passes() {
        let vehicle = request(json!({}));
        assert!(vehicle.validate().is_ok());
        assert_eq!(vehicle.vehicle_type, VehicleType::Truck);
    }

    #[test]
    fn test_zero_speed_and_negative_costs_fail() {
        let errors = request(json!({ "speed": 0.0, "fuelCost": -1.0 })).validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("speed"));
        assert!(fields.contains_key("fuel_cost"));
        assert!(!fields.contains_key("capacity"));
    }

    #[test]
    fn test_regular_load_above_capacity_is_accepted() {
        assert!(request(json!({ "regularLoad": 5000.0 })).validate().is_ok());
    }

    #[test]
    fn test_unknown_vehicle_type_is_rejected() {
        let body = json!({
            "type": "Boat", "speed": 1.0, "capacity": 1.0, "fuelCost": 1.0, "fuelEfficiency": 1.0,
            "maintenanceCostPerKm": 1.0, "timeCostPerHour": 1.0, "regularLoad": 1.0
        });
        assert!(serde_json::from_value::<CreateVehicleRequest>(body).is_err());
    }

    #[test]
    fn test_regular_load_is_required() {
        let body = json!({
            "type": "Train", "speed": 1.0, "capacity": 1.0, "fuelCost": 1.0, "fuelEfficiency": 1.0,
            "maintenanceCostPerKm": 1.0, "timeCostPerHour": 1.0
        });
        assert!(serde_json::from_value::<CreateVehicleRequest>(body).is_err());
    }
}
