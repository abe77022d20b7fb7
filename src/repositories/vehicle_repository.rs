use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

use super::VehicleRepository;
use crate::models::{NewVehicle, Vehicle, VehicleId};
use crate::utils::errors::AppResult;

const VEHICLE_COLUMNS: &str = "id, vehicle_type, speed, capacity, fuel_cost, fuel_efficiency, \
     maintenance_cost_per_km, time_cost_per_hour, regular_load, created_at";

pub struct PgVehicleRepository {
    pool: PgPool,
}

impl PgVehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VehicleRepository for PgVehicleRepository {
    async fn create(&self, vehicle: NewVehicle) -> AppResult<Vehicle> {
        let query = format!(
            r#"
            INSERT INTO vehicles (id, vehicle_type, speed, capacity, fuel_cost, fuel_efficiency,
                                  maintenance_cost_per_km, time_cost_per_hour, regular_load, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {}
            "#,
            VEHICLE_COLUMNS
        );

        let vehicle = sqlx::query_as::<_, Vehicle>(&query)
            .bind(VehicleId::new())
            .bind(vehicle.vehicle_type)
            .bind(vehicle.speed)
            .bind(vehicle.capacity)
            .bind(vehicle.fuel_cost)
            .bind(vehicle.fuel_efficiency)
            .bind(vehicle.maintenance_cost_per_km)
            .bind(vehicle.time_cost_per_hour)
            .bind(vehicle.regular_load)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await?;

        log::debug!("💾 Vehicle {} stored", vehicle.id);
        Ok(vehicle)
    }

    async fn find_by_id(&self, id: VehicleId) -> AppResult<Option<Vehicle>> {
        let query = format!("SELECT {} FROM vehicles WHERE id = $1", VEHICLE_COLUMNS);
        let vehicle = sqlx::query_as::<_, Vehicle>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    async fn find_all(&self) -> AppResult<Vec<Vehicle>> {
        let query = format!("SELECT {} FROM vehicles ORDER BY created_at, id", VEHICLE_COLUMNS);
        let vehicles = sqlx::query_as::<_, Vehicle>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(vehicles)
    }
}
