//! Repositorios
//!
//! Un trait por tabla, para que los handlers y el flujo de rutas solo vean
//! las operaciones que necesitan. Las implementaciones PostgreSQL están al
//! lado.

pub mod city_repository;
pub mod route_repository;
pub mod vehicle_repository;

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::models::{City, CityId, NewCity, NewRoute, NewVehicle, Route, Vehicle, VehicleId};
use crate::utils::errors::AppResult;

pub use city_repository::PgCityRepository;
pub use route_repository::PgRouteRepository;
pub use vehicle_repository::PgVehicleRepository;

#[async_trait]
pub trait CityRepository: Send + Sync {
    async fn create(&self, city: NewCity) -> AppResult<City>;
    async fn find_by_id(&self, id: CityId) -> AppResult<Option<City>>;
    async fn find_all(&self) -> AppResult<Vec<City>>;
}

#[async_trait]
pub trait VehicleRepository: Send + Sync {
    async fn create(&self, vehicle: NewVehicle) -> AppResult<Vehicle>;
    async fn find_by_id(&self, id: VehicleId) -> AppResult<Option<Vehicle>>;
    async fn find_all(&self) -> AppResult<Vec<Vehicle>>;
}

#[async_trait]
pub trait RouteRepository: Send + Sync {
    async fn create(&self, route: NewRoute) -> AppResult<Route>;
    async fn find_all(&self) -> AppResult<Vec<Route>>;
}

/// Handles to every repository, shared through the application state
#[derive(Clone)]
pub struct Repositories {
    pub cities: Arc<dyn CityRepository>,
    pub vehicles: Arc<dyn VehicleRepository>,
    pub routes: Arc<dyn RouteRepository>,
}

impl Repositories {
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            cities: Arc::new(PgCityRepository::new(pool.clone())),
            vehicles: Arc::new(PgVehicleRepository::new(pool.clone())),
            routes: Arc::new(PgRouteRepository::new(pool)),
        }
    }
}
