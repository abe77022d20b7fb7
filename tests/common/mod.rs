//! In-memory fakes shared by the integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use route_simulator::config::EnvironmentConfig;
use route_simulator::models::{
    City, CityId, Coordinates, NewCity, NewRoute, NewVehicle, Route, RouteId, Vehicle, VehicleId,
    VehicleType,
};
use route_simulator::repositories::{CityRepository, Repositories, RouteRepository, VehicleRepository};
use route_simulator::services::{DistanceError, DistanceResolver};
use route_simulator::utils::errors::{AppError, AppResult};
use route_simulator::AppState;

#[derive(Default)]
pub struct MemoryCities(Mutex<Vec<City>>);

#[async_trait]
impl CityRepository for MemoryCities {
    async fn create(&self, city: NewCity) -> AppResult<City> {
        let city = City {
            id: CityId::new(),
            name: city.name,
            x: city.x,
            y: city.y,
            created_at: Utc::now(),
        };
        self.0.lock().unwrap().push(city.clone());
        Ok(city)
    }

    async fn find_by_id(&self, id: CityId) -> AppResult<Option<City>> {
        Ok(self.0.lock().unwrap().iter().find(|c| c.id == id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<City>> {
        Ok(self.0.lock().unwrap().clone())
    }
}

#[derive(Default)]
pub struct MemoryVehicles(Mutex<Vec<Vehicle>>);

impl MemoryVehicles {
    pub fn remove(&self, id: VehicleId) {
        self.0.lock().unwrap().retain(|v| v.id != id);
    }
}

#[async_trait]
impl VehicleRepository for MemoryVehicles {
    async fn create(&self, vehicle: NewVehicle) -> AppResult<Vehicle> {
        let vehicle = Vehicle {
            id: VehicleId::new(),
            vehicle_type: vehicle.vehicle_type,
            speed: vehicle.speed,
            capacity: vehicle.capacity,
            fuel_cost: vehicle.fuel_cost,
            fuel_efficiency: vehicle.fuel_efficiency,
            maintenance_cost_per_km: vehicle.maintenance_cost_per_km,
            time_cost_per_hour: vehicle.time_cost_per_hour,
            regular_load: vehicle.regular_load,
            created_at: Utc::now(),
        };
        self.0.lock().unwrap().push(vehicle.clone());
        Ok(vehicle)
    }

    async fn find_by_id(&self, id: VehicleId) -> AppResult<Option<Vehicle>> {
        Ok(self.0.lock().unwrap().iter().find(|v| v.id == id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Vehicle>> {
        Ok(self.0.lock().unwrap().clone())
    }
}

#[derive(Default)]
pub struct MemoryRoutes {
    routes: Mutex<Vec<Route>>,
    pub fail_writes: bool,
}

impl MemoryRoutes {
    pub fn failing() -> Self {
        Self {
            routes: Mutex::default(),
            fail_writes: true,
        }
    }

    pub fn stored(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }
}

#[async_trait]
impl RouteRepository for MemoryRoutes {
    async fn create(&self, route: NewRoute) -> AppResult<Route> {
        if self.fail_writes {
            return Err(AppError::Database(sqlx::Error::Protocol("write rejected".to_string())));
        }
        let route = Route {
            id: RouteId::new(),
            start_city_id: route.start_city_id,
            end_city_id: route.end_city_id,
            vehicle_id: route.vehicle_id,
            distance: route.distance,
            cost: route.cost,
            cost_basis: route.cost_basis,
            time_in_minutes: route.time_in_minutes,
            revenue: route.revenue,
            created_at: Utc::now(),
        };
        self.routes.lock().unwrap().push(route.clone());
        Ok(route)
    }

    async fn find_all(&self) -> AppResult<Vec<Route>> {
        Ok(self.routes.lock().unwrap().clone())
    }
}

/// What the stub resolver answers with
#[derive(Clone, Copy)]
pub enum StubDistance {
    Km(f64),
    NoRoute,
    Unreachable,
}

/// Distance resolver with a fixed answer that counts its calls
pub struct StubResolver {
    answer: StubDistance,
    calls: AtomicUsize,
}

impl StubResolver {
    pub fn new(answer: StubDistance) -> Self {
        Self {
            answer,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DistanceResolver for StubResolver {
    async fn driving_distance_km(&self, _start: Coordinates, _end: Coordinates) -> Result<f64, DistanceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.answer {
            StubDistance::Km(km) => Ok(km),
            StubDistance::NoRoute => Err(DistanceError::NoRoute),
            StubDistance::Unreachable => Err(DistanceError::Status {
                status: 503,
                body: "upstream unavailable".to_string(),
            }),
        }
    }
}

pub struct TestContext {
    pub cities: Arc<MemoryCities>,
    pub vehicles: Arc<MemoryVehicles>,
    pub routes: Arc<MemoryRoutes>,
    pub resolver: Arc<StubResolver>,
}

impl TestContext {
    pub fn new(answer: StubDistance) -> Self {
        Self::with_routes(answer, MemoryRoutes::default())
    }

    pub fn with_routes(answer: StubDistance, routes: MemoryRoutes) -> Self {
        Self {
            cities: Arc::new(MemoryCities::default()),
            vehicles: Arc::new(MemoryVehicles::default()),
            routes: Arc::new(routes),
            resolver: Arc::new(StubResolver::new(answer)),
        }
    }

    pub fn repositories(&self) -> Repositories {
        Repositories {
            cities: self.cities.clone(),
            vehicles: self.vehicles.clone(),
            routes: self.routes.clone(),
        }
    }

    pub fn state(&self) -> AppState {
        let config = EnvironmentConfig::from_lookup(|name| match name {
            "DATABASE_URL" => Some("postgres://unused".to_string()),
            _ => None,
        })
        .unwrap();
        AppState::new(config, self.repositories(), self.resolver.clone())
    }

    pub async fn city(&self, name: &str, x: f64, y: f64) -> City {
        self.cities
            .create(NewCity {
                name: name.to_string(),
                x,
                y,
            })
            .await
            .unwrap()
    }

    pub async fn vehicle(&self, vehicle: NewVehicle) -> Vehicle {
        self.vehicles.create(vehicle).await.unwrap()
    }
}

/// speed 50, efficiency 10, fuel 1.5, maintenance 0.2, time 20, capacity 1000, load 500
pub fn reference_truck() -> NewVehicle {
    NewVehicle {
        vehicle_type: VehicleType::Truck,
        speed: 50.0,
        capacity: 1000.0,
        fuel_cost: 1.5,
        fuel_efficiency: 10.0,
        maintenance_cost_per_km: 0.2,
        time_cost_per_hour: 20.0,
        regular_load: 500.0,
    }
}
