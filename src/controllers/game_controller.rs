//! Lectura del simulador
//!
//! Lista las colecciones almacenadas y une cada ruta con las ciudades y el
//! vehículo que referencia. La unión se hace aquí, en memoria, por id.

use std::collections::HashMap;

use crate::dto::route_dto::RouteView;
use crate::models::{City, CityId, Route, Vehicle, VehicleId};
use crate::repositories::Repositories;
use crate::utils::errors::AppError;

/// Cities, vehicles and resolved routes
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub cities: Vec<City>,
    pub vehicles: Vec<Vehicle>,
    pub routes: Vec<RouteView>,
}

pub struct GameController {
    repositories: Repositories,
}

impl GameController {
    pub fn new(repositories: Repositories) -> Self {
        Self { repositories }
    }

    pub async fn list_vehicles(&self) -> Result<Vec<Vehicle>, AppError> {
        self.repositories.vehicles.find_all().await
    }

    pub async fn dashboard(&self) -> Result<Dashboard, AppError> {
        let (cities, vehicles, routes) = tokio::try_join!(
            self.repositories.cities.find_all(),
            self.repositories.vehicles.find_all(),
            self.repositories.routes.find_all(),
        )?;

        let routes = resolve_routes(routes, &cities, &vehicles);
        log::debug!(
            "📊 Dashboard: {} cities, {} vehicles, {} routes",
            cities.len(),
            vehicles.len(),
            routes.len()
        );

        Ok(Dashboard {
            cities,
            vehicles,
            routes,
        })
    }
}

/// Sustituir las referencias de cada ruta por los registros a los que apuntan
pub fn resolve_routes(routes: Vec<Route>, cities: &[City], vehicles: &[Vehicle]) -> Vec<RouteView> {
    let cities_by_id: HashMap<CityId, &City> = cities.iter().map(|c| (c.id, c)).collect();
    let vehicles_by_id: HashMap<VehicleId, &Vehicle> = vehicles.iter().map(|v| (v.id, v)).collect();

    routes
        .into_iter()
        .map(|route| {
            let start_city = cities_by_id.get(&route.start_city_id).map(|c| (*c).clone());
            let end_city = cities_by_id.get(&route.end_city_id).map(|c| (*c).clone());
            let vehicle = vehicles_by_id.get(&route.vehicle_id).map(|v| (*v).clone());
            if start_city.is_none() || end_city.is_none() || vehicle.is_none() {
                log::warn!("⚠️ Route {} references a record that no longer exists", route.id);
            }

            RouteView {
                route,
                start_city,
                end_city,
                vehicle,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CostBasis, RouteId, VehicleType};
    use chrono::Utc;

    fn city(name: &str) -> City {
        City {
            id: CityId::new(),
            name: name.to_string(),
            x: 18.0,
            y: 59.0,
            created_at: Utc::now(),
        }
    }

    fn vehicle() -> Vehicle {
        Vehicle {
            id: VehicleId::new(),
            vehicle_type: VehicleType::Train,
            speed: 90.0,
            capacity: 2000.0,
            fuel_cost: 1.0,
            fuel_efficiency: 4.0,
            maintenance_cost_per_km: 0.5,
            time_cost_per_hour: 30.0,
            regular_load: 1500.0,
            created_at: Utc::now(),
        }
    }

    fn route(start: CityId, end: CityId, vehicle: VehicleId) -> Route {
        Route {
            id: RouteId::new(),
            start_city_id: start,
            end_city_id: end,
            vehicle_id: vehicle,
            distance: 10.0,
            cost: 1.0,
            cost_basis: CostBasis::Full,
            time_in_minutes: "6 minutes 40 seconds".to_string(),
            revenue: 2.0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_references_resolve_to_full_records() {
        let (a, b, train) = (city("Uppsala"), city("Malmö"), vehicle());
        let views = resolve_routes(vec![route(a.id, b.id, train.id)], &[a.clone(), b.clone()], &[train.clone()]);

        assert_eq!(views.len(), 1);
        assert_eq!(views[0].start_city.as_ref(), Some(&a));
        assert_eq!(views[0].end_city.as_ref(), Some(&b));
        assert_eq!(views[0].vehicle.as_ref(), Some(&train));
    }

    #[test]
    fn test_dangling_reference_resolves_to_none() {
        let (a, train) = (city("Lund"), vehicle());
        let views = resolve_routes(vec![route(a.id, CityId::new(), train.id)], &[a.clone()], &[]);

        assert_eq!(views[0].start_city.as_ref(), Some(&a));
        assert!(views[0].end_city.is_none());
        assert!(views[0].vehicle.is_none());
    }

    #[test]
    fn test_route_order_is_preserved() {
        let (a, b, train) = (city("Kiruna"), city("Luleå"), vehicle());
        let first = route(a.id, b.id, train.id);
        let second = route(b.id, a.id, train.id);
        let ids = vec![first.id, second.id];

        let views = resolve_routes(vec![first, second], &[a, b], &[train]);
        assert_eq!(views.iter().map(|v| v.route.id).collect::<Vec<_>>(), ids);
    }
}
