//! Modelos de datos
//!
//! Estructuras que mapean las tablas de PostgreSQL y los tipos de inserción
//! que aceptan los repositorios.

pub mod city;
pub mod ids;
pub mod route;
pub mod vehicle;

pub use city::{City, Coordinates, NewCity};
pub use ids::{CityId, RouteId, VehicleId};
pub use route::{CostBasis, NewRoute, Route};
pub use vehicle::{NewVehicle, Vehicle, VehicleType};
