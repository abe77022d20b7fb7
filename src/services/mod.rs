//! Módulo de servicios
//!
//! Lógica de negocio: el modelo de costes, la consulta de distancias a la
//! API de direcciones y el flujo que construye una ruta con ambos.

pub mod cost_model;
pub mod distance_service;
pub mod route_assembly_service;

pub use distance_service::{DistanceError, DistanceResolver, MapboxDirectionsService};
pub use route_assembly_service::{RouteAssemblyService, RouteStage, RouteWorkflowError};
