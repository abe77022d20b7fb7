//! Logistics route simulator
//!
//! Ciudades, vehículos y rutas entre ciudades. Crear una ruta consulta la
//! distancia por carretera, calcula el coste con el modelo de costes y
//! guarda el resultado; el dashboard muestra todo con las referencias
//! resueltas.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

pub use routes::create_app_router;
pub use state::AppState;
