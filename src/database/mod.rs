//! Módulo de base de datos
//!
//! Ciclo de vida de la conexión a PostgreSQL.

pub mod connection;

pub use connection::DatabaseConnection;
