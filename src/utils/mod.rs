//! Utilidades compartidas
//!
//! Manejo de errores, validación y extractores de peticiones.

pub mod errors;
pub mod extract;
pub mod validation;

pub use errors::{AppError, AppResult};
pub use extract::JsonOrForm;
