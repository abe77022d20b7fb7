//! Utilidades de validación
//!
//! Funciones `validator` personalizadas para los DTOs y parseo de
//! identificadores.

use std::borrow::{Borrow, Cow};
use std::str::FromStr;

use validator::ValidationError;

use super::errors::AppError;

fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error("not_blank", "must not be empty"));
    }
    Ok(())
}

/// Finite and strictly greater than zero
pub fn validate_positive(value: impl Borrow<f64>) -> Result<(), ValidationError> {
    let value: &f64 = value.borrow();
    if !value.is_finite() || *value <= 0.0 {
        return Err(error("positive", "must be a number greater than zero"));
    }
    Ok(())
}

/// Finite and zero or greater
pub fn validate_non_negative(value: impl Borrow<f64>) -> Result<(), ValidationError> {
    let value: &f64 = value.borrow();
    if !value.is_finite() || *value < 0.0 {
        return Err(error("non_negative", "must be a number greater than or equal to zero"));
    }
    Ok(())
}

pub fn validate_longitude(value: impl Borrow<f64>) -> Result<(), ValidationError> {
    let value: &f64 = value.borrow();
    if !value.is_finite() || !(-180.0..=180.0).contains(value) {
        return Err(error("longitude", "must be between -180 and 180"));
    }
    Ok(())
}

pub fn validate_latitude(value: impl Borrow<f64>) -> Result<(), ValidationError> {
    let value: &f64 = value.borrow();
    if !value.is_finite() || !(-90.0..=90.0).contains(value) {
        return Err(error("latitude", "must be between -90 and 90"));
    }
    Ok(())
}

/// Parse a required identifier field, reporting which field was missing or malformed
pub fn parse_id<T: FromStr>(field: &str, value: Option<&str>) -> Result<T, AppError> {
    let raw = value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::BadRequest(format!("{} is required", field)))?;

    raw.parse()
        .map_err(|_| AppError::BadRequest(format!("{} '{}' is not a valid identifier", field, raw)))
}
