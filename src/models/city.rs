//! Modelo de ciudad
//!
//! Mapea la tabla `cities`. `x` es la longitud e `y` la latitud.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ids::CityId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub id: CityId,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub created_at: DateTime<Utc>,
}

/// A city that has not been stored yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewCity {
    pub name: String,
    pub x: f64,
    pub y: f64,
}

/// A (longitude, latitude) pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub longitude: f64,
    pub latitude: f64,
}

impl City {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            longitude: self.x,
            latitude: self.y,
        }
    }
}
