//! Driving distance between two points via the Mapbox Directions API
//!
//! Solo se usa el primer tramo de la primera ruta devuelta. No hay
//! reintentos ni caché: cada llamada es una petición saliente.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use crate::config::EnvironmentConfig;
use crate::models::Coordinates;

#[derive(Debug, Error)]
pub enum DistanceError {
    #[error("invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("directions API token is not configured")]
    MissingToken,

    #[error("directions request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("directions API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to parse directions response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("no route found between the given points")]
    NoRoute,
}

/// Fuente de distancias por carretera
#[async_trait]
pub trait DistanceResolver: Send + Sync {
    /// Driving distance in km from `start` to `end`
    async fn driving_distance_km(&self, start: Coordinates, end: Coordinates) -> Result<f64, DistanceError>;
}

#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    #[serde(default)]
    routes: Vec<DirectionsRoute>,
}

#[derive(Debug, Deserialize)]
struct DirectionsRoute {
    #[serde(default)]
    legs: Vec<DirectionsLeg>,
}

#[derive(Debug, Deserialize)]
struct DirectionsLeg {
    /// Meters
    distance: f64,
}

pub struct MapboxDirectionsService {
    client: Client,
    base_url: String,
    access_token: Option<String>,
}

impl MapboxDirectionsService {
    pub fn new(base_url: String, access_token: Option<String>, timeout: Duration) -> Result<Self, DistanceError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("RouteSimulator/1.0")
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token,
        })
    }

    pub fn from_config(config: &EnvironmentConfig) -> Result<Self, DistanceError> {
        Self::new(
            config.mapbox_directions_url.clone(),
            config.mapbox_token.clone(),
            config.mapbox_timeout,
        )
    }

    /// `{base}/{lon},{lat};{lon},{lat}`, query parameters excluded
    pub fn directions_url(&self, start: Coordinates, end: Coordinates) -> String {
        format!(
            "{}/{},{};{},{}",
            self.base_url, start.longitude, start.latitude, end.longitude, end.latitude
        )
    }
}

fn check_coordinates(label: &str, point: Coordinates) -> Result<(), DistanceError> {
    if point.longitude.is_finite() && point.latitude.is_finite() {
        Ok(())
    } else {
        Err(DistanceError::InvalidCoordinates(format!(
            "{} point ({}, {})",
            label, point.longitude, point.latitude
        )))
    }
}

/// Distance in km of the first leg of the first route in a directions body
fn first_leg_distance_km(body: &str) -> Result<f64, DistanceError> {
    let response: DirectionsResponse = serde_json::from_str(body)?;

    let meters = response
        .routes
        .first()
        .and_then(|route| route.legs.first())
        .map(|leg| leg.distance)
        .ok_or(DistanceError::NoRoute)?;

    if !meters.is_finite() {
        return Err(DistanceError::NoRoute);
    }
    Ok(meters / 1000.0)
}

#[async_trait]
impl DistanceResolver for MapboxDirectionsService {
    async fn driving_distance_km(&self, start: Coordinates, end: Coordinates) -> Result<f64, DistanceError> {
        check_coordinates("start", start)?;
        check_coordinates("end", end)?;
        let token = self.access_token.as_deref().ok_or(DistanceError::MissingToken)?;

        let url = self.directions_url(start, end);
        log::info!("🗺️ Requesting driving distance: {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("access_token", token),
                ("geometries", "geojson"),
                ("steps", "false"),
                ("alternatives", "true"),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        log::debug!("📡 Directions response status: {}", status);

        if !status.is_success() {
            log::error!("❌ Directions API error {}: {}", status, body);
            return Err(DistanceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let distance = first_leg_distance_km(&body)?;
        log::info!("✅ Driving distance: {:.3} km", distance);
        Ok(distance)
    }
}
