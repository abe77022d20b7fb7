use serde::Serialize;

use super::route_dto::RouteView;
use crate::models::{City, Vehicle};

#[derive(Debug, Serialize)]
pub struct LandingResponse {
    pub title: &'static str,
    pub message: &'static str,
    pub timestamp: String,
}

/// Everything `GET /game` displays
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub title: &'static str,
    pub cities: Vec<City>,
    pub vehicles: Vec<Vehicle>,
    pub routes: Vec<RouteView>,
}

#[derive(Debug, Serialize)]
pub struct VehicleListResponse {
    pub title: &'static str,
    pub vehicles: Vec<Vehicle>,
}
