use serde::{Deserialize, Serialize};

use crate::models::{City, Route, Vehicle};

/// Body of `POST /create/route`.
///
/// Identifiers stay raw strings here so a missing or malformed one is
/// reported by the workflow with the field name.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRouteRequest {
    pub start_city_id: Option<String>,
    pub end_city_id: Option<String>,
    pub vehicle_id: Option<String>,
}

/// A route with its references resolved to the current stored records.
/// A reference whose record no longer exists is `null`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteView {
    #[serde(flatten)]
    pub route: Route,
    pub start_city: Option<City>,
    pub end_city: Option<City>,
    pub vehicle: Option<Vehicle>,
}
