use serde::Deserialize;
use validator::Validate;

use crate::models::NewCity;
use crate::utils::validation::{validate_latitude, validate_longitude, validate_not_blank};

/// Body of `POST /create/city`
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCityRequest {
    #[validate(custom = "validate_not_blank")]
    pub name: String,

    /// Longitude
    #[validate(custom = "validate_longitude")]
    pub x: f64,

    /// Latitude
    #[validate(custom = "validate_latitude")]
    pub y: f64,
}

impl From<CreateCityRequest> for NewCity {
    fn from(request: CreateCityRequest) -> Self {
        Self {
            name: request.name.trim().to_string(),
            x: request.x,
            y: request.y,
        }
    }
}
