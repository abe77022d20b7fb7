use std::sync::Arc;
use validator::Validate;

use crate::dto::city_dto::CreateCityRequest;
use crate::dto::ApiResponse;
use crate::models::City;
use crate::repositories::CityRepository;
use crate::utils::errors::AppError;

pub struct CityController {
    repository: Arc<dyn CityRepository>,
}

impl CityController {
    pub fn new(repository: Arc<dyn CityRepository>) -> Self {
        Self { repository }
    }

    pub async fn create(&self, request: CreateCityRequest) -> Result<ApiResponse<City>, AppError> {
        request.validate()?;

        let city = self.repository.create(request.into()).await?;
        log::info!("🏙️ City created: {} ({}, {})", city.name, city.x, city.y);

        Ok(ApiResponse::success_with_message(city, "Successfully created"))
    }
}
