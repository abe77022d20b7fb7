use std::sync::Arc;
use validator::Validate;

use crate::dto::vehicle_dto::CreateVehicleRequest;
use crate::dto::ApiResponse;
use crate::models::Vehicle;
use crate::repositories::VehicleRepository;
use crate::utils::errors::AppError;

pub struct VehicleController {
    repository: Arc<dyn VehicleRepository>,
}

impl VehicleController {
    pub fn new(repository: Arc<dyn VehicleRepository>) -> Self {
        Self { repository }
    }

    pub async fn create(&self, request: CreateVehicleRequest) -> Result<ApiResponse<Vehicle>, AppError> {
        log::debug!("🚚 Received vehicle data: {:?}", request);
        request.validate()?;

        let vehicle = self.repository.create(request.into()).await?;
        log::info!("🚚 Vehicle created: {} ({:?})", vehicle.id, vehicle.vehicle_type);

        Ok(ApiResponse::success_with_message(vehicle, "Vehicle created successfully"))
    }
}
