//! Estructuras de petición y respuesta de la API HTTP

pub mod api_response;
pub mod city_dto;
pub mod game_dto;
pub mod route_dto;
pub mod vehicle_dto;

pub use api_response::ApiResponse;
