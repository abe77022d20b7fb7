//! Shared application state
//!
//! Este módulo define el estado compartido que el router de Axum clona en
//! cada handler: configuración, repositorios y el resolvedor de distancias.

use std::sync::Arc;

use crate::config::EnvironmentConfig;
use crate::repositories::Repositories;
use crate::services::{DistanceResolver, RouteAssemblyService};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<EnvironmentConfig>,
    pub repositories: Repositories,
    pub distance_resolver: Arc<dyn DistanceResolver>,
}

impl AppState {
    pub fn new(
        config: EnvironmentConfig,
        repositories: Repositories,
        distance_resolver: Arc<dyn DistanceResolver>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            repositories,
            distance_resolver,
        }
    }

    pub fn route_assembly(&self) -> RouteAssemblyService {
        RouteAssemblyService::new(&self.repositories, self.distance_resolver.clone())
    }
}
