//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. El repositorio se crea aquí, en la raíz de
//! composición, y vive lo mismo que el proceso.

use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::repositories::vehicle_repository::VehicleRepository;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub repository: Arc<VehicleRepository>,
}

impl AppState {
    pub fn new(config: EnvironmentConfig) -> Self {
        Self::with_repository(config, Arc::new(VehicleRepository::new()))
    }

    pub fn with_repository(config: EnvironmentConfig, repository: Arc<VehicleRepository>) -> Self {
        Self { config, repository }
    }
}
