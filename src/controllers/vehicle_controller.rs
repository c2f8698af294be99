use std::sync::Arc;
use tracing::info;

use crate::dto::vehicle_dto::VehicleResponse;
use crate::factories::VehicleVariant;
use crate::models::vehicle::{FuelPolicy, Vehicle};
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::state::AppState;
use crate::utils::errors::{bad_request_error, AppError};

/// Acciones que mutan el estado de un vehículo existente
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleAction {
    StartEngine,
    StopEngine,
    AddGas,
}

impl VehicleAction {
    pub fn apply(self, vehicle: &mut Vehicle) -> Result<(), AppError> {
        match self {
            VehicleAction::StartEngine => vehicle.start_engine(),
            VehicleAction::StopEngine => vehicle.stop_engine(),
            VehicleAction::AddGas => vehicle.add_gas(),
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            VehicleAction::StartEngine => "start-engine",
            VehicleAction::StopEngine => "stop-engine",
            VehicleAction::AddGas => "add-gas",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        [
            VehicleAction::StartEngine,
            VehicleAction::StopEngine,
            VehicleAction::AddGas,
        ]
        .into_iter()
        .find(|action| action.slug() == slug)
    }
}

pub struct VehicleController {
    repository: Arc<VehicleRepository>,
    fuel: FuelPolicy,
}

impl VehicleController {
    pub fn new(repository: Arc<VehicleRepository>, fuel: FuelPolicy) -> Self {
        Self { repository, fuel }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(Arc::clone(&state.repository), state.config.fuel)
    }

    pub async fn list(&self) -> Vec<VehicleResponse> {
        self.repository
            .list()
            .await
            .iter()
            .map(VehicleResponse::from)
            .collect()
    }

    pub async fn get_by_id(&self, id: &str) -> Result<VehicleResponse, AppError> {
        let vehicle = self.repository.find(id).await?;
        Ok(VehicleResponse::from(vehicle))
    }

    /// Fabricar un vehículo de la variante pedida y guardarlo
    pub async fn add_variant(&self, variant: VehicleVariant) -> Result<VehicleResponse, AppError> {
        let vehicle = variant.builder().with_fuel_policy(self.fuel).build();
        let response = VehicleResponse::from(&vehicle);

        self.repository.add_vehicle(vehicle).await?;
        info!("🚗 Vehículo agregado: {} {} ({})", response.brand, response.model, response.id);

        Ok(response)
    }

    /// Ejecutar una acción sobre el vehículo `id`.
    /// Un id ausente o vacío es NotFound, igual que uno inexistente.
    pub async fn perform(
        &self,
        id: Option<&str>,
        action: VehicleAction,
    ) -> Result<VehicleResponse, AppError> {
        let id = id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| AppError::NotFound("Vehicle id is required".to_string()))?;

        let response = self
            .repository
            .update(id, |vehicle| {
                action.apply(vehicle)?;
                Ok(VehicleResponse::from(&*vehicle))
            })
            .await?;

        info!(
            "🔧 {} aplicado a {} (motor={}, combustible={:.1})",
            action.slug(),
            id,
            response.engine_running,
            response.fuel_level
        );
        Ok(response)
    }

    pub async fn start_engine(&self, id: &str) -> Result<VehicleResponse, AppError> {
        self.perform(Some(id), VehicleAction::StartEngine).await
    }

    pub async fn stop_engine(&self, id: &str) -> Result<VehicleResponse, AppError> {
        self.perform(Some(id), VehicleAction::StopEngine).await
    }

    pub async fn add_gas(&self, id: &str) -> Result<VehicleResponse, AppError> {
        self.perform(Some(id), VehicleAction::AddGas).await
    }

    /// Resolver el slug de acción recibido por la API JSON
    pub fn parse_action(slug: &str) -> Result<VehicleAction, AppError> {
        VehicleAction::from_slug(slug).ok_or_else(|| {
            bad_request_error(&format!(
                "Unknown action '{}', expected one of: start-engine, stop-engine, add-gas",
                slug
            ))
        })
    }
}
