use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::models::vehicle::Vehicle;
use crate::utils::errors::{conflict_error, not_found_error, AppError};

#[derive(Default)]
struct VehicleStore {
    /// Orden de inserción
    vehicles: Vec<Vehicle>,
    /// id -> posición en `vehicles`
    index: HashMap<String, usize>,
}

/// Repositorio en memoria de vehículos.
/// Un solo lock protege toda la colección; las mutaciones de estado de un
/// vehículo se hacen dentro de `update` para que no se pisen entre requests.
#[derive(Default)]
pub struct VehicleRepository {
    store: RwLock<VehicleStore>,
}

impl VehicleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_vehicle(&self, vehicle: Vehicle) -> Result<(), AppError> {
        let mut store = self.store.write().await;

        if store.index.contains_key(vehicle.id()) {
            return Err(conflict_error("Vehicle", "id", vehicle.id()));
        }

        let position = store.vehicles.len();
        store.index.insert(vehicle.id().to_string(), position);
        debug!("💾 Vehículo {} almacenado en posición {}", vehicle.id(), position);
        store.vehicles.push(vehicle);

        Ok(())
    }

    pub async fn find(&self, id: &str) -> Result<Vehicle, AppError> {
        let store = self.store.read().await;
        store
            .index
            .get(id)
            .map(|&position| store.vehicles[position].clone())
            .ok_or_else(|| not_found_error("Vehicle", id))
    }

    /// Copia de todos los vehículos en orden de inserción
    pub async fn list(&self) -> Vec<Vehicle> {
        self.store.read().await.vehicles.clone()
    }

    pub async fn count(&self) -> usize {
        self.store.read().await.vehicles.len()
    }

    /// Buscar y mutar un vehículo bajo el lock de escritura.
    /// Si `operation` falla el vehículo queda como la operación lo dejó;
    /// las operaciones de `Vehicle` validan antes de mutar.
    pub async fn update<T, F>(&self, id: &str, operation: F) -> Result<T, AppError>
    where
        F: FnOnce(&mut Vehicle) -> Result<T, AppError>,
    {
        let mut store = self.store.write().await;
        let position = *store
            .index
            .get(id)
            .ok_or_else(|| not_found_error("Vehicle", id))?;

        operation(&mut store.vehicles[position])
    }
}
