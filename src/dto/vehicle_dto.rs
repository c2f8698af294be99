use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::vehicle::{Vehicle, VehicleKind};

// Query de la página principal: ?error=<mensaje>
#[derive(Debug, Default, Deserialize)]
pub struct IndexQuery {
    pub error: Option<String>,
}

// Query de las acciones sobre un vehículo: ?id=<id>
#[derive(Debug, Default, Deserialize)]
pub struct VehicleIdQuery {
    pub id: Option<String>,
}

// Response de vehículo
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VehicleResponse {
    pub id: String,
    pub kind: VehicleKind,
    pub brand: String,
    pub model: String,
    pub color: String,
    pub year: i32,
    pub engine_type: String,
    pub horsepower: i32,
    pub transmission: String,
    pub warranty_years: i32,
    pub fuel_level: f64,
    pub fuel_capacity: f64,
    pub engine_running: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Vehicle> for VehicleResponse {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            id: vehicle.id().to_string(),
            kind: vehicle.kind,
            brand: vehicle.brand.clone(),
            model: vehicle.model.clone(),
            color: vehicle.color.clone(),
            year: vehicle.year,
            engine_type: vehicle.engine_type.clone(),
            horsepower: vehicle.horsepower,
            transmission: vehicle.transmission.clone(),
            warranty_years: vehicle.warranty_years,
            fuel_level: vehicle.fuel_level(),
            fuel_capacity: vehicle.fuel_capacity(),
            engine_running: vehicle.is_engine_running(),
            created_at: vehicle.created_at,
        }
    }
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self::from(&vehicle)
    }
}

// Response genérica
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}
