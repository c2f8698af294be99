//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle, sus atributos estáticos (marca,
//! modelo, motor...) y su estado mutable (combustible, motor encendido).
//! Los vehículos solo se crean a través de `CarBuilder`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::errors::{bad_request_error, invalid_operation_error, AppResult};

/// Tipo de vehículo. Por ahora solo existen autos.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VehicleKind {
    Car,
}

/// Reglas de combustible de un vehículo
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FuelPolicy {
    /// Capacidad máxima del tanque
    pub capacity: f64,
    /// Cantidad que agrega cada `add_gas`
    pub increment: f64,
    /// Combustible mínimo para poder encender el motor
    pub min_to_start: f64,
    /// Combustible con el que sale de fábrica
    pub initial_level: f64,
}

impl Default for FuelPolicy {
    fn default() -> Self {
        Self {
            capacity: 60.0,
            increment: 10.0,
            min_to_start: 1.0,
            initial_level: 20.0,
        }
    }
}

impl FuelPolicy {
    /// Validar la coherencia de la política
    pub fn validate(&self) -> AppResult<()> {
        let values = [self.capacity, self.increment, self.min_to_start, self.initial_level];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(bad_request_error("all fuel values must be finite numbers"));
        }
        if self.capacity <= 0.0 {
            return Err(bad_request_error(&format!(
                "capacity must be positive, got {}",
                self.capacity
            )));
        }
        if self.increment <= 0.0 {
            return Err(bad_request_error(&format!(
                "increment must be positive, got {}",
                self.increment
            )));
        }
        if self.min_to_start <= 0.0 || self.min_to_start > self.capacity {
            return Err(bad_request_error(&format!(
                "min_to_start must be in (0, {}], got {}",
                self.capacity, self.min_to_start
            )));
        }
        if self.initial_level < 0.0 || self.initial_level > self.capacity {
            return Err(bad_request_error(&format!(
                "initial_level must be in [0, {}], got {}",
                self.capacity, self.initial_level
            )));
        }
        Ok(())
    }
}

/// Vehicle principal
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Vehicle {
    id: String,
    pub kind: VehicleKind,
    pub brand: String,
    pub model: String,
    pub color: String,
    pub year: i32,
    pub engine_type: String,
    pub horsepower: i32,
    pub transmission: String,
    pub warranty_years: i32,
    fuel_level: f64,
    engine_running: bool,
    fuel: FuelPolicy,
    pub created_at: DateTime<Utc>,
}

/// Configuración estática con la que `CarBuilder` arma un vehículo
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct VehicleSpec {
    pub brand: String,
    pub model: String,
    pub color: String,
    pub year: i32,
    pub engine_type: String,
    pub horsepower: i32,
    pub transmission: String,
    pub warranty_years: i32,
    pub fuel: FuelPolicy,
}

impl Vehicle {
    pub(crate) fn from_spec(id: String, spec: VehicleSpec) -> Self {
        Self {
            id,
            kind: VehicleKind::Car,
            brand: spec.brand,
            model: spec.model,
            color: spec.color,
            year: spec.year,
            engine_type: spec.engine_type,
            horsepower: spec.horsepower,
            transmission: spec.transmission,
            warranty_years: spec.warranty_years,
            fuel_level: spec.fuel.initial_level,
            engine_running: false,
            fuel: spec.fuel,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn fuel_level(&self) -> f64 {
        self.fuel_level
    }

    pub fn fuel_capacity(&self) -> f64 {
        self.fuel.capacity
    }

    pub fn fuel_policy(&self) -> FuelPolicy {
        self.fuel
    }

    pub fn is_engine_running(&self) -> bool {
        self.engine_running
    }

    /// Nombre para mostrar, ej. "Ford Mustang"
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }

    /// Compara todos los campos de configuración (ignora id, fecha y estado)
    pub fn same_configuration(&self, other: &Vehicle) -> bool {
        self.kind == other.kind
            && self.brand == other.brand
            && self.model == other.model
            && self.color == other.color
            && self.year == other.year
            && self.engine_type == other.engine_type
            && self.horsepower == other.horsepower
            && self.transmission == other.transmission
            && self.warranty_years == other.warranty_years
            && self.fuel == other.fuel
    }

    /// Encender el motor
    pub fn start_engine(&mut self) -> AppResult<()> {
        if self.engine_running {
            return Err(invalid_operation_error(&format!(
                "The engine of {} is already running",
                self.display_name()
            )));
        }
        if self.fuel_level < self.fuel.min_to_start {
            return Err(invalid_operation_error(&format!(
                "Not enough fuel to start {} ({:.1} of {:.1} required)",
                self.display_name(),
                self.fuel_level,
                self.fuel.min_to_start
            )));
        }
        self.engine_running = true;
        Ok(())
    }

    /// Apagar el motor
    pub fn stop_engine(&mut self) -> AppResult<()> {
        if !self.engine_running {
            return Err(invalid_operation_error(&format!(
                "The engine of {} is already stopped",
                self.display_name()
            )));
        }
        self.engine_running = false;
        Ok(())
    }

    /// Cargar combustible; nunca supera la capacidad del tanque
    pub fn add_gas(&mut self) -> AppResult<()> {
        if self.fuel_level >= self.fuel.capacity {
            return Err(invalid_operation_error(&format!(
                "The fuel tank of {} is already full",
                self.display_name()
            )));
        }
        self.fuel_level = (self.fuel_level + self.fuel.increment).min(self.fuel.capacity);
        Ok(())
    }
}
