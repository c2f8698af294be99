//! Modelos del sistema
//!
//! Este módulo contiene el modelo de dominio de vehículos.

pub mod vehicle;

pub use vehicle::{FuelPolicy, Vehicle, VehicleKind};
