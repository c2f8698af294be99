//! Builders de vehículos

pub mod car_builder;

pub use car_builder::CarBuilder;
