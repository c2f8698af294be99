//! Builder de autos
//!
//! `CarBuilder` acumula la configuración con métodos encadenados y produce un
//! `Vehicle` nuevo en cada llamada a `build`. Los valores por defecto están
//! centralizados en `Default` y en los métodos `with_*`.

use chrono::{Datelike, Local};
use uuid::Uuid;

use crate::models::vehicle::{FuelPolicy, Vehicle, VehicleSpec};

pub const DEFAULT_BRAND: &str = "Ford";
pub const DEFAULT_MODEL: &str = "Mustang";
pub const DEFAULT_COLOR: &str = "Red";
pub const STANDARD_ENGINE_TYPE: &str = "I4";
pub const STANDARD_HORSEPOWER: i32 = 200;
pub const AUTOMATIC_TRANSMISSION: &str = "Automatic";
pub const STANDARD_WARRANTY_YEARS: i32 = 3;

/// Año calendario actual según el reloj local
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Builder para construir vehículos de forma fluida
#[derive(Debug, Clone, PartialEq)]
pub struct CarBuilder {
    brand: String,
    model: String,
    color: String,
    year: i32,
    engine_type: String,
    horsepower: i32,
    transmission: String,
    warranty_years: i32,
    fuel: FuelPolicy,
}

impl Default for CarBuilder {
    fn default() -> Self {
        Self {
            brand: DEFAULT_BRAND.to_string(),
            model: DEFAULT_MODEL.to_string(),
            color: DEFAULT_COLOR.to_string(),
            year: current_year(),
            engine_type: STANDARD_ENGINE_TYPE.to_string(),
            horsepower: STANDARD_HORSEPOWER,
            transmission: AUTOMATIC_TRANSMISSION.to_string(),
            warranty_years: STANDARD_WARRANTY_YEARS,
            fuel: FuelPolicy::default(),
        }
    }
}

impl CarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    pub fn set_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn set_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn set_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Tipo de motor, ej. "V8", "V6", "I4 Turbo"
    pub fn set_engine_type(mut self, engine_type: impl Into<String>) -> Self {
        self.engine_type = engine_type.into();
        self
    }

    pub fn set_horsepower(mut self, horsepower: i32) -> Self {
        self.horsepower = horsepower;
        self
    }

    pub fn set_transmission(mut self, transmission: impl Into<String>) -> Self {
        self.transmission = transmission.into();
        self
    }

    pub fn set_warranty_years(mut self, years: i32) -> Self {
        self.warranty_years = years;
        self
    }

    /// Reglas de combustible del vehículo resultante
    pub fn with_fuel_policy(mut self, fuel: FuelPolicy) -> Self {
        self.fuel = fuel;
        self
    }

    /// Año actual, leído en el momento de la llamada
    pub fn with_current_year(mut self) -> Self {
        self.year = current_year();
        self
    }

    /// Garantía estándar de 3 años
    pub fn with_standard_warranty(mut self) -> Self {
        self.warranty_years = STANDARD_WARRANTY_YEARS;
        self
    }

    /// Motor estándar (I4, 200 HP)
    pub fn with_standard_engine(mut self) -> Self {
        self.engine_type = STANDARD_ENGINE_TYPE.to_string();
        self.horsepower = STANDARD_HORSEPOWER;
        self
    }

    pub fn with_automatic_transmission(mut self) -> Self {
        self.transmission = AUTOMATIC_TRANSMISSION.to_string();
        self
    }

    /// Aplica todos los valores por defecto, en orden fijo.
    /// Los setters llamados después sobreescriben estos valores.
    pub fn with_all_defaults(self) -> Self {
        self.with_current_year()
            .with_standard_warranty()
            .with_standard_engine()
            .with_automatic_transmission()
    }

    /// Construir un vehículo nuevo con la configuración actual.
    /// No modifica el builder: cada llamada produce otro vehículo con otro id.
    pub fn build(&self) -> Vehicle {
        Vehicle::from_spec(
            Uuid::new_v4().to_string(),
            VehicleSpec {
                brand: self.brand.clone(),
                model: self.model.clone(),
                color: self.color.clone(),
                year: self.year,
                engine_type: self.engine_type.clone(),
                horsepower: self.horsepower,
                transmission: self.transmission.clone(),
                warranty_years: self.warranty_years,
                fuel: self.fuel,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configuration() {
        let vehicle = CarBuilder::new().build();

        assert_eq!(vehicle.brand, "Ford");
        assert_eq!(vehicle.model, "Mustang");
        assert_eq!(vehicle.color, "Red");
        assert_eq!(vehicle.year, current_year());
        assert_eq!(vehicle.engine_type, "I4");
        assert_eq!(vehicle.horsepower, 200);
        assert_eq!(vehicle.transmission, "Automatic");
        assert_eq!(vehicle.warranty_years, 3);
        assert_eq!(vehicle.fuel_policy(), FuelPolicy::default());
    }

    #[test]
    fn test_setters_chain() {
        let vehicle = CarBuilder::new()
            .set_brand("Toyota")
            .set_model("Corolla")
            .set_color("White")
            .set_year(2019)
            .set_engine_type("V6")
            .set_horsepower(280)
            .set_transmission("Manual")
            .set_warranty_years(5)
            .build();

        assert_eq!(vehicle.display_name(), "Toyota Corolla");
        assert_eq!(vehicle.color, "White");
        assert_eq!(vehicle.year, 2019);
        assert_eq!(vehicle.engine_type, "V6");
        assert_eq!(vehicle.horsepower, 280);
        assert_eq!(vehicle.transmission, "Manual");
        assert_eq!(vehicle.warranty_years, 5);
    }

    #[test]
    fn test_setters_accept_any_value() {
        let vehicle = CarBuilder::new()
            .set_brand("")
            .set_horsepower(-1)
            .set_warranty_years(-3)
            .build();

        assert_eq!(vehicle.brand, "");
        assert_eq!(vehicle.horsepower, -1);
        assert_eq!(vehicle.warranty_years, -3);
    }

    #[test]
    fn test_build_twice_yields_same_configuration_and_new_ids() {
        let builder = CarBuilder::new().set_color("Blue").set_horsepower(310);

        let first = builder.build();
        let second = builder.build();

        assert!(first.same_configuration(&second));
        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn test_override_after_all_defaults_wins() {
        let vehicle = CarBuilder::new()
            .set_year(1999)
            .set_engine_type("V8")
            .set_horsepower(450)
            .set_transmission("Manual")
            .set_warranty_years(10)
            .with_all_defaults()
            .set_horsepower(480)
            .set_transmission("Manual")
            .build();

        // defaults primero
        assert_eq!(vehicle.year, current_year());
        assert_eq!(vehicle.engine_type, "I4");
        assert_eq!(vehicle.warranty_years, 3);
        // overrides después
        assert_eq!(vehicle.horsepower, 480);
        assert_eq!(vehicle.transmission, "Manual");
    }

    #[test]
    fn test_individual_defaults() {
        let builder = CarBuilder::new()
            .set_engine_type("V8")
            .set_horsepower(450)
            .set_warranty_years(1)
            .set_transmission("CVT");

        let vehicle = builder.clone().with_standard_engine().build();
        assert_eq!(vehicle.engine_type, "I4");
        assert_eq!(vehicle.horsepower, 200);
        assert_eq!(vehicle.warranty_years, 1);

        let vehicle = builder.clone().with_standard_warranty().build();
        assert_eq!(vehicle.warranty_years, 3);
        assert_eq!(vehicle.engine_type, "V8");

        let vehicle = builder.with_automatic_transmission().build();
        assert_eq!(vehicle.transmission, "Automatic");
    }

    #[test]
    fn test_with_fuel_policy() {
        let fuel = FuelPolicy {
            capacity: 40.0,
            increment: 5.0,
            min_to_start: 2.0,
            initial_level: 0.0,
        };
        let vehicle = CarBuilder::new().with_fuel_policy(fuel).build();

        assert_eq!(vehicle.fuel_policy(), fuel);
        assert_eq!(vehicle.fuel_level(), 0.0);
        assert_eq!(vehicle.fuel_capacity(), 40.0);
    }
}
