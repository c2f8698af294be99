//! Factory Method de vehículos
//!
//! `VehicleVariant` asocia cada modelo disponible con la función que configura
//! su builder. Las variantes no tienen estado: cada `create` devuelve un
//! vehículo nuevo e independiente.

pub mod ford;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::builders::CarBuilder;
use crate::models::vehicle::Vehicle;
use crate::utils::errors::{bad_request_error, AppError};

/// Modelos que el catálogo sabe fabricar
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum VehicleVariant {
    Mustang,
    Explorer,
    Escape,
}

impl VehicleVariant {
    pub const ALL: [VehicleVariant; 3] = [
        VehicleVariant::Mustang,
        VehicleVariant::Explorer,
        VehicleVariant::Escape,
    ];

    /// Builder preconfigurado para la variante
    pub fn builder(self) -> CarBuilder {
        let configure: fn() -> CarBuilder = match self {
            VehicleVariant::Mustang => ford::mustang,
            VehicleVariant::Explorer => ford::explorer,
            VehicleVariant::Escape => ford::escape,
        };
        configure()
    }

    /// Fabricar un vehículo nuevo de esta variante
    pub fn create(self) -> Vehicle {
        self.builder().build()
    }

    pub fn slug(self) -> &'static str {
        match self {
            VehicleVariant::Mustang => "mustang",
            VehicleVariant::Explorer => "explorer",
            VehicleVariant::Escape => "escape",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.slug().eq_ignore_ascii_case(slug))
    }
}

impl fmt::Display for VehicleVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for VehicleVariant {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slug(s).ok_or_else(|| {
            bad_request_error(&format!(
                "Unknown vehicle variant '{}', expected one of: mustang, explorer, escape",
                s
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::car_builder::current_year;

    #[test]
    fn test_escape_configuration() {
        let vehicle = VehicleVariant::Escape.create();

        assert_eq!(vehicle.brand, "Ford");
        assert_eq!(vehicle.model, "Escape");
        assert_eq!(vehicle.color, "Red");
        assert_eq!(vehicle.engine_type, "I4 Turbo");
        assert_eq!(vehicle.horsepower, 250);
        assert_eq!(vehicle.transmission, "Automatic");
        assert_eq!(vehicle.warranty_years, 3);
        assert_eq!(vehicle.year, current_year());
    }

    #[test]
    fn test_mustang_uses_builder_defaults() {
        let vehicle = VehicleVariant::Mustang.create();
        let defaults = CarBuilder::new().build();

        assert!(vehicle.same_configuration(&defaults));
        assert_eq!(vehicle.display_name(), "Ford Mustang");
    }

    #[test]
    fn test_explorer_configuration() {
        let vehicle = VehicleVariant::Explorer.create();

        assert_eq!(vehicle.display_name(), "Ford Explorer");
        assert_eq!(vehicle.color, "Black");
        assert_eq!(vehicle.engine_type, "V6 EcoBoost");
        assert_eq!(vehicle.horsepower, 400);
        assert_eq!(vehicle.warranty_years, 3);
    }

    #[test]
    fn test_create_twice_gives_independent_vehicles() {
        for variant in VehicleVariant::ALL {
            let mut first = variant.create();
            let second = variant.create();

            assert!(first.same_configuration(&second), "{} differs", variant);
            assert_ne!(first.id(), second.id());

            first.start_engine().unwrap();
            assert!(first.is_engine_running());
            assert!(!second.is_engine_running());
        }
    }

    #[test]
    fn test_slugs() {
        for variant in VehicleVariant::ALL {
            assert_eq!(VehicleVariant::from_slug(variant.slug()), Some(variant));
        }
        assert_eq!(VehicleVariant::from_slug("ESCAPE"), Some(VehicleVariant::Escape));
        assert_eq!(VehicleVariant::from_slug("focus"), None);
        assert!(matches!(
            "focus".parse::<VehicleVariant>(),
            Err(AppError::BadRequest(_))
        ));
    }
}
