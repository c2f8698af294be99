//! Configuraciones fijas de los modelos Ford
//!
//! Cada función devuelve el builder ya configurado para un modelo. Agregar un
//! modelo nuevo es agregar una función aquí y una variante en `VehicleVariant`.

use crate::builders::CarBuilder;

/// Ford Mustang: los valores por defecto del builder
pub fn mustang() -> CarBuilder {
    CarBuilder::new()
        .set_brand("Ford")
        .set_model("Mustang")
        .with_all_defaults()
}

/// Ford Explorer
pub fn explorer() -> CarBuilder {
    CarBuilder::new()
        .set_brand("Ford")
        .set_model("Explorer")
        .set_color("Black")
        .set_engine_type("V6 EcoBoost")
        .set_horsepower(400)
        .with_current_year()
        .with_standard_warranty()
        .with_automatic_transmission()
}

/// Ford Escape: rojo, I4 Turbo de 250 HP
pub fn escape() -> CarBuilder {
    CarBuilder::new()
        .set_brand("Ford")
        .set_model("Escape")
        .set_color("Red")
        .set_engine_type("I4 Turbo")
        .set_horsepower(250)
        .with_current_year()
        .with_standard_warranty()
        .with_automatic_transmission()
}
