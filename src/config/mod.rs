//! Configuración del proyecto
//!
//! Este módulo contiene las variables de entorno y las reglas de combustible
//! configurables.

pub mod environment;

pub use environment::*;
