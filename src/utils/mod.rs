//! Utilidades del sistema
//!
//! Este módulo contiene el manejo de errores compartido por el repositorio,
//! los controladores y las rutas.

pub mod errors;
