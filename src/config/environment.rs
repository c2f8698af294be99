//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use anyhow::{anyhow, Context, Result};
use std::env;
use std::str::FromStr;

use crate::models::vehicle::FuelPolicy;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    /// Reglas de combustible aplicadas a cada vehículo creado
    pub fuel: FuelPolicy,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            cors_origins: Vec::new(),
            fuel: FuelPolicy::default(),
        }
    }
}

impl EnvironmentConfig {
    /// Leer la configuración desde variables de entorno.
    /// Las variables ausentes toman el valor por defecto; las mal formadas son error.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Igual que `from_env`, pero con una fuente de variables inyectable
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let fuel_defaults = defaults.fuel;

        let fuel = FuelPolicy {
            capacity: parse_or(&lookup, "FUEL_CAPACITY", fuel_defaults.capacity)?,
            increment: parse_or(&lookup, "FUEL_INCREMENT", fuel_defaults.increment)?,
            min_to_start: parse_or(&lookup, "FUEL_MIN_TO_START", fuel_defaults.min_to_start)?,
            initial_level: parse_or(&lookup, "FUEL_INITIAL_LEVEL", fuel_defaults.initial_level)?,
        };
        fuel.validate()
            .map_err(|e| anyhow!("Política de combustible inválida: {}", e.user_message()))?;

        Ok(Self {
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            port: parse_or(&lookup, "PORT", defaults.port)?,
            host: lookup("HOST").unwrap_or(defaults.host),
            cors_origins: lookup("CORS_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            fuel,
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a valid number, got '{}'", key, raw)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = EnvironmentConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.server_url(), "0.0.0.0:3000");
        assert!(config.is_development());
        assert!(config.cors_origins.is_empty());
        assert_eq!(config.fuel, FuelPolicy::default());
    }

    #[test]
    fn test_overrides_are_parsed() {
        let config = EnvironmentConfig::from_lookup(lookup_from(&[
            ("ENVIRONMENT", "production"),
            ("PORT", "8080"),
            ("CORS_ORIGINS", "http://a.test, http://b.test,"),
            ("FUEL_INCREMENT", "5"),
            ("FUEL_CAPACITY", "40.5"),
        ]))
        .unwrap();

        assert!(config.is_production());
        assert_eq!(config.port, 8080);
        assert_eq!(config.cors_origins, vec!["http://a.test", "http://b.test"]);
        assert_eq!(config.fuel.increment, 5.0);
        assert_eq!(config.fuel.capacity, 40.5);
    }

    #[test]
    fn test_invalid_number_is_error() {
        let result = EnvironmentConfig::from_lookup(lookup_from(&[("PORT", "abc")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_inconsistent_fuel_policy_is_error() {
        let result = EnvironmentConfig::from_lookup(lookup_from(&[
            ("FUEL_CAPACITY", "10"),
            ("FUEL_INITIAL_LEVEL", "20"),
        ]));
        assert!(result.is_err());

        let result = EnvironmentConfig::from_lookup(lookup_from(&[("FUEL_INCREMENT", "0")]));
        let message = result.unwrap_err().to_string();
        assert_eq!(
            message,
            "Política de combustible inválida: increment must be positive, got 0"
        );
    }

    #[test]
    fn test_wildcard_cors_origin_is_kept() {
        let config =
            EnvironmentConfig::from_lookup(lookup_from(&[("CORS_ORIGINS", "*")])).unwrap();
        assert_eq!(config.cors_origins, vec!["*"]);
    }
}
