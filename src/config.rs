//! Configuración central de la aplicación.
//! Carga variables de entorno (.env vía `dotenvy`) y expone una estructura
//! inmutable inicializada una sola vez (`config()`).
use std::env;
use std::str::FromStr;

use once_cell::sync::{Lazy, OnceCell};

use crate::errors::CoreError;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenvy::dotenv(); // ignora error si no existe .env
});

static CONFIG: OnceCell<AppConfig> = OnceCell::new();

pub const LOG_FILTER_VAR: &str = "ASYNCQUENCE_LOG";
pub const DEMO_STEPS_VAR: &str = "ASYNCQUENCE_DEMO_STEPS";
pub const DEMO_HALT_AT_VAR: &str = "ASYNCQUENCE_DEMO_HALT_AT";
pub const DEMO_DELAY_VAR: &str = "ASYNCQUENCE_DEMO_DELAY_MS";

/// Configuración global de la aplicación.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub demo: DemoConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Filtro en formato `env_logger` (`info`, `asyncquence=debug`, ...).
    pub filter: String,
}

/// Parámetros de la cadena de demostración del binario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Cantidad de steps.
    pub steps: usize,
    /// Índice del step que resuelve `Halt`. `None` recorre la cadena entera.
    pub halt_at: Option<usize>,
    /// Demora simulada de cada step antes de resolver.
    pub step_delay_ms: u64,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: "info".to_string() }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self { steps: 3,
               halt_at: Some(1),
               step_delay_ms: 10 }
    }
}

impl AppConfig {
    /// Lee la configuración del entorno del proceso (cargando `.env` antes).
    pub fn from_env() -> Result<Self, CoreError> {
        Lazy::force(&DOTENV_LOADED);
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construye la configuración a partir de una función de búsqueda
    /// arbitraria; las claves ausentes toman su valor por defecto.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
        where F: Fn(&str) -> Option<String>
    {
        let defaults = Self::default();
        let filter = lookup(LOG_FILTER_VAR).filter(|v| !v.trim().is_empty())
                                           .unwrap_or(defaults.logging.filter);
        let steps = parse_or(&lookup, DEMO_STEPS_VAR, defaults.demo.steps)?;
        let step_delay_ms = parse_or(&lookup, DEMO_DELAY_VAR, defaults.demo.step_delay_ms)?;
        let halt_at = match lookup(DEMO_HALT_AT_VAR) {
            None => defaults.demo.halt_at,
            Some(raw) => match raw.trim() {
                "" | "none" | "never" => None,
                value => Some(parse_value(DEMO_HALT_AT_VAR, value)?),
            },
        };
        Ok(Self { logging: LoggingConfig { filter },
                  demo: DemoConfig { steps,
                                     halt_at,
                                     step_delay_ms } })
    }
}

fn parse_value<T: FromStr>(key: &str, raw: &str) -> Result<T, CoreError> {
    raw.trim()
       .parse()
       .map_err(|_| CoreError::Config(format!("{key} inválido: '{raw}'")))
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> Result<T, CoreError>
    where T: FromStr,
          F: Fn(&str) -> Option<String>
{
    match lookup(key) {
        Some(raw) => parse_value(key, &raw),
        None => Ok(default),
    }
}

/// Configuración global, leída del entorno la primera vez que se pide.
pub fn config() -> Result<&'static AppConfig, CoreError> {
    CONFIG.get_or_try_init(AppConfig::from_env)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn missing_keys_take_defaults() {
        let cfg = AppConfig::from_lookup(lookup_from(&[])).expect("defaults");
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.demo.halt_at, Some(1));
    }

    #[test]
    fn explicit_values_override_defaults() {
        let cfg = AppConfig::from_lookup(lookup_from(&[(LOG_FILTER_VAR, "asyncquence=debug"),
                                                       (DEMO_STEPS_VAR, "5"),
                                                       (DEMO_HALT_AT_VAR, "never"),
                                                       (DEMO_DELAY_VAR, " 0 ")])).expect("parse");
        assert_eq!(cfg.logging.filter, "asyncquence=debug");
        assert_eq!(cfg.demo, DemoConfig { steps: 5, halt_at: None, step_delay_ms: 0 });
    }

    #[test]
    fn malformed_number_is_config_error() {
        let err = AppConfig::from_lookup(lookup_from(&[(DEMO_STEPS_VAR, "tres")])).unwrap_err();
        assert!(matches!(err, CoreError::Config(ref m) if m.contains(DEMO_STEPS_VAR)));

        let err = AppConfig::from_lookup(lookup_from(&[(DEMO_HALT_AT_VAR, "-1")])).unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn blank_log_filter_falls_back_to_default() {
        let cfg = AppConfig::from_lookup(lookup_from(&[(LOG_FILTER_VAR, "  ")])).expect("parse");
        assert_eq!(cfg.logging.filter, "info");
    }
}
