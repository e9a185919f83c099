//! Inicialización del logger del binario.
//!
//! Las librerías sólo usan la fachada `log`; aquí se instala `env_logger` con
//! el filtro de `LoggingConfig`.
use crate::config::LoggingConfig;
use crate::errors::CoreError;

pub fn init(config: &LoggingConfig) -> Result<(), CoreError> {
    env_logger::Builder::new().parse_filters(&config.filter)
                              .format_timestamp_millis()
                              .try_init()
                              .map_err(|e| CoreError::Config(format!("logger: {e}")))
}
