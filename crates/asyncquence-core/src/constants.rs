//! Constantes del motor core.

/// Nombre usado en logs y eventos cuando un step no declara uno propio.
pub const ANONYMOUS_STEP_NAME: &str = "anonymous";

/// Target de `log` bajo el que el driver emite sus mensajes.
pub const LOG_TARGET: &str = "asyncquence";
