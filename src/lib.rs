//! Asyncquence Rust Library
//!
//! Capa de aplicación sobre `asyncquence-core`:
//! - `config`: configuración cargada desde el entorno (.env).
//! - `errors`: errores de aplicación y el error genérico mensaje + código.
//! - `logging`: inicialización de `env_logger`.
//! - `demo`: la cadena de ejemplo que ejecuta el binario.
//!
//! Puede usarse desde `main.rs` o por otros crates/clientes.

pub mod config;
pub mod demo;
pub mod errors;
pub mod logging;

#[cfg(test)]
mod tests {
	use super::errors::{CoreError, GeneralError};

	#[test]
	fn core_error_tests() {
		let i = CoreError::Internal("fallo".into()).to_string();
		assert_eq!(i, "Error interno: fallo");
	}

	#[test]
	fn general_error_tests() {
		let g = GeneralError::with_code("x", 7).to_string();
		assert_eq!(g, "x (código 7)");
	}
}
