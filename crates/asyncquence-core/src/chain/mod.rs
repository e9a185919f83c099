//! Cadena secuencial de steps asíncronos.
//!
//! - `core`: construcción de la cadena (append incondicional y condicional).
//! - `driver`: ejecución serial (`run`, `spawn`, `go`).
//! - `outcome`: estado terminal de una ejecución.

pub mod core;
mod driver;
mod outcome;

pub use self::core::Chain;
pub use driver::run_all;
pub use outcome::ChainOutcome;
