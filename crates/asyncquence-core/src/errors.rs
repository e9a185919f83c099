//! Errores específicos del core (simples por ahora).

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum ChainError {
    #[error("chain driver is gone (run future dropped before resolution)")] DriverGone,
    #[error("no tokio runtime available to spawn the chain")] NoRuntime,
}
