use serde::{Deserialize, Serialize};

/// Cómo terminó una ejecución de la cadena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChainOutcome {
    /// Todos los steps resolvieron `Continue` (incluye la cadena vacía).
    Exhausted { executed: usize },
    /// El step `index` resolvió `Halt`.
    Halted { index: usize },
    /// El step `index` descartó su continuación sin resolverla.
    Stalled { index: usize },
}

impl ChainOutcome {
    /// Cantidad de steps que llegaron a iniciarse.
    pub fn executed(&self) -> usize {
        match *self {
            ChainOutcome::Exhausted { executed } => executed,
            ChainOutcome::Halted { index } | ChainOutcome::Stalled { index } => index + 1,
        }
    }

    /// Índice del step donde se detuvo la cadena, si no llegó al final.
    pub fn stopped_at(&self) -> Option<usize> {
        match *self {
            ChainOutcome::Exhausted { .. } => None,
            ChainOutcome::Halted { index } | ChainOutcome::Stalled { index } => Some(index),
        }
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        matches!(self, ChainOutcome::Exhausted { .. })
    }
}
