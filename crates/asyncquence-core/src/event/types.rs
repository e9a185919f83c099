use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::step::Decision;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChainEventKind {
    /// Primer evento de toda ejecución.
    ChainStarted { step_count: usize },
    /// El step `index` recibió su continuación. No implica resolución.
    StepStarted { index: usize, name: String },
    StepResolved { index: usize, name: String, decision: Decision },
    /// Evento terminal: el step `index` resolvió `Halt`.
    ChainHalted { index: usize },
    /// Evento terminal: el handle del step `index` se descartó sin resolver.
    ChainStalled { index: usize },
    /// Evento terminal: todos los steps resolvieron `Continue`.
    ChainExhausted { executed: usize },
}

impl ChainEventKind {
    /// Abreviatura de una letra, útil para comparar secuencias en tests.
    pub fn variant_code(&self) -> &'static str {
        match self {
            ChainEventKind::ChainStarted { .. } => "I",
            ChainEventKind::StepStarted { .. } => "S",
            ChainEventKind::StepResolved { .. } => "R",
            ChainEventKind::ChainHalted { .. } => "H",
            ChainEventKind::ChainStalled { .. } => "X",
            ChainEventKind::ChainExhausted { .. } => "C",
        }
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self,
                 ChainEventKind::ChainHalted { .. } | ChainEventKind::ChainStalled { .. } | ChainEventKind::ChainExhausted { .. })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainEvent {
    pub seq: u64, // orden de append dentro de la cadena
    pub chain_id: Uuid,
    pub kind: ChainEventKind,
    pub ts: DateTime<Utc>,
}
